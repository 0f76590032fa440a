//! # Dashboard Configuration
//!
//! Optional TOML file (default `pdp-dashboard.toml` under the root).
//!
//! ```toml
//! [assets]
//! dir = "pdp_insights/frontend/pdps"
//! extension = "png"
//!
//! [artifacts]
//! model = "pdp_insights/models/random_search_rf_model.joblib"
//! dataset = "pdp_insights/data/enhanced_gaming_trends_data.csv"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8501
//!
//! # Replaces the built-in list of each stakeholder named here.
//! [stakeholders]
//! Designers = ["dau_x_duration", "engagement_level_High"]
//!
//! # Adds or replaces headings.
//! [titles]
//! dau_x_duration = "Designers – Session Intensity"
//! ```
//!
//! Relative paths are resolved against the dashboard root.

use pdp_core::{
    ArtifactSet, AssetResolver, Catalogs, DashboardError, Renderer, Stakeholder,
    primitives::{ASSET_EXTENSION, DEFAULT_ASSET_DIR, DEFAULT_DATASET_PATH, DEFAULT_MODEL_PATH},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file looked up under the root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pdp-dashboard.toml";

/// Maximum config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsSection {
    pub dir: PathBuf,
    pub extension: String,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_ASSET_DIR),
            extension: ASSET_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactsSection {
    pub model: PathBuf,
    pub dataset: PathBuf,
}

impl Default for ArtifactsSection {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub assets: AssetsSection,
    pub artifacts: ArtifactsSection,
    pub server: ServerSection,
    /// Stakeholder name → feature list, replacing the built-in list.
    pub stakeholders: BTreeMap<String, Vec<String>>,
    /// Feature → heading, merged over the built-in headings.
    pub titles: BTreeMap<String, String>,
}

impl DashboardConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, DashboardError> {
        toml::from_str(text).map_err(|e| DashboardError::ConfigError(e.to_string()))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `<root>/pdp-dashboard.toml`
    /// is used if present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, DashboardError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!("No config file at {}, using defaults", candidate.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let metadata = std::fs::metadata(&path).map_err(|e| {
            DashboardError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(DashboardError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|e| DashboardError::IoError(format!("Cannot read '{}': {}", path.display(), e)))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Self::from_toml(&text)
    }

    /// Built-in catalogs with this file's overrides applied.
    pub fn catalogs(&self) -> Result<Catalogs, DashboardError> {
        let mut catalogs = Catalogs::builtin();

        for (name, features) in &self.stakeholders {
            let stakeholder: Stakeholder = name.parse().map_err(|_| {
                DashboardError::ConfigError(format!(
                    "Unknown stakeholder '{}' in [stakeholders]",
                    name
                ))
            })?;
            catalogs
                .features
                .set(stakeholder, features.iter().map(String::as_str));
        }

        for (feature, title) in &self.titles {
            catalogs.titles.insert(feature.as_str(), title.as_str());
        }

        Ok(catalogs)
    }

    /// Asset resolver rooted at `root`.
    #[must_use]
    pub fn resolver(&self, root: &Path) -> AssetResolver {
        AssetResolver::new(root.join(&self.assets.dir), self.assets.extension.as_str())
    }

    /// Renderer over the configured catalogs and assets.
    pub fn renderer(&self, root: &Path) -> Result<Renderer, DashboardError> {
        Ok(Renderer::new(self.catalogs()?, self.resolver(root)))
    }

    /// Startup artifacts rooted at `root`.
    #[must_use]
    pub fn artifacts(&self, root: &Path) -> ArtifactSet {
        ArtifactSet::new(
            root.join(&self.artifacts.model),
            root.join(&self.artifacts.dataset),
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
