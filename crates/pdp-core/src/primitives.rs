//! # Dashboard Primitives
//!
//! Hardcoded runtime constants for the PDP Insights dashboard.
//!
//! Every path is relative to the dashboard root directory. The binary
//! may override them from its configuration file.

/// Directory holding the precomputed PDP images.
pub const DEFAULT_ASSET_DIR: &str = "pdp_insights/frontend/pdps";

/// Extension of every PDP image.
pub const ASSET_EXTENSION: &str = "png";

/// Serialized regression model checked at startup.
pub const DEFAULT_MODEL_PATH: &str = "pdp_insights/models/random_search_rf_model.joblib";

/// Dataset checked at startup.
pub const DEFAULT_DATASET_PATH: &str = "pdp_insights/data/enhanced_gaming_trends_data.csv";

// =============================================================================
// PAGE FRAMING
// =============================================================================

/// Browser tab title.
pub const PAGE_TITLE: &str = "Gaming Trends 2024 Insights";

/// Top-level heading of the dashboard.
pub const DASHBOARD_HEADING: &str = "Gaming Trends 2024 Insights Dashboard";

/// Line shown under the dashboard heading.
pub const DASHBOARD_TAGLINE: &str =
    "Explore predictions and actionable insights using XGBoost and PDPs";

/// Label of the stakeholder selector.
pub const SELECTOR_LABEL: &str = "Select Stakeholder Group";

/// Intro shown under each stakeholder subheader. Markdown emphasis is kept.
pub const SECTION_INTRO: &str = "this section displays **PDP Interpretations** and **feature-level** impact for the selected stakeholder.";

/// Caption prefix for every PDP image.
pub const CAPTION_PREFIX: &str = "PDP: ";

/// Warning prefix for a feature without an image.
pub const MISSING_PREFIX: &str = "No PDP found for feature: ";

// =============================================================================
// FILE NAME SAFETY
// =============================================================================

/// Characters replaced with `_` when deriving an asset file name.
pub const SANITIZED_CHARS: [char; 2] = [' ', '/'];

/// Characters the resolver does NOT replace but that many filesystems reject.
/// The catalog audit flags features containing them.
pub const UNSAFE_FILENAME_CHARS: [char; 8] = ['\\', ':', '*', '?', '"', '<', '>', '|'];
