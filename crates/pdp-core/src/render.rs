//! # Render Module
//!
//! Turns one stakeholder selection into a list of draw instructions.
//!
//! Rendering is a pure function of the catalogs, the resolver and an
//! [`AssetProbe`]. Callers invoke it once per selection change and draw the
//! resulting [`RenderPlan`] with whatever UI they have (HTML, terminal, JSON).
//!
//! Per feature, in catalog order:
//!
//! | Asset    | Blocks emitted                          |
//! |----------|-----------------------------------------|
//! | present  | `Heading`, `Image`, `Separator`         |
//! | absent   | one `Warning`                           |

use crate::primitives::{CAPTION_PREFIX, MISSING_PREFIX, SECTION_INTRO};
use crate::{AssetProbe, AssetResolver, Catalogs, DashboardError, FeatureId, Stakeholder};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// RENDER INSTRUCTIONS
// =============================================================================

/// One draw instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderBlock {
    /// Section heading above a PDP.
    Heading { text: String },
    /// The PDP image.
    Image {
        feature: FeatureId,
        path: PathBuf,
        file_name: String,
        caption: String,
    },
    /// Visual break after a section.
    Separator,
    /// Non-fatal notice that a feature has no image.
    Warning { feature: FeatureId, message: String },
}

impl RenderBlock {
    /// True for `Warning` blocks.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, RenderBlock::Warning { .. })
    }
}

/// Everything needed to draw one stakeholder's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub stakeholder: Stakeholder,
    pub subheader: String,
    pub intro: String,
    pub blocks: Vec<RenderBlock>,
    /// Features drawn with an image.
    pub shown: usize,
    /// Features reported as missing.
    pub missing: usize,
}

impl RenderPlan {
    /// Headings in draw order.
    pub fn headings(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            RenderBlock::Heading { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Features that produced a warning, in draw order.
    pub fn missing_features(&self) -> impl Iterator<Item = &FeatureId> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            RenderBlock::Warning { feature, .. } => Some(feature),
            _ => None,
        })
    }
}

// =============================================================================
// RENDERER
// =============================================================================

/// Immutable render configuration.
#[derive(Debug, Clone)]
pub struct Renderer {
    catalogs: Catalogs,
    resolver: AssetResolver,
}

impl Renderer {
    /// Create a renderer over the given catalogs and resolver.
    #[must_use]
    pub fn new(catalogs: Catalogs, resolver: AssetResolver) -> Self {
        Self { catalogs, resolver }
    }

    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    #[must_use]
    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    /// Options for the selection input, in display order.
    #[must_use]
    pub fn stakeholders(&self) -> Vec<Stakeholder> {
        self.catalogs.features.stakeholders().collect()
    }

    /// Build the render plan for one stakeholder.
    ///
    /// Fails only when the stakeholder has no catalog entry. Missing images
    /// become `Warning` blocks and rendering continues.
    pub fn render<P: AssetProbe + ?Sized>(
        &self,
        stakeholder: Stakeholder,
        probe: &P,
    ) -> Result<RenderPlan, DashboardError> {
        let features = self.catalogs.features.features(stakeholder)?;

        let mut blocks = Vec::with_capacity(features.len() * 3);
        let mut shown = 0;
        let mut missing = 0;

        for feature in features {
            let path = self.resolver.resolve(feature);
            let title = self.catalogs.titles.title_for(feature);

            if probe.exists(&path) {
                blocks.push(RenderBlock::Heading {
                    text: title.to_string(),
                });
                blocks.push(RenderBlock::Image {
                    feature: feature.clone(),
                    file_name: self.resolver.file_name(feature),
                    path,
                    caption: format!("{CAPTION_PREFIX}{feature}"),
                });
                blocks.push(RenderBlock::Separator);
                shown += 1;
            } else {
                blocks.push(RenderBlock::Warning {
                    feature: feature.clone(),
                    message: format!("{MISSING_PREFIX}{feature}"),
                });
                missing += 1;
            }
        }

        Ok(RenderPlan {
            stakeholder,
            subheader: format!("PDP Insights for {stakeholder}"),
            intro: SECTION_INTRO.to_string(),
            blocks,
            shown,
            missing,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
