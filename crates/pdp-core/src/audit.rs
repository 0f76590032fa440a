//! # Catalog Audit
//!
//! Reports catalog problems that rendering tolerates silently or surfaces only
//! one stakeholder at a time:
//! - features without a title
//! - features without an image
//! - features whose identifier holds characters the resolver leaves in place
//!   but that are unsafe in file names
//! - distinct features that resolve to the same file name
//! - titles that no stakeholder references
//!
//! The audit never fails. Features listed under several stakeholders are
//! checked once, at their first occurrence.

use crate::primitives::UNSAFE_FILENAME_CHARS;
use crate::{AssetProbe, AssetResolver, Catalogs, FeatureId, Stakeholder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A feature whose identifier carries unsafe characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsafeName {
    pub feature: FeatureId,
    pub chars: Vec<char>,
}

/// Several features sharing one image file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub file_name: String,
    pub features: Vec<FeatureId>,
}

/// A feature with no image, and who would have seen it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingAsset {
    pub feature: FeatureId,
    pub stakeholders: Vec<Stakeholder>,
}

/// Audit findings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogAudit {
    pub features_checked: usize,
    pub untitled: Vec<FeatureId>,
    pub missing_assets: Vec<MissingAsset>,
    pub unsafe_names: Vec<UnsafeName>,
    pub collisions: Vec<Collision>,
    pub orphan_titles: Vec<FeatureId>,
}

impl CatalogAudit {
    /// True when nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.untitled.is_empty()
            && self.missing_assets.is_empty()
            && self.unsafe_names.is_empty()
            && self.collisions.is_empty()
            && self.orphan_titles.is_empty()
    }
}

/// Characters in `feature` that are unsafe in a file name after sanitization,
/// each listed once in first-occurrence order.
#[must_use]
pub fn unsafe_chars(feature: &str) -> Vec<char> {
    let mut found: Vec<char> = Vec::new();
    for c in feature.chars() {
        if (UNSAFE_FILENAME_CHARS.contains(&c) || c.is_control()) && !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

/// Audit the catalogs against the resolver and probe.
pub fn audit<P: AssetProbe + ?Sized>(
    catalogs: &Catalogs,
    resolver: &AssetResolver,
    probe: &P,
) -> CatalogAudit {
    // First-occurrence order of each distinct feature, with its stakeholders.
    let mut order: Vec<&FeatureId> = Vec::new();
    let mut owners: BTreeMap<&FeatureId, Vec<Stakeholder>> = BTreeMap::new();
    for (stakeholder, feature) in catalogs.features.iter() {
        let entry = owners.entry(feature).or_default();
        if entry.is_empty() {
            order.push(feature);
        }
        if !entry.contains(&stakeholder) {
            entry.push(stakeholder);
        }
    }

    let mut report = CatalogAudit {
        features_checked: order.len(),
        ..CatalogAudit::default()
    };
    let mut by_file: BTreeMap<String, Vec<FeatureId>> = BTreeMap::new();

    for feature in &order {
        if catalogs.titles.get(feature).is_none() {
            report.untitled.push((*feature).clone());
        }

        if !probe.exists(&resolver.resolve(feature)) {
            report.missing_assets.push(MissingAsset {
                feature: (*feature).clone(),
                stakeholders: owners.get(feature).cloned().unwrap_or_default(),
            });
        }

        let chars = unsafe_chars(feature.as_str());
        if !chars.is_empty() {
            report.unsafe_names.push(UnsafeName {
                feature: (*feature).clone(),
                chars,
            });
        }

        by_file
            .entry(resolver.file_name(feature))
            .or_default()
            .push((*feature).clone());
    }

    report.collisions = by_file
        .into_iter()
        .filter(|(_, features)| features.len() > 1)
        .map(|(file_name, features)| Collision {
            file_name,
            features,
        })
        .collect();

    let referenced: BTreeSet<&FeatureId> = owners.keys().copied().collect();
    report.orphan_titles = catalogs
        .titles
        .features()
        .filter(|feature| !referenced.contains(feature))
        .cloned()
        .collect();

    report
}

// =============================================================================
// TESTS
// =============================================================================
