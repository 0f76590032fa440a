//! # Catalog Module
//!
//! Immutable configuration that drives rendering:
//! - `FeatureCatalog`: stakeholder → ordered feature list
//! - `TitleCatalog`: feature → human-readable heading
//!
//! Both are plain values handed to the [`Renderer`](crate::Renderer).
//! Nothing here is global or mutable after construction.

use crate::{DashboardError, FeatureId, Stakeholder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// FEATURE CATALOG
// =============================================================================

/// Stakeholder → features, in display order.
///
/// A stakeholder may be absent (lookup fails). A feature may appear under
/// several stakeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureCatalog {
    entries: BTreeMap<Stakeholder, Vec<FeatureId>>,
}

impl FeatureCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in gaming-trends mapping.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.set(
            Stakeholder::Developers,
            ["scaled_daily_active_users_dau"],
        );
        catalog.set(
            Stakeholder::PMs,
            [
                "purchases_per_session",
                "release_month_freq",
                "release_dayofweek_freq",
                "release_quarter_freq",
                "dau_bin_Very High",
                "dau_bin_Medium",
                "dau_bin_Low",
                "dau_bin_High",
            ],
        );
        catalog.set(
            Stakeholder::Marketers,
            [
                "scaled_new_registrations",
                "stream_viewers_per_player",
                "scaled_social_media_mentions",
                "scaled_stream_viewership",
                "influencer_endorsements",
            ],
        );
        catalog.set(
            Stakeholder::Designers,
            [
                "dau_x_duration",
                "scaled_session_duration_minutes",
                "engagement_level_High",
            ],
        );
        catalog.set(
            Stakeholder::Publishers,
            [
                "scaled_ingame_purchases_",
                "top_genre_freq",
                "platform_freq",
            ],
        );
        catalog
    }

    /// Replace the feature list of one stakeholder.
    pub fn set<I, F>(&mut self, stakeholder: Stakeholder, features: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<FeatureId>,
    {
        self.entries
            .insert(stakeholder, features.into_iter().map(Into::into).collect());
    }

    /// Features of a stakeholder, in display order.
    pub fn features(&self, stakeholder: Stakeholder) -> Result<&[FeatureId], DashboardError> {
        self.entries
            .get(&stakeholder)
            .map(Vec::as_slice)
            .ok_or_else(|| DashboardError::UnknownStakeholder(stakeholder.name().to_string()))
    }

    /// Stakeholders present in the catalog, in display order.
    /// This is what populates the selection input.
    pub fn stakeholders(&self) -> impl Iterator<Item = Stakeholder> + '_ {
        self.entries.keys().copied()
    }

    /// Every (stakeholder, feature) pair in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Stakeholder, &FeatureId)> + '_ {
        self.entries
            .iter()
            .flat_map(|(stakeholder, features)| features.iter().map(move |f| (*stakeholder, f)))
    }

    /// Number of stakeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no stakeholder is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// TITLE CATALOG
// =============================================================================

/// Feature → heading shown above its PDP.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TitleCatalog {
    titles: BTreeMap<FeatureId, String>,
}

impl TitleCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in heading for every built-in feature.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (feature, title) in [
            ("scaled_daily_active_users_dau", "Developers – DAU Impact"),
            ("scaled_new_registrations", "Marketers – New Player Growth"),
            ("dau_x_duration", "Designers – Session Intensity"),
            ("scaled_ingame_purchases_", "Publishers – In-Game Spend"),
            (
                "stream_viewers_per_player",
                "Marketers – Stream Popularity per Player",
            ),
            (
                "scaled_social_media_mentions",
                "Marketers - Impact of Social Media Buzz on Revenue",
            ),
            (
                "dau_bin_High",
                "PMs – High DAU Tier\u{2019}s Relationship with Monetization",
            ),
            ("dau_bin_Low", "PMs – Low DAU Tier and Monetization Behavior"),
            ("dau_bin_Medium", "PMs – Medium DAU Tier Performance Insights"),
            (
                "dau_bin_Very High",
                "PMs – Very High DAU Tier: Saturation or Scale?",
            ),
            (
                "scaled_session_duration_minutes",
                "Designers – Session Length Influence on Revenue",
            ),
            (
                "purchases_per_session",
                "PMs – Average Purchases per Session vs Monetization",
            ),
            (
                "scaled_stream_viewership",
                "Marketers – General Stream Viewership vs Revenue Trends",
            ),
            (
                "engagement_level_High",
                "Designers – High Engagement User Segment Impact",
            ),
            (
                "release_month_freq",
                "PMs – Seasonal Release Trends and Revenue Impact",
            ),
            (
                "top_genre_freq",
                "Publishers – Popular Genres and Monetization Potential",
            ),
            (
                "release_dayofweek_freq",
                "PMs – Day of Release Influence on Revenue Performance",
            ),
            (
                "platform_freq",
                "Publishers – Platform Distribution and Monetization",
            ),
            (
                "influencer_endorsements",
                "Marketers – Endorsement Count and Revenue Impact",
            ),
            (
                "release_quarter_freq",
                "PMs – Quarterly Release Patterns and Monetization Trends",
            ),
        ] {
            catalog.insert(feature, title);
        }
        catalog
    }

    /// Add or replace a heading.
    pub fn insert(&mut self, feature: impl Into<FeatureId>, title: impl Into<String>) {
        self.titles.insert(feature.into(), title.into());
    }

    /// Heading for a feature, if one is configured.
    #[must_use]
    pub fn get(&self, feature: &FeatureId) -> Option<&str> {
        self.titles.get(feature).map(String::as_str)
    }

    /// Heading for a feature, falling back to the raw identifier.
    #[must_use]
    pub fn title_for<'a>(&'a self, feature: &'a FeatureId) -> &'a str {
        self.get(feature).unwrap_or(feature.as_str())
    }

    /// Features that have a heading.
    pub fn features(&self) -> impl Iterator<Item = &FeatureId> + '_ {
        self.titles.keys()
    }

    /// Number of headings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// True when no heading is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

// =============================================================================
// CATALOGS
// =============================================================================

/// Both catalogs, bundled for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalogs {
    pub features: FeatureCatalog,
    pub titles: TitleCatalog,
}

impl Catalogs {
    /// Bundle two catalogs.
    #[must_use]
    pub fn new(features: FeatureCatalog, titles: TitleCatalog) -> Self {
        Self { features, titles }
    }

    /// The built-in gaming-trends configuration.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(FeatureCatalog::builtin(), TitleCatalog::builtin())
    }
}

// =============================================================================
// TESTS
// =============================================================================
