//! # Core Type Definitions
//!
//! This module contains the core types for the PDP Insights dashboard:
//! - Audience identifiers (`Stakeholder`)
//! - Model input identifiers (`FeatureId`)
//! - Error types (`DashboardError`)
//!
//! ## Ordering Guarantees
//!
//! `Stakeholder` derives `Ord` in declaration order, so a `BTreeMap` keyed by
//! stakeholder iterates in the order the selector shows them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// STAKEHOLDER
// =============================================================================

/// A role-based audience used to filter which PDPs are shown.
///
/// The set is closed. Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stakeholder {
    Developers,
    PMs,
    Marketers,
    Designers,
    Publishers,
}

impl Stakeholder {
    /// Every stakeholder, in display order.
    pub const ALL: [Stakeholder; 5] = [
        Stakeholder::Developers,
        Stakeholder::PMs,
        Stakeholder::Marketers,
        Stakeholder::Designers,
        Stakeholder::Publishers,
    ];

    /// The display name, which is also the wire and selector value.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Stakeholder::Developers => "Developers",
            Stakeholder::PMs => "PMs",
            Stakeholder::Marketers => "Marketers",
            Stakeholder::Designers => "Designers",
            Stakeholder::Publishers => "Publishers",
        }
    }
}

impl fmt::Display for Stakeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stakeholder {
    type Err = DashboardError;

    /// Parse a display name. Matching is exact; "pms" is not "PMs".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stakeholder::ALL
            .into_iter()
            .find(|stakeholder| stakeholder.name() == s)
            .ok_or_else(|| DashboardError::UnknownStakeholder(s.to_string()))
    }
}

// =============================================================================
// FEATURE
// =============================================================================

/// Opaque identifier of a model input variable, e.g. `dau_bin_Very High`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub String);

impl FeatureId {
    /// Create a new feature identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the dashboard.
///
/// A missing PDP image is NOT an error; it becomes a warning in the render plan.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The stakeholder is not a known name or has no catalog entry.
    #[error("Unknown stakeholder: {0}")]
    UnknownStakeholder(String),

    /// A startup artifact (model or dataset) is absent.
    #[error("Missing {kind} artifact: {path}")]
    MissingArtifact { kind: &'static str, path: String },

    /// Configuration could not be parsed or is inconsistent.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
