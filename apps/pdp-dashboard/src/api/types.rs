//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//! Render plans and audits are served as the core types directly.

use pdp_core::Stakeholder;
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STAKEHOLDERS RESPONSE
// =============================================================================

/// Options of the selection input, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeholdersResponse {
    pub stakeholders: Vec<Stakeholder>,
}

// =============================================================================
// PAGE QUERY
// =============================================================================

/// Query string of the HTML dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    /// Selected stakeholder name; the first option when absent or empty.
    pub stakeholder: Option<String>,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Error body for JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
