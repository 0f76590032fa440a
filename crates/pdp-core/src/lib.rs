//! # pdp-core
//!
//! The render engine for the PDP Insights dashboard - THE LOGIC.
//!
//! Given a stakeholder role, this crate decides which precomputed partial
//! dependence plots to show, in which order, under which headings, and which
//! ones to report as missing. It returns draw instructions; it never draws.
//!
//! ## Architectural Constraints
//!
//! - Catalogs are immutable values passed into the [`Renderer`]
//! - Rendering is pure apart from the [`AssetProbe`] existence check
//! - Assets, model and dataset are read-only inputs
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod artifacts;
pub mod audit;
pub mod catalog;
pub mod primitives;
pub mod render;
pub mod resolver;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{DashboardError, FeatureId, Stakeholder};

// =============================================================================
// RE-EXPORTS: Catalogs & Rendering
// =============================================================================

pub use artifacts::{ArtifactSet, ArtifactSummary};
pub use audit::{CatalogAudit, Collision, MissingAsset, UnsafeName, audit};
pub use catalog::{Catalogs, FeatureCatalog, TitleCatalog};
pub use render::{RenderBlock, RenderPlan, Renderer};
pub use resolver::{AssetProbe, AssetResolver, FsProbe, KnownAssets, sanitize_feature};
