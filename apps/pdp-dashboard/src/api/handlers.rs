//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//! Every handler renders from scratch; nothing is cached between requests.
//! Rendering and auditing stat one file per feature, so they run on the
//! blocking pool rather than on a runtime worker.

use super::{
    AppState, page,
    types::{ErrorResponse, HealthResponse, PageQuery, StakeholdersResponse},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use pdp_core::{CatalogAudit, DashboardError, RenderPlan, Stakeholder, audit};
use std::sync::Arc;

/// Status code for a core error.
fn error_status(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::UnknownStakeholder(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Run `work` on the blocking pool.
async fn off_runtime<T, F>(work: F) -> Result<T, DashboardError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| DashboardError::IoError(format!("Blocking task failed: {}", e)))
}

async fn render_plan(
    state: &AppState,
    stakeholder: Stakeholder,
) -> Result<RenderPlan, DashboardError> {
    let renderer = Arc::clone(&state.renderer);
    let probe = state.probe;
    off_runtime(move || renderer.render(stakeholder, &probe)).await?
}

async fn audit_report(state: &AppState) -> Result<CatalogAudit, DashboardError> {
    let renderer = Arc::clone(&state.renderer);
    let probe = state.probe;
    off_runtime(move || audit(renderer.catalogs(), renderer.resolver(), &probe)).await
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STAKEHOLDERS HANDLER
// =============================================================================

/// List selector options.
pub async fn stakeholders_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(StakeholdersResponse {
        stakeholders: state.renderer.stakeholders(),
    })
}

// =============================================================================
// RENDER HANDLER
// =============================================================================

/// Render plan for one stakeholder as JSON.
pub async fn render_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let result = match name.parse::<Stakeholder>() {
        Ok(stakeholder) => render_plan(&state, stakeholder).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(plan) => {
            if plan.missing > 0 {
                tracing::warn!(
                    stakeholder = %plan.stakeholder,
                    missing = plan.missing,
                    "Rendered with missing PDPs"
                );
            }
            (StatusCode::OK, Json(plan)).into_response()
        }
        Err(e) => {
            tracing::debug!("Render failed for '{}': {}", name, e);
            (error_status(&e), Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}

// =============================================================================
// AUDIT HANDLER
// =============================================================================

/// Catalog audit against the served asset directory.
pub async fn audit_handler(State(state): State<AppState>) -> Response {
    match audit_report(&state).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            (error_status(&e), Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}

// =============================================================================
// PAGE HANDLER
// =============================================================================

/// HTML dashboard. `?stakeholder=` selects; the first option is the default.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let options = state.renderer.stakeholders();

    let requested = query.stakeholder.filter(|s| !s.is_empty());
    let stakeholder = match requested.as_deref() {
        Some(name) => match name.parse::<Stakeholder>() {
            Ok(s) if options.contains(&s) => s,
            _ => {
                return (
                    StatusCode::NOT_FOUND,
                    Html(page::not_found_page(&options, name)),
                )
                    .into_response();
            }
        },
        None => match options.first() {
            Some(first) => *first,
            None => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(page::not_found_page(&options, "")),
                )
                    .into_response();
            }
        },
    };

    match render_plan(&state, stakeholder).await {
        Ok(plan) => {
            for feature in plan.missing_features() {
                tracing::warn!(stakeholder = %stakeholder, feature = %feature, "No PDP found");
            }
            Html(page::render_page(&options, &plan)).into_response()
        }
        Err(e) => (
            error_status(&e),
            Html(page::not_found_page(&options, stakeholder.name())),
        )
            .into_response(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
