//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::Cli;
use crate::api;
use crate::config::DashboardConfig;
use pdp_core::{
    ArtifactSummary, CatalogAudit, DashboardError, FsProbe, RenderBlock, RenderPlan, Stakeholder,
    audit,
};
use std::path::PathBuf;

// =============================================================================
// COMMAND CONTEXT
// =============================================================================

/// Settings shared by every command.
#[derive(Debug)]
pub struct Context {
    pub root: PathBuf,
    pub config: DashboardConfig,
    pub json_mode: bool,
}

impl Context {
    /// Load configuration for the parsed CLI.
    pub fn load(cli: &Cli) -> Result<Self, DashboardError> {
        let config = DashboardConfig::load(cli.config.as_deref(), &cli.root)?;
        Ok(Self {
            root: cli.root.clone(),
            config,
            json_mode: cli.json_mode,
        })
    }

    /// Check model and dataset. Any failure aborts the command.
    fn verify_artifacts(&self) -> Result<ArtifactSummary, DashboardError> {
        let summary = self.config.artifacts(&self.root).verify()?;
        tracing::info!(
            model = %summary.model_path.display(),
            model_bytes = summary.model_bytes,
            dataset = %summary.dataset_path.display(),
            columns = summary.dataset_columns.len(),
            rows = summary.dataset_rows,
            "Startup artifacts present"
        );
        Ok(summary)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), DashboardError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| DashboardError::IoError(format!("JSON encoding failed: {}", e)))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP dashboard.
pub async fn cmd_server(
    ctx: &Context,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), DashboardError> {
    ctx.verify_artifacts()?;
    let renderer = ctx.config.renderer(&ctx.root)?;

    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);

    println!("PDP Insights Dashboard Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:   {}", host);
    println!("  Port:   {}", port);
    println!("  Root:   {:?}", ctx.root);
    println!("  Assets: {:?}", renderer.resolver().dir());
    println!();
    println!("Endpoints:");
    println!("  GET /                     - Dashboard");
    println!("  GET /stakeholders         - Selector options");
    println!("  GET /render/{{stakeholder}} - Render plan (JSON)");
    println!("  GET /audit                - Catalog audit");
    println!("  GET /health               - Health check");
    println!("  GET /pdps/<file>          - PDP images");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, renderer).await
}

// =============================================================================
// RENDER COMMAND
// =============================================================================

/// Render one stakeholder's view.
pub fn cmd_render(ctx: &Context, stakeholder: &str) -> Result<(), DashboardError> {
    let stakeholder: Stakeholder = stakeholder.parse()?;
    ctx.verify_artifacts()?;

    let renderer = ctx.config.renderer(&ctx.root)?;
    let plan = renderer.render(stakeholder, &FsProbe)?;

    for feature in plan.missing_features() {
        tracing::warn!(stakeholder = %stakeholder, feature = %feature, "No PDP found");
    }

    if ctx.json_mode {
        return print_json(&plan);
    }

    print!("{}", format_plan(&plan));
    Ok(())
}

/// Terminal rendition of a plan.
pub fn format_plan(plan: &RenderPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", plan.subheader));
    out.push_str(&format!("{}\n", "=".repeat(plan.subheader.chars().count())));
    out.push_str(&format!("{}\n\n", plan.intro.replace("**", "")));

    for block in &plan.blocks {
        match block {
            RenderBlock::Heading { text } => out.push_str(&format!("### {}\n", text)),
            RenderBlock::Image { path, caption, .. } => {
                out.push_str(&format!("[image] {}\n        {}\n", path.display(), caption));
            }
            RenderBlock::Separator => out.push_str("---\n"),
            RenderBlock::Warning { message, .. } => {
                out.push_str(&format!("WARNING: {}\n", message));
            }
        }
    }

    out.push_str(&format!(
        "\n{} shown, {} missing\n",
        plan.shown, plan.missing
    ));
    out
}

// =============================================================================
// STAKEHOLDERS COMMAND
// =============================================================================

/// List selector options.
pub fn cmd_stakeholders(ctx: &Context) -> Result<(), DashboardError> {
    let catalogs = ctx.config.catalogs()?;

    if ctx.json_mode {
        let output: Vec<serde_json::Value> = catalogs
            .features
            .stakeholders()
            .map(|stakeholder| {
                let count = catalogs
                    .features
                    .features(stakeholder)
                    .map(<[_]>::len)
                    .unwrap_or(0);
                serde_json::json!({ "name": stakeholder.name(), "features": count })
            })
            .collect();
        return print_json(&output);
    }

    println!("Stakeholders");
    println!("============");
    for stakeholder in catalogs.features.stakeholders() {
        let features = catalogs.features.features(stakeholder)?;
        println!("{:<12} {} feature(s)", stakeholder.name(), features.len());
    }
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Verify artifacts and audit the catalogs.
///
/// Missing artifacts fail the command. Audit findings are reported only.
pub fn cmd_check(ctx: &Context) -> Result<(), DashboardError> {
    let summary = ctx.verify_artifacts()?;
    let renderer = ctx.config.renderer(&ctx.root)?;
    let report = audit(renderer.catalogs(), renderer.resolver(), &FsProbe);

    for flagged in &report.unsafe_names {
        tracing::warn!(
            feature = %flagged.feature,
            chars = ?flagged.chars,
            "Feature name holds characters unsafe in file names"
        );
    }

    if ctx.json_mode {
        return print_json(&serde_json::json!({
            "artifacts": summary,
            "audit": report,
        }));
    }

    print!("{}", format_check(&summary, &report));
    Ok(())
}

/// Terminal rendition of a check.
pub fn format_check(summary: &ArtifactSummary, report: &CatalogAudit) -> String {
    let mut out = String::new();
    out.push_str("Artifacts\n=========\n");
    out.push_str(&format!(
        "Model:   {} ({} bytes)\n",
        summary.model_path.display(),
        summary.model_bytes
    ));
    out.push_str(&format!(
        "Dataset: {} ({} columns, {} rows)\n\n",
        summary.dataset_path.display(),
        summary.dataset_columns.len(),
        summary.dataset_rows
    ));

    out.push_str("Catalog Audit\n=============\n");
    out.push_str(&format!("Features checked: {}\n", report.features_checked));

    if report.is_clean() {
        out.push_str("No findings\n");
        return out;
    }

    for missing in &report.missing_assets {
        let owners: Vec<&str> = missing.stakeholders.iter().map(Stakeholder::name).collect();
        out.push_str(&format!(
            "missing image:   {} ({})\n",
            missing.feature,
            owners.join(", ")
        ));
    }
    for feature in &report.untitled {
        out.push_str(&format!("no title:        {}\n", feature));
    }
    for flagged in &report.unsafe_names {
        out.push_str(&format!(
            "unsafe name:     {} {:?}\n",
            flagged.feature, flagged.chars
        ));
    }
    for collision in &report.collisions {
        let features: Vec<&str> = collision.features.iter().map(|f| f.as_str()).collect();
        out.push_str(&format!(
            "collision:       {} <- {}\n",
            collision.file_name,
            features.join(", ")
        ));
    }
    for feature in &report.orphan_titles {
        out.push_str(&format!("unused title:    {}\n", feature));
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pdp_core::{FeatureId, MissingAsset};

    #[test]
    fn format_plan_lists_blocks_in_order() {
        let plan = RenderPlan {
            stakeholder: Stakeholder::Designers,
            subheader: "PDP Insights for Designers".to_string(),
            intro: "this section displays **PDP Interpretations**".to_string(),
            blocks: vec![
                RenderBlock::Heading {
                    text: "Designers – Session Intensity".to_string(),
                },
                RenderBlock::Image {
                    feature: FeatureId::new("dau_x_duration"),
                    path: PathBuf::from("pdps/dau_x_duration.png"),
                    file_name: "dau_x_duration.png".to_string(),
                    caption: "PDP: dau_x_duration".to_string(),
                },
                RenderBlock::Separator,
                RenderBlock::Warning {
                    feature: FeatureId::new("engagement_level_High"),
                    message: "No PDP found for feature: engagement_level_High".to_string(),
                },
            ],
            shown: 1,
            missing: 1,
        };

        let text = format_plan(&plan);
        let heading = text.find("### Designers – Session Intensity").expect("heading");
        let image = text.find("[image] pdps/dau_x_duration.png").expect("image");
        let warning = text
            .find("WARNING: No PDP found for feature: engagement_level_High")
            .expect("warning");
        assert!(heading < image && image < warning);
        assert!(text.contains("this section displays PDP Interpretations"));
        assert!(text.ends_with("1 shown, 1 missing\n"));
    }

    #[test]
    fn format_check_reports_findings() {
        let summary = ArtifactSummary {
            model_path: PathBuf::from("m.joblib"),
            model_bytes: 10,
            dataset_path: PathBuf::from("d.csv"),
            dataset_columns: vec!["a".to_string()],
            dataset_rows: 3,
        };
        let report = CatalogAudit {
            features_checked: 1,
            missing_assets: vec![MissingAsset {
                feature: FeatureId::new("x"),
                stakeholders: vec![Stakeholder::PMs, Stakeholder::Designers],
            }],
            ..CatalogAudit::default()
        };

        let text = format_check(&summary, &report);
        assert!(text.contains("Model:   m.joblib (10 bytes)"));
        assert!(text.contains("missing image:   x (PMs, Designers)"));
        assert!(!text.contains("No findings"));
    }

    fn empty_root_context(root: &std::path::Path) -> Context {
        Context {
            root: root.to_path_buf(),
            config: DashboardConfig::default(),
            json_mode: false,
        }
    }

    #[test]
    fn render_refuses_to_run_without_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = empty_root_context(dir.path());

        let result = cmd_render(&ctx, "Designers");
        assert!(matches!(
            result,
            Err(DashboardError::MissingArtifact { kind: "model", .. })
        ));
    }

    #[test]
    fn render_rejects_unknown_stakeholder_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = empty_root_context(dir.path());

        let result = cmd_render(&ctx, "Executives");
        assert!(matches!(result, Err(DashboardError::UnknownStakeholder(_))));
    }

    #[test]
    fn check_refuses_to_run_without_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = empty_root_context(dir.path());

        let result = cmd_check(&ctx);
        assert!(matches!(
            result,
            Err(DashboardError::MissingArtifact { kind: "model", .. })
        ));
    }

    #[test]
    fn format_check_clean() {
        let summary = ArtifactSummary {
            model_path: PathBuf::from("m"),
            model_bytes: 0,
            dataset_path: PathBuf::from("d"),
            dataset_columns: vec![],
            dataset_rows: 0,
        };
        let text = format_check(&summary, &CatalogAudit::default());
        assert!(text.ends_with("No findings\n"));
    }
}
