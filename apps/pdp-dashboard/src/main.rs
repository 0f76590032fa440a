//! # PDP Dashboard - Gaming Trends 2024 Insights
//!
//! The main binary for the stakeholder-filtered PDP dashboard.
//!
//! This application provides:
//! - HTTP dashboard server (axum-based)
//! - CLI interface for rendering and auditing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                apps/pdp-dashboard (THE BINARY)          │
//! │                                                         │
//! │  ┌─────────────┐    ┌─────────────┐    ┌────────────┐   │
//! │  │   CLI       │    │   HTTP      │    │   Config   │   │
//! │  │  (clap)     │    │   (axum)    │    │   (toml)   │   │
//! │  └──────┬──────┘    └──────┬──────┘    └─────┬──────┘   │
//! │         └──────────────────┼─────────────────┘          │
//! │                            ▼                            │
//! │                    ┌───────────────┐                    │
//! │                    │   pdp-core    │                    │
//! │                    │  (THE LOGIC)  │                    │
//! │                    └───────────────┘                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the dashboard
//! pdp-dashboard server --port 8501
//!
//! # Terminal operations
//! pdp-dashboard stakeholders
//! pdp-dashboard render -s Designers
//! pdp-dashboard check --json-mode
//! ```

use clap::Parser;
use pdp_dashboard::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing — PDP_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PDP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "pdp_dashboard=debug,tower_http=debug"
    } else {
        "pdp_dashboard=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ╔═╗╔╦╗╔═╗  ╦┌┐┌┌─┐┬┌─┐┬ ┬┌┬┐┌─┐
  ╠═╝ ║║╠═╝  ║│││└─┐││ ┬├─┤ │ └─┐
  ╩  ═╩╝╩    ╩┘└┘└─┘┴└─┘┴ ┴ ┴ └─┘

  Gaming Trends 2024 Insights v{}

  Stakeholder-filtered partial dependence plots
"#,
        env!("CARGO_PKG_VERSION")
    );
}
