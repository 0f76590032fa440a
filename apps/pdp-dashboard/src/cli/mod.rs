//! # PDP Dashboard CLI Module
//!
//! This module implements the CLI interface for the dashboard.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP dashboard
//! - `render` - Render one stakeholder's view to the terminal
//! - `stakeholders` - List selector options
//! - `check` - Verify startup artifacts and audit the catalogs

mod commands;

use clap::{Parser, Subcommand};
use pdp_core::DashboardError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Gaming Trends 2024 PDP Insights dashboard
///
/// Shows precomputed partial dependence plots filtered by stakeholder role.
#[derive(Parser, Debug)]
#[command(name = "pdp-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Dashboard root; assets, model and dataset paths are relative to it
    #[arg(short = 'R', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (default: <root>/pdp-dashboard.toml if present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP dashboard
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render one stakeholder's view
    Render {
        /// Stakeholder name (Developers, PMs, Marketers, Designers, Publishers)
        #[arg(short, long)]
        stakeholder: String,
    },

    /// List stakeholders in display order
    Stakeholders,

    /// Verify model and dataset, then audit catalogs against the assets
    Check,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), DashboardError> {
    let ctx = Context::load(&cli)?;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(&ctx, host, port).await,
        Some(Commands::Render { stakeholder }) => cmd_render(&ctx, &stakeholder),
        Some(Commands::Stakeholders) | None => cmd_stakeholders(&ctx),
        Some(Commands::Check) => cmd_check(&ctx),
    }
}
