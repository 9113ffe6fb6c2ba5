//! irta-admin-setup CLI - Guide for creating the IRTA Forms admin user
//!
//! This module contains the CLI implementation used by the binary.

mod output;
mod prompt;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use irta_admin_setup_core::{AdminProfile, Guide, get_version};
use tracing_subscriber::EnvFilter;

use crate::session::run_session;

/// Print the steps for creating the IRTA Forms admin user
#[derive(Parser, Debug)]
#[command(name = "create-admin-user")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the steps for creating the IRTA Forms admin user", long_about = None)]
struct Cli {
    /// Increase verbosity level (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let guide = Guide::new(AdminProfile::default());
    tracing::info!(
        version = %get_version(),
        project = %guide.profile().project_id,
        "starting admin user guide"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let branch = run_session(&guide, &mut stdin.lock(), &mut stdout.lock())?;

    tracing::debug!(%branch, "guide finished");
    Ok(())
}
