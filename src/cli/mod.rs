// CLI module for operational entry points

pub mod migrate;

use clap::{Parser, Subcommand};

/// Volunteer backend CLI
#[derive(Parser)]
#[command(name = "volunteer-backend")]
#[command(about = "Volunteer registration backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default when no subcommand is given)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}
