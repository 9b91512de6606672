//! CLI module for the team registry
//!
//! `serve` runs the HTTP API and is the default when no subcommand is given.

pub mod serve;

use clap::{Parser, Subcommand};

/// Team Registry - CRUD API for team records
#[derive(Parser)]
#[command(name = "team-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server (default)
    Serve(serve::ServeArgs),
}

impl Cli {
    /// The subcommand to run, falling back to `serve`
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(serve::ServeArgs::default()))
    }
}
