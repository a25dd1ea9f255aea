//! CLI module for Simplebank
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `seed`: create random users for local testing

pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// Simplebank - minimal banking backend
#[derive(Parser)]
#[command(name = "simplebank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Create random users through the registration pipeline
    Seed(seed::SeedArgs),
}
