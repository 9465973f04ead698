//! CLI argument definitions using clap
//!
//! Commands:
//! - talkerd init --store <path>
//! - talkerd serve --host <host> --port <port> --store <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// talkerd - a small talker-registry HTTP service
#[derive(Parser, Debug)]
#[command(name = "talkerd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed an empty collection document
    Init {
        /// Path of the collection document
        #[arg(long, default_value = "./talker.json")]
        store: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Path of the collection document
        #[arg(long, default_value = "./talker.json")]
        store: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
