//! Command-line interface
//!
//! Flags override the corresponding configuration values; anything left
//! unset falls through to the config file defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// policydesk - resolve support tickets against policy documents
#[derive(Parser, Debug)]
#[command(name = "policydesk")]
#[command(version)]
#[command(about = "Resolve customer support tickets against policy documents", long_about = None)]
pub struct Args {
    /// Directory of policy JSON documents
    #[arg(short, long)]
    pub docs_dir: Option<PathBuf>,

    /// Ollama model to use for generation
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama host
    #[arg(long)]
    pub host: Option<String>,

    /// Ollama port
    #[arg(long)]
    pub port: Option<u16>,

    /// Number of policy sections retrieved per ticket
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Bind address for the HTTP server
    #[arg(long)]
    pub bind: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server (default)
    Serve,
    /// Resolve a single ticket and print the structured response
    Resolve {
        /// The support ticket text
        ticket: String,
    },
}
