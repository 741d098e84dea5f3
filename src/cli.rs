// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is only one thing to do (scan a node), so unlike many CLIs there are
// no subcommands: the target is a positional argument and everything else
// is an optional flag.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: the target may be left out (we then ask for it on stdin)
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::github::DEFAULT_API_BASE;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "node-dossier",
    version,
    about = "Scan a GitHub profile and render a portfolio dossier",
    long_about = "node-dossier fetches a GitHub user's profile, top repositories and profile \
                  README, writes a short narrative about them and renders it as a dashboard \
                  in the terminal, as JSON, or as an HTML page."
)]
pub struct Cli {
    /// GitHub login to scan (e.g., octocat)
    ///
    /// If omitted, it is read from stdin. A blank value scans nothing.
    pub target: Option<String>,

    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write the dashboard as an HTML page to this path
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "DOSSIER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Milliseconds to wait before revealing the dashboard
    #[arg(long, default_value_t = 800)]
    pub settle_ms: u64,

    /// Don't draw the spinning globe while scanning
    #[arg(long)]
    pub no_globe: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
