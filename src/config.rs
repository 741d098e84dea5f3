// src/config.rs
// =============================================================================
// Runtime settings, resolved once from the command line (and environment,
// via clap's `env` support) before anything else runs.
//
// There is no config file: the only things worth configuring are where the
// API lives (tests and GitHub Enterprise users), how long the loading
// screen lingers, and whether the globe animation runs.
// =============================================================================

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use url::Url;

use crate::cli::Cli;
use crate::github::PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the GitHub REST API
    pub api_base: Url,
    /// Repositories requested per scan
    pub page_size: usize,
    /// Pause between "SYNTHESIS COMPLETE" and showing the dashboard
    pub settle_delay: Duration,
    /// Whether the ASCII globe spins on stderr while scanning
    pub globe: bool,
}

impl Settings {
    pub fn new(api_base: &str) -> Result<Self> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            page_size: PAGE_SIZE,
            settle_delay: Duration::from_millis(800),
            globe: false,
        })
    }

    // The globe draws with cursor movement, so it is only enabled on a real
    // terminal and never together with --verbose (logs share stderr)
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            settle_delay: Duration::from_millis(cli.settle_ms),
            globe: !cli.no_globe && !cli.verbose && std::io::stderr().is_terminal(),
            ..Self::new(&cli.api_base)?
        })
    }
}

fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid API base '{}': {}", raw, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("API base must be an http(s) URL: {}", raw);
    }

    Ok(url)
}
