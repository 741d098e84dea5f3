// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap, set up logging
// 2. Get the target node (argument, or one line from stdin)
// 3. Start the globe animation, run the scan, stop the globe
// 4. Print the status log, then the dashboard (text or JSON, optional HTML)
// 5. Exit with proper code (0 = rendered or nothing to do, 1 = scan failed,
//    2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - settings resolved from the CLI
mod dossier;   // src/dossier/ - profile data and narrative synthesis
mod error;     // src/error.rs - the "node access denied" error
mod github;    // src/github/ - GitHub REST API fetching
mod globe;     // src/globe/ - spinning ASCII globe
mod logging;   // src/logging.rs - tracing setup
mod render;    // src/render/ - display regions and output formats
mod session;   // src/session.rs - one scan, start to finish

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;

use cli::Cli;
use config::Settings;
use globe::GlobeSpinner;
use render::Display;
use session::{Phase, Session};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let settings = Settings::from_cli(&cli)?;

    let target = match &cli.target {
        Some(target) => target.clone(),
        None => prompt_for_target().await?,
    };

    let mut session = Session::new(&settings)?;

    // The globe runs on its own task; the scan never waits for it
    let token = CancellationToken::new();
    let spinner = settings
        .globe
        .then(|| GlobeSpinner::default().spawn(std::io::stderr(), token.clone()));

    session.initiate_synthesis(&target).await;

    token.cancel();
    if let Some(handle) = spinner {
        // A panicked animation is not worth failing the run over
        let _ = handle.await;
    }

    let display = session.display();
    print_status(display);

    match session.phase() {
        Phase::Idle => {
            eprintln!("⚠️  No node identifier given, nothing to scan");
            Ok(0)
        }
        Phase::Rendered => {
            print_dashboard(display, cli.json)?;
            if let Some(path) = &cli.html {
                let html = render::render_html(display)?;
                tokio::fs::write(path, html)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("📄 HTML dashboard written to {}", path.display());
            }
            Ok(0)
        }
        Phase::ErrorLogged => Ok(1),
        phase @ (Phase::Loading | Phase::Synthesizing) => {
            anyhow::bail!("scan stopped in {:?} phase", phase)
        }
    }
}

// Reads the target from stdin, for when no argument was given
async fn prompt_for_target() -> Result<String> {
    let mut stderr = tokio::io::stderr();
    stderr.write_all(b"Target node: ").await?;
    stderr.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read target from stdin")?;
    Ok(line)
}

// The status terminal goes to stderr so stdout stays clean for --json
fn print_status(display: &Display) {
    for line in &display.status_lines {
        eprintln!("{}", line);
    }
    if !display.status_lines.is_empty() {
        eprintln!();
    }
}

fn print_dashboard(display: &Display, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(&display.view())?;
        println!("{}", json_output);
    } else {
        print!("{}", render::render_text(display));
    }
    Ok(())
}
