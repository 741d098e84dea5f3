// src/session.rs
// =============================================================================
// A session owns everything one scan touches: the HTTP client, the display
// regions and the current phase. main.rs builds one and hands it the
// identifier the user typed.
//
// Phases of one invocation:
//
//   Idle -> Loading -> Synthesizing -> Rendered
//              \
//               `-> ErrorLogged
//
// A blank identifier never leaves Idle. There is no retry: a failed scan
// stays in ErrorLogged and the user runs it again.
//
// initiate_synthesis() takes &mut self, so two scans can never write into
// the same display at the same time.
// =============================================================================

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Settings;
use crate::dossier::{synthesize_dossier, SkillSet};
use crate::github::{normalize_identifier, GithubClient, Node};
use crate::render::{populate, reveal, DashboardView, Display};

const VERIFIED_LINE: &str = "> IDENTITY VERIFIED. PARSING REPOSITORY ARCHITECTURE...";
const COMPLETE_LINE: &str = "> SYNTHESIS COMPLETE. RENDERING DASHBOARD...";
const FAILURE_LINE: &str = "> CRITICAL ERROR: NODE ACCESS DENIED.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Synthesizing,
    Rendered,
    ErrorLogged,
}

pub struct Session {
    client: GithubClient,
    display: Display,
    phase: Phase,
    settle_delay: Duration,
}

impl Session {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: GithubClient::new(settings.api_base.clone(), settings.page_size)?,
            display: Display::default(),
            phase: Phase::Idle,
            settle_delay: settings.settle_delay,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    // Scans one node and renders it into the display
    //
    // Returns the phase the invocation ended in. Failures are not returned
    // as errors: they end up in the status log, like the user sees them.
    pub async fn initiate_synthesis(&mut self, raw_identifier: &str) -> Phase {
        let Some(identifier) = normalize_identifier(raw_identifier) else {
            debug!("blank identifier, nothing to scan");
            return self.phase;
        };

        self.phase = Phase::Loading;
        self.display
            .begin_loading(format!("> INITIALIZING DEEP SCAN FOR NODE: {}...", identifier));

        let node = match self.client.fetch_node(identifier).await {
            Ok(node) => node,
            Err(e) => {
                info!(identifier, "{}: {:#}", e, e.cause());
                self.display.log(FAILURE_LINE);
                self.phase = Phase::ErrorLogged;
                return self.phase;
            }
        };

        self.display.log(VERIFIED_LINE);
        self.phase = Phase::Synthesizing;

        let Node {
            profile,
            repositories,
        } = node;
        let skills = SkillSet::from_repositories(&repositories);
        let summary = synthesize_dossier(&profile, &repositories, profile.readme.as_deref());
        let view = DashboardView::build(&profile, &repositories, &skills, summary);

        populate(&mut self.display, view);
        self.display.log(COMPLETE_LINE);

        reveal(&mut self.display, self.settle_delay).await;
        self.phase = Phase::Rendered;

        info!(
            identifier,
            repositories = repositories.len(),
            skills = skills.len(),
            "dashboard rendered"
        );
        self.phase
    }
}
