// src/dossier/mod.rs
// =============================================================================
// This module turns fetched profile data into the "dossier": the short
// narrative shown at the top of the dashboard.
//
// Submodules:
// - model: Profile, RepositorySummary and SkillSet (what we fetched)
// - readme: reduces a README.md to a short plain-text excerpt
// - synth: the templates that build the narrative, headline and name
//
// Everything in here is pure: no network, no printing. That makes it easy
// to test with hand-built profiles.
// =============================================================================

mod model;
mod readme;
mod synth;

pub use model::{Profile, RepositorySummary, SkillSet};
pub use synth::{display_name, headline, synthesize_dossier, total_stars};
