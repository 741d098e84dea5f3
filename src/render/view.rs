// src/render/view.rs
// =============================================================================
// The declarative view model: everything the dashboard shows, already
// resolved to display strings.
//
// Building the view is the only place fallbacks for the dashboard regions
// live ("DIGITAL ARCHITECT", "System repository identified." ...). The
// emitters (text, html, json) just print what is here.
// =============================================================================

use serde::Serialize;

use crate::dossier::{display_name, headline, total_stars, Profile, RepositorySummary, SkillSet};

const DEFAULT_DESCRIPTION: &str = "System repository identified.";
const DEFAULT_LOCATION: &str = "Distributed Network";

/// One clickable repository card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoCard {
    pub name: String,
    pub url: String,
    pub stars: u64,
    pub description: String,
}

/// One skill tag (a language)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillTag {
    pub label: String,
}

/// The whole dashboard, ready to render
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardView {
    pub avatar_url: Option<String>,
    pub full_name: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub public_repos: u64,
    pub total_stars: u64,
    pub repos: Vec<RepoCard>,
    pub skills: Vec<SkillTag>,
}

impl DashboardView {
    pub fn build(
        profile: &Profile,
        repos: &[RepositorySummary],
        skills: &SkillSet,
        summary: String,
    ) -> Self {
        Self {
            avatar_url: profile.avatar_url().map(str::to_string),
            full_name: display_name(profile).to_string(),
            headline: headline(profile).to_string(),
            summary,
            location: profile.location().unwrap_or(DEFAULT_LOCATION).to_string(),
            public_repos: profile.public_repos,
            total_stars: total_stars(repos),
            repos: repos.iter().map(RepoCard::from).collect(),
            skills: skills
                .iter()
                .map(|label| SkillTag {
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

impl From<&RepositorySummary> for RepoCard {
    fn from(repo: &RepositorySummary) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.url.clone(),
            stars: repo.stars,
            description: repo.description().unwrap_or(DEFAULT_DESCRIPTION).to_string(),
        }
    }
}
