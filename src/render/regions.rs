// src/render/regions.rs
// =============================================================================
// The display: a fixed set of named regions that the renderer writes into.
//
// Regions:
// - status terminal (the "> INITIALIZING DEEP SCAN..." log) + its visibility
// - result root visibility (the dashboard is hidden while loading)
// - avatar, full name, headline, summary, location, stats
// - repos (one card per repository) and skills (one tag per language)
//
// populate() replaces every content region at once from a DashboardView.
// Nothing writes regions piecemeal, so a failed scan can't leave a
// half-filled dashboard behind.
// =============================================================================

use std::time::Duration;

use super::view::{DashboardView, RepoCard, SkillTag};

/// Fixed display regions owned by one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Display {
    pub status_lines: Vec<String>,
    pub status_visible: bool,
    pub root_visible: bool,
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

impl Display {
    /// Hides the dashboard and starts a fresh status log
    pub fn begin_loading(&mut self, first_line: String) {
        self.root_visible = false;
        self.status_visible = true;
        self.status_lines = vec![first_line];
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.status_lines.push(line.into());
    }

    /// Snapshot of the content regions as a view (used for --json)
    pub fn view(&self) -> DashboardView {
        DashboardView {
            avatar_url: self.avatar_url.clone(),
            full_name: self.full_name.clone(),
            headline: self.headline.clone(),
            summary: self.summary.clone(),
            location: self.location.clone(),
            public_repos: self.public_repos,
            total_stars: self.total_stars,
            repos: self.repos.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Writes every content region from `view`, replacing what was there
pub fn populate(display: &mut Display, view: DashboardView) {
    let DashboardView {
        avatar_url,
        full_name,
        headline,
        summary,
        location,
        public_repos,
        total_stars,
        repos,
        skills,
    } = view;

    display.avatar_url = avatar_url;
    display.full_name = full_name;
    display.headline = headline;
    display.summary = summary;
    display.location = location;
    display.public_repos = public_repos;
    display.total_stars = total_stars;
    display.repos = repos;
    display.skills = skills;
}

/// After a short settling delay, swap the status terminal for the dashboard
pub async fn reveal(display: &mut Display, settle_delay: Duration) {
    tokio::time::sleep(settle_delay).await;
    display.status_visible = false;
    display.root_visible = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(name: &str) -> RepoCard {
        RepoCard {
            name: name.to_string(),
            url: format!("https://github.com/octocat/{}", name),
            stars: 1,
            description: "System repository identified.".to_string(),
        }
    }

    #[test]
    fn test_populate_replaces_previous_contents() {
        let mut display = Display::default();
        populate(
            &mut display,
            DashboardView {
                full_name: "first".to_string(),
                repos: vec![card("a"), card("b")],
                ..DashboardView::default()
            },
        );
        populate(
            &mut display,
            DashboardView {
                full_name: "second".to_string(),
                repos: vec![card("c")],
                ..DashboardView::default()
            },
        );

        assert_eq!(display.full_name, "second");
        assert_eq!(display.repos, vec![card("c")]);
        assert_eq!(display.view().repos, vec![card("c")]);
    }

    #[test]
    fn test_begin_loading_hides_root() {
        let mut display = Display {
            root_visible: true,
            status_lines: vec!["old".to_string()],
            ..Display::default()
        };
        display.begin_loading("> new".to_string());

        assert!(!display.root_visible);
        assert!(display.status_visible);
        assert_eq!(display.status_lines, vec!["> new".to_string()]);
    }

    #[tokio::test]
    async fn test_reveal_toggles_visibility() {
        let mut display = Display::default();
        display.begin_loading("> loading".to_string());
        reveal(&mut display, Duration::ZERO).await;

        assert!(display.root_visible);
        assert!(!display.status_visible);
    }
}
