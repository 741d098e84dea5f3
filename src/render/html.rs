// src/render/html.rs
// =============================================================================
// Renders the display as a standalone HTML page (--html <PATH>).
//
// The markup lives in templates/dashboard.html and is compiled into the
// binary by askama. askama escapes every {{ value }} for HTML, which matters
// here: names, bios, repo descriptions and readme text all come from
// strangers on the internet and must never be interpreted as markup.
// =============================================================================

use anyhow::{Context, Result};
use askama::Template;

use super::regions::Display;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    display: &'a Display,
    avatar_url: &'a str,
}

pub fn render_html(display: &Display) -> Result<String> {
    let page = DashboardPage {
        display,
        avatar_url: display.avatar_url.as_deref().unwrap_or_default(),
    };
    page.render().context("Failed to render HTML dashboard")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::view::{RepoCard, SkillTag};

    fn display() -> Display {
        Display {
            status_lines: vec!["> SYNTHESIS COMPLETE. RENDERING DASHBOARD...".to_string()],
            status_visible: false,
            root_visible: true,
            avatar_url: Some("https://avatars.githubusercontent.com/u/1".to_string()),
            full_name: "Mona".to_string(),
            headline: "DIGITAL ARCHITECT".to_string(),
            summary: "Mona is a software engineering professional.".to_string(),
            location: "Distributed Network".to_string(),
            public_repos: 3,
            total_stars: 7,
            repos: vec![RepoCard {
                name: "xss".to_string(),
                url: "https://github.com/mona/xss".to_string(),
                stars: 7,
                description: "<script>alert('pwned')</script>".to_string(),
            }],
            skills: vec![SkillTag {
                label: "Rust".to_string(),
            }],
        }
    }

    #[test]
    fn test_remote_text_is_escaped() {
        let html = render_html(&display()).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_regions_are_rendered() {
        let html = render_html(&display()).unwrap();
        assert!(html.contains(r#"<h1 id="fullName">Mona</h1>"#));
        assert!(html.contains(r#"<span class="tag">Rust</span>"#));
        assert!(html.contains(r#"id="avatar""#));
        assert!(!html.contains("hidden-root\""));
    }

    #[test]
    fn test_hidden_root_while_loading() {
        let loading = Display {
            root_visible: false,
            status_visible: true,
            ..display()
        };
        let html = render_html(&loading).unwrap();
        assert!(html.contains(r#"<main id="portfolio-root" class="hidden-root">"#));
    }
}
