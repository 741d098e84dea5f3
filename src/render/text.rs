// src/render/text.rs
// =============================================================================
// Renders the display for the terminal (the default output).
//
// Layout:
//   header (name, headline, location, stats)
//   dossier paragraph, wrapped
//   skill tags on one line
//   repository table: NAME / STARS / DESCRIPTION
//
// Returns a String instead of printing so main.rs decides where it goes
// and tests can look at it.
// =============================================================================

use std::fmt::Write;

use super::regions::Display;

const WRAP_WIDTH: usize = 78;
const NAME_WIDTH: usize = 28;
const DESCRIPTION_WIDTH: usize = 60;

pub fn render_text(display: &Display) -> String {
    let mut out = String::new();

    // Writing to a String can't fail, so the fmt::Results are ignored
    let _ = writeln!(out, "🌐 {}", display.full_name);
    let _ = writeln!(out, "   {}", display.headline);
    let _ = writeln!(out, "   📍 {}", display.location);
    let _ = writeln!(
        out,
        "   📦 {} public nodes   ★ {} stars",
        display.public_repos, display.total_stars
    );
    if let Some(avatar) = &display.avatar_url {
        let _ = writeln!(out, "   🖼  {}", avatar);
    }
    out.push('\n');

    for line in wrap(&display.summary, WRAP_WIDTH) {
        let _ = writeln!(out, "{}", line);
    }
    out.push('\n');

    if !display.skills.is_empty() {
        let tags: Vec<String> = display
            .skills
            .iter()
            .map(|skill| format!("[{}]", skill.label))
            .collect();
        let _ = writeln!(out, "🛠  {}", tags.join(" "));
        out.push('\n');
    }

    if !display.repos.is_empty() {
        let _ = writeln!(out, "{:<28} {:>8}  {}", "REPOSITORY", "STARS", "DESCRIPTION");
        let _ = writeln!(out, "{}", "=".repeat(28 + 1 + 8 + 2 + DESCRIPTION_WIDTH));
        for repo in &display.repos {
            let _ = writeln!(
                out,
                "{:<28} {:>8}  {}",
                clip(&repo.name, NAME_WIDTH),
                repo.stars,
                clip(&repo.description, DESCRIPTION_WIDTH)
            );
            let _ = writeln!(out, "{:<28} {:>8}  ↳ {}", "", "", repo.url);
        }
    }

    out
}

// Cuts to `width` chars (not bytes, names can be non-ASCII)
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::view::{RepoCard, SkillTag};

    #[test]
    fn test_wrap() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn test_render_text_sections() {
        let display = Display {
            full_name: "Mona".to_string(),
            headline: "DIGITAL ARCHITECT".to_string(),
            summary: "Mona builds things.".to_string(),
            location: "Distributed Network".to_string(),
            total_stars: 5,
            repos: vec![RepoCard {
                name: "hello".to_string(),
                url: "https://github.com/mona/hello".to_string(),
                stars: 5,
                description: "System repository identified.".to_string(),
            }],
            skills: vec![
                SkillTag {
                    label: "Go".to_string(),
                },
                SkillTag {
                    label: "Rust".to_string(),
                },
            ],
            ..Display::default()
        };

        let text = render_text(&display);
        assert!(text.contains("🌐 Mona"));
        assert!(text.contains("Mona builds things."));
        assert!(text.contains("[Go] [Rust]"));
        assert!(text.contains("System repository identified."));
        assert!(text.contains("https://github.com/mona/hello"));
    }
}
