// src/dossier/readme.rs
// =============================================================================
// Reduces a profile README.md to a short plain-text excerpt.
//
// Profile readmes are a mix of Markdown and raw HTML (centered banners,
// <img> badges, <details> blocks...). We want just the words:
//
// 1. Walk the Markdown with pulldown-cmark, keeping text and inline code
// 2. Any raw HTML chunks are handed to scraper, which keeps only text nodes
// 3. Collapse all whitespace to single spaces
// 4. Cut to EXCERPT_CHARS characters (counting chars, not bytes)
//
// Readmes that are too short after stripping ("Hi 👋") are not worth
// quoting; the synthesizer falls back to its language template instead.
// =============================================================================

use pulldown_cmark::{Event, Parser};
use scraper::Html;

/// Plain text shorter than this is not used as an excerpt
pub const MIN_README_CHARS: usize = 60;

/// Upper bound on excerpt length, including the trailing "..."
pub const EXCERPT_CHARS: usize = 180;

const ELLIPSIS: &str = "...";

const NON_PROSE_ELEMENTS: &[&str] = &["style", "script", "noscript"];

/// Returns a tag-stripped excerpt of `readme`, or None if it is too short
pub fn readme_excerpt(readme: &str) -> Option<String> {
    let text = strip_markup(readme);

    if text.chars().count() < MIN_README_CHARS {
        return None;
    }

    Some(truncate(&text))
}

// Markdown + HTML -> whitespace-collapsed plain text
fn strip_markup(readme: &str) -> String {
    let mut pieces: Vec<String> = Vec::new();

    // HTML can arrive split over several events (one per line of an HTML
    // block), so buffer it and parse once the run of HTML ends
    let mut html_buffer = String::new();

    for event in Parser::new(readme) {
        if let Event::Html(html) = &event {
            html_buffer.push_str(html);
            continue;
        }

        if !html_buffer.is_empty() {
            pieces.push(html_text(&html_buffer));
            html_buffer.clear();
        }

        match event {
            Event::Text(text) | Event::Code(text) => pieces.push(text.to_string()),
            // Breaks and block ends separate words that would otherwise touch
            Event::SoftBreak | Event::HardBreak | Event::End(_) => pieces.push(" ".to_string()),
            _ => {}
        }
    }

    if !html_buffer.is_empty() {
        pieces.push(html_text(&html_buffer));
    }

    pieces
        .concat()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// Keeps only the prose text nodes of an HTML fragment. Text inside
// <style>/<script>/<noscript> is code, not words, and is dropped.
fn html_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);

    let text: Vec<&str> = fragment
        .root_element()
        .descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |element| NON_PROSE_ELEMENTS.contains(&element.name()))
            })
        })
        .map(|(_, text)| &**text)
        .collect();

    format!(" {} ", text.join(" "))
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }

    let kept: String = text.chars().take(EXCERPT_CHARS - ELLIPSIS.len()).collect();
    format!("{}{}", kept.trim_end(), ELLIPSIS)
}
