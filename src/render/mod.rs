// src/render/mod.rs
// =============================================================================
// This module puts a scanned node on screen.
//
// Submodules:
// - view: DashboardView, the declarative data -> view mapping
// - regions: Display, the fixed regions a session writes into
// - text: terminal output
// - html: standalone HTML page (askama template, escaped)
//
// Flow: DashboardView::build() -> populate(display, view) -> reveal() ->
// render_text / render_html / serde_json on display.view()
// =============================================================================

mod html;
mod regions;
mod text;
mod view;

pub use html::render_html;
pub use regions::{populate, reveal, Display};
pub use text::render_text;
pub use view::DashboardView;
