// src/globe/mod.rs
// =============================================================================
// The background visual: an ASCII globe that spins on stderr while a scan
// is running.
//
// - frame: pure function, rotation angle -> lines of text
// - spinner: the periodic tokio task that draws frames until cancelled
// =============================================================================

mod frame;
mod spinner;

pub use spinner::GlobeSpinner;
