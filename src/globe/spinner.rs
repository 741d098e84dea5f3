// src/globe/spinner.rs
// =============================================================================
// Runs the globe animation as its own tokio task.
//
// The task owns its writer (stderr in the real app), redraws the frame in
// place on every tick, and stops as soon as its CancellationToken fires.
// Nothing in the fetch pipeline waits on it, and it never waits on the
// pipeline: the two only share the token.
//
// When it stops, it erases the last frame and hands the writer back through
// the JoinHandle so the caller (or a test) can keep using it.
// =============================================================================

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::frame::render_frame;

#[derive(Debug, Clone)]
pub struct GlobeSpinner {
    /// Frame height in lines
    pub rows: usize,
    /// Time between frames
    pub tick: Duration,
    /// Radians turned per frame
    pub step: f64,
}

impl Default for GlobeSpinner {
    fn default() -> Self {
        Self {
            rows: 13,
            tick: Duration::from_millis(90),
            step: 0.12,
        }
    }
}

impl GlobeSpinner {
    pub fn spawn<W>(self, mut out: W, token: CancellationToken) -> JoinHandle<W>
    where
        W: Write + Send + 'static,
    {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            let mut rotation = 0.0_f64;
            let mut drawn = false;

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if let Err(e) = self.draw(&mut out, rotation, drawn) {
                            debug!(error = %e, "globe output closed");
                            return out;
                        }
                        drawn = true;
                        rotation += self.step;
                    }
                }
            }

            if drawn {
                // Move back up over the last frame and clear to end of screen
                let _ = write!(out, "\x1b[{}A\x1b[J", self.rows);
                let _ = out.flush();
            }
            out
        })
    }

    fn draw<W: Write>(&self, out: &mut W, rotation: f64, redraw: bool) -> std::io::Result<()> {
        if redraw {
            write!(out, "\x1b[{}A", self.rows)?;
        }
        for line in render_frame(rotation, self.rows) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is tokio::select!?
//    - Waits on several futures and runs the branch of whichever is ready
//      first
//    - `biased;` checks branches top to bottom, so cancellation always wins
//      over a pending tick
//
// 2. Why return the writer from the task?
//    - The task owns `out` (it was moved in)
//    - Returning it through the JoinHandle gives ownership back when the
//      task ends
//
// 3. What are the \x1b[...] strings?
//    - ANSI escape codes: `\x1b[5A` moves the cursor up 5 lines, `\x1b[J`
//      clears from the cursor to the end of the screen
// -----------------------------------------------------------------------------
