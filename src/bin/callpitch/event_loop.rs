//! Frame-paced event loop: drain input, advance state, redraw when needed.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::AppState;
use crate::input::InputEvent;
use crate::ui;

/// Run the page until the user quits.
///
/// Blocks on the input channel up to one frame interval, so the loop idles
/// cheaply when nothing is animating and nothing was pressed.
pub(crate) fn run_event_loop<W: Write>(
    terminal: &mut Terminal<CrosstermBackend<W>>,
    app: &mut AppState,
    input_rx: &Receiver<InputEvent>,
    frame_interval: Duration,
) -> Result<()> {
    loop {
        let mut needs_redraw = false;

        let first = match input_rx.recv_timeout(frame_interval) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        };

        // One clock sample drives input, stepping, and drawing this iteration.
        let now = Instant::now();
        if let Some(event) = first {
            needs_redraw |= app.apply_input(event, now);
            // Drain whatever else arrived during the frame.
            while let Ok(event) = input_rx.try_recv() {
                needs_redraw |= app.apply_input(event, now);
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        needs_redraw |= app.step(now);

        if needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app, now))?;
        }
    }
}
