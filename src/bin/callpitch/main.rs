//! CallPitch binary: a full-screen terminal rendition of the AI-call landing
//! page, driving the library's playback sequencer.

mod app;
mod cli;
mod color_mode;
mod custom_help;
mod demo_stats;
mod event_loop;
mod input;
mod notices;
mod page;
mod particles;
mod phone_mockup;
mod prefs;
mod stats_counters;
mod theme;
mod ui;

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use callpitch::doctor::base_doctor_report;
use callpitch::telemetry;
use callpitch::terminal_restore::TerminalRestoreGuard;
use callpitch::CallSequencer;

use crate::app::AppState;
use crate::cli::LandingConfig;
use crate::theme::{GlyphSet, Theme};

const INPUT_CHANNEL_CAPACITY: usize = 256;
const INPUT_SHUTDOWN_JOIN_TIMEOUT_MS: u64 = 100;
const THREAD_JOIN_POLL_MS: u64 = 10;

fn join_thread_with_timeout(name: &str, handle: thread::JoinHandle<()>, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    loop {
        if handle.is_finished() || Instant::now() >= deadline {
            break;
        }
        thread::sleep(Duration::from_millis(THREAD_JOIN_POLL_MS));
    }
    if handle.is_finished() {
        if let Err(err) = handle.join() {
            info!(thread = name, "thread panicked during shutdown: {err:?}");
        }
    } else {
        info!(
            thread = name,
            timeout_ms = timeout.as_millis() as u64,
            "thread did not exit in time; detaching"
        );
    }
}

fn main() -> Result<()> {
    let launch = Instant::now();
    let mut config = LandingConfig::parse();

    if config.help {
        custom_help::print_grouped_help();
        return Ok(());
    }

    let explicit = prefs::ExplicitFlags::from_env_args();
    let preferences = prefs::load_preferences();
    prefs::apply_preferences(&preferences, &mut config, &explicit);

    // Tracing comes up before the early exits so diagnostics runs log too.
    telemetry::init_tracing(&config.app);

    if config.doctor {
        let mut report = base_doctor_report(&config.app, "callpitch");
        report.section("Landing");
        match config.resolve_theme() {
            Ok(theme) => report.push_kv("theme", theme),
            Err(err) => report.push_kv("theme", format!("error: {err}")),
        }
        report.push_kv("fps", config.fps);
        report.push_kv("ascii", config.ascii);
        report.push_kv("reduced_motion", config.reduced_motion);
        println!("{}", report.render());
        return Ok(());
    }

    let script = config.app.resolve_script()?;

    if config.dump_script {
        print!("{}", script.to_toml()?);
        return Ok(());
    }

    let theme = config.resolve_theme()?;
    let glyphs = GlyphSet::detect(config.ascii);
    let timing = config.app.playback_timing();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        theme = %theme,
        pace = %config.app.pace,
        script = %script.title,
        "starting"
    );

    let guard = TerminalRestoreGuard::new();
    guard
        .enable_raw_mode()
        .context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    guard
        .enter_alt_screen(&mut stdout)
        .context("failed to enter alternate screen")?;
    guard
        .enable_mouse_capture(&mut stdout)
        .context("failed to enable mouse capture")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let input_handle = input::spawn_input_thread(input_tx);

    let now = Instant::now();
    let sequencer = CallSequencer::new(script, timing);
    let mut app = AppState::new(
        sequencer,
        theme,
        glyphs,
        config.reduced_motion,
        config.app.log_timings,
        now,
    );
    if let Ok(size) = terminal.size() {
        app.viewport = (size.width, size.height);
    }
    app.step(now);
    terminal.draw(|frame| ui::draw(frame, &app, now))?;
    info!(
        first_frame_ms = launch.elapsed().as_millis() as u64,
        "first frame drawn"
    );

    let loop_result = event_loop::run_event_loop(
        &mut terminal,
        &mut app,
        &input_rx,
        config.frame_interval(),
    );

    guard.restore();
    drop(input_rx);
    join_thread_with_timeout(
        "input",
        input_handle,
        Duration::from_millis(INPUT_SHUTDOWN_JOIN_TIMEOUT_MS),
    );

    let summary_color = io::stdout().is_terminal() && app.theme != Theme::Mono;
    let summary = demo_stats::format_demo_summary(&app.demo_stats, Instant::now(), summary_color);
    if !summary.is_empty() {
        print!("{summary}");
        let _ = io::stdout().flush();
    }

    info!(
        calls = app.demo_stats.calls_started(),
        session_ms = launch.elapsed().as_millis() as u64,
        "exiting"
    );
    loop_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_thread_with_timeout_waits_for_a_finished_worker() {
        let handle = thread::spawn(|| {});
        thread::sleep(Duration::from_millis(20));
        join_thread_with_timeout("test", handle, Duration::from_millis(100));
    }

    #[test]
    fn join_thread_with_timeout_detaches_a_stuck_worker() {
        let handle = thread::spawn(|| thread::sleep(Duration::from_secs(5)));
        let start = Instant::now();
        join_thread_with_timeout("stuck", handle, Duration::from_millis(50));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
