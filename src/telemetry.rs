//! Optional local telemetry logging used for debugging and playback triage.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::time::UtcTime;

use crate::config::AppConfig;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Path of the JSON trace log, overridable via `CALLPITCH_TRACE_LOG`.
pub fn tracing_log_path() -> PathBuf {
    env::var("CALLPITCH_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("callpitch_trace.jsonl"))
}

/// Path of the crash log appended by the panic hook, overridable via
/// `CALLPITCH_CRASH_LOG`.
pub fn crash_log_path() -> PathBuf {
    env::var("CALLPITCH_CRASH_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("callpitch_crash.log"))
}

#[inline]
fn tracing_enabled(config: &AppConfig) -> bool {
    (config.logs || config.log_timings) && !config.no_logs
}

fn init_tracing_once(config: &AppConfig, once: &OnceLock<()>) {
    if !tracing_enabled(config) {
        return;
    }

    let _ = once.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Initialize the global JSON tracing subscriber at most once per process.
///
/// A no-op when logging is disabled or when the trace file cannot be opened;
/// telemetry must never take the landing page down.
pub fn init_tracing(config: &AppConfig) {
    init_tracing_once(config, &TRACING_INIT);
}

/// Append one line to the crash log. Best effort; errors are swallowed
/// because this runs inside the panic hook.
pub fn append_crash_log(location: &str, payload: &str) {
    let epoch_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(crash_log_path())
    {
        let _ = writeln!(file, "[{epoch_secs}] panic at {location}: {payload}");
    }
}
