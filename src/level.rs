use std::env;

use slog::Drain;

/// Environment variable consulted for the logging threshold.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Threshold applied when `LOG_LEVEL` is unset or unrecognized.
///
/// Quiet enough that routine Debug/Info/Warning chatter stays out of test
/// output, while error records still come through. slog's level filter is
/// inclusive, so records at `Error` itself are admitted.
pub const DEFAULT_THRESHOLD: slog::Level = slog::Level::Error;

/// Map a `LOG_LEVEL`-style name to a severity threshold.
///
/// Recognized names are `DEBUG`, `INFO`, `WARN` and `ERROR` (case-sensitive);
/// anything else, including `None`, falls back to [`DEFAULT_THRESHOLD`].
pub fn threshold(signal: Option<&str>) -> slog::Level {
    match signal {
        Some("DEBUG") => slog::Level::Debug,
        Some("INFO") => slog::Level::Info,
        Some("WARN") => slog::Level::Warning,
        Some("ERROR") => slog::Level::Error,
        _ => DEFAULT_THRESHOLD,
    }
}

/// Resolve the logging threshold from the process environment.
pub fn threshold_from_env() -> slog::Level {
    threshold(env::var(LOG_LEVEL_VAR).ok().as_deref())
}

/// Install a process-wide default logger for a test run.
///
/// Records go to stderr in `key: value` form, filtered by the same
/// `LOG_LEVEL` resolution capture sessions use. Call it once from suite
/// setup; calling it again replaces the previous logger (last writer wins).
/// The installed logger stays for the rest of the process, so there is
/// nothing to tear down.
///
/// ```
/// slog_expect::init_test_logging();
/// slog::info!(slog_scope::logger(), "suite starting");
/// ```
pub fn init_test_logging() {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator)
        .build()
        .filter_level(threshold_from_env())
        .fuse();
    // keep the logger installed for the rest of the process
    slog_scope::set_global_logger(slog::Logger::root(drain, o!())).cancel_reset();
}
