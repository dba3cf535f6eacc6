//! Drives capture sessions against an in-memory diagnostic channel instead
//! of the process stderr, so tests can assert on exactly what a session
//! would have surfaced.

use slog::Logger;

use crate::capture::Format;
use crate::expect::run_session;

/// Run a text-format session and return what would have reached stderr.
pub fn text_session_diagnostics<F>(test_fn: F, expected_patterns: &[&str]) -> String
where
    F: FnOnce(&Logger),
{
    session_diagnostics(Format::Text, test_fn, expected_patterns)
}

/// Run a JSON-format session and return what would have reached stderr.
pub fn json_session_diagnostics<F>(test_fn: F, expected_patterns: &[&str]) -> String
where
    F: FnOnce(&Logger),
{
    session_diagnostics(Format::Json, test_fn, expected_patterns)
}

fn session_diagnostics<F>(format: Format, test_fn: F, expected_patterns: &[&str]) -> String
where
    F: FnOnce(&Logger),
{
    let mut diagnostics = Vec::new();
    run_session(format, &mut diagnostics, test_fn, expected_patterns);
    String::from_utf8(diagnostics).expect("diagnostic lines are valid UTF-8")
}
