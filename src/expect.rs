use std::io;
use std::io::Write;

use memchr::memmem;

use crate::capture::{logger_into, Capture, Format};
use crate::level::threshold_from_env;

/// Error-severity markers, one per encoding. slog-term places the short level
/// name between spaces, slog-json emits it as a "level" field.
const TEXT_ERROR_MARKER: &str = " ERRO ";
const JSON_ERROR_MARKER: &str = r#""level":"ERRO""#;

/// Run `test_fn` with a logger whose output is captured, then validate that
/// every pattern in `expected_patterns` appears somewhere in the captured
/// output.
///
/// Captured lines containing a declared pattern are hidden. Lines matching no
/// pattern are echoed to stderr, in order, for debugging. A pattern that
/// never appears fails the test with a panic naming it. Extra lines alone
/// never fail the session.
///
/// The logger encodes records as `key: value` text and is filtered at the
/// threshold resolved from `LOG_LEVEL` (see [`threshold`](crate::threshold)).
/// Patterns are literal byte substrings, case-sensitive, with no regex
/// semantics. If `test_fn` panics, the panic propagates untouched.
///
/// ```
/// use slog::error;
///
/// slog_expect::expect_logs(
///     |logger| {
///         error!(logger, "connection refused"; "host" => "localhost");
///     },
///     &["connection refused", "host: localhost"],
/// );
/// ```
pub fn expect_logs<F>(test_fn: F, expected_patterns: &[&str])
where
    F: FnOnce(&slog::Logger),
{
    run_session(Format::Text, &mut io::stderr(), test_fn, expected_patterns);
}

/// Like [`expect_logs`], but the logger encodes records as JSON objects, so
/// patterns can pin down structured fields:
///
/// ```
/// use slog::error;
///
/// slog_expect::expect_logs_json(
///     |logger| {
///         error!(logger, "validation failed"; "field" => "email");
///     },
///     &[r#""msg":"validation failed""#, r#""field":"email""#],
/// );
/// ```
pub fn expect_logs_json<F>(test_fn: F, expected_patterns: &[&str])
where
    F: FnOnce(&slog::Logger),
{
    run_session(Format::Json, &mut io::stderr(), test_fn, expected_patterns);
}

/// One capture session: build the sink and logger, run the callback, then
/// partition the captured lines and check the declared patterns.
pub(crate) fn run_session<W, F>(
    format: Format,
    diagnostics: &mut W,
    test_fn: F,
    expected_patterns: &[&str],
) where
    W: Write,
    F: FnOnce(&slog::Logger),
{
    let mut capture = Capture::new();
    let logger = logger_into(format, capture.writer(), threshold_from_env());

    test_fn(&logger);
    // all logging has quiesced once the callback and its workers are done
    drop(logger);

    let output = capture.contents();
    for line in output.split(|&b| b == b'\n') {
        if line.is_empty() {
            continue;
        }
        let expected = expected_patterns
            .iter()
            .any(|pattern| memmem::find(line, pattern.as_bytes()).is_some());
        if !expected {
            // one newline-terminated write per line, so lines from parallel
            // test processes cannot interleave mid-line on stderr
            let mut echoed = Vec::with_capacity(line.len() + 1);
            echoed.extend_from_slice(line);
            echoed.push(b'\n');
            let _ = diagnostics.write_all(&echoed);
        }
    }

    for pattern in expected_patterns {
        assert!(
            memmem::find(&output, pattern.as_bytes()).is_some(),
            "expected log pattern not found: {}",
            pattern
        );
    }
}

/// Assert that a capture contains no error-level records.
///
/// Both the text and the JSON encodings are checked, so this works on a sink
/// from either logger flavor. Drains the capture.
///
/// ```
/// use slog::{info, Level};
///
/// let (logger, mut capture) = slog_expect::captured_logger(Level::Debug);
/// info!(logger, "all quiet");
/// slog_expect::assert_no_error_logs(&mut capture);
/// ```
pub fn assert_no_error_logs(capture: &mut Capture) {
    let output = capture.text();
    for marker in [TEXT_ERROR_MARKER, JSON_ERROR_MARKER] {
        if let Some(line) = output.lines().find(|line| line.contains(marker)) {
            panic!("unexpected error-level record in captured output: {}", line);
        }
    }
}
