use std::io::Read;
use std::sync::Mutex;

use slog::Drain;

/// In-memory sink holding the output of one capture session.
///
/// Cheap handles to the same underlying buffer are shared between the logger's
/// drain and the `Capture` returned to the caller. Reads drain: each accessor
/// returns everything logged since the previous call.
pub struct Capture {
    buffer: iobuffer::IoBuffer,
}

impl Capture {
    pub(crate) fn new() -> Self {
        Capture {
            buffer: iobuffer::IoBuffer::new(),
        }
    }

    /// Writer half of the sink, handed to the logger's drain.
    pub(crate) fn writer(&self) -> iobuffer::IoBuffer {
        self.buffer.clone()
    }

    /// Drain everything logged since the last read, as raw bytes.
    pub fn contents(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        self.buffer
            .read_to_end(&mut out)
            .expect("reading an in-memory buffer cannot fail");
        out
    }

    /// Drain everything logged since the last read, as text.
    pub fn text(&mut self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Drain captured output and parse it as one JSON record per line.
    ///
    /// Only meaningful for sinks populated through [`captured_json_logger`]
    /// or [`expect_logs_json`](crate::expect_logs_json).
    pub fn json_records(&mut self) -> Vec<serde_json::Value> {
        self.text()
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("captured line is not valid JSON ({}): {}", e, line))
            })
            .collect()
    }
}

/// Line encoding used by a session's logger.
#[derive(Clone, Copy)]
pub(crate) enum Format {
    Text,
    Json,
}

pub(crate) fn logger_into(
    format: Format,
    to: iobuffer::IoBuffer,
    threshold: slog::Level,
) -> slog::Logger {
    match format {
        Format::Text => {
            let decorator = slog_term::PlainSyncDecorator::new(to);
            let drain = slog_term::FullFormat::new(decorator)
                .build()
                .filter_level(threshold)
                .fuse();
            slog::Logger::root(drain, o!())
        }
        Format::Json => {
            // the sync decorator serializes text records; JSON gets a mutex
            let drain = Mutex::new(slog_json::Json::default(to)).map(slog::Fuse);
            let drain = drain.filter_level(threshold).fuse();
            slog::Logger::root(drain, o!())
        }
    }
}

/// Create a logger writing `key: value` text lines into a fresh in-memory
/// sink, filtered at `threshold`.
///
/// Nothing is classified or asserted automatically; inspect the returned
/// [`Capture`] with whatever assertions the test needs.
///
/// ```
/// use slog::{info, Level};
///
/// let (logger, mut capture) = slog_expect::captured_logger(Level::Debug);
/// info!(logger, "processing item"; "id" => 123);
/// assert!(capture.text().contains("id: 123"));
/// ```
pub fn captured_logger(threshold: slog::Level) -> (slog::Logger, Capture) {
    let capture = Capture::new();
    let logger = logger_into(Format::Text, capture.writer(), threshold);
    (logger, capture)
}

/// Like [`captured_logger`], but records are encoded as JSON objects, one per
/// line. Useful for validating structured fields via
/// [`Capture::json_records`].
pub fn captured_json_logger(threshold: slog::Level) -> (slog::Logger, Capture) {
    let capture = Capture::new();
    let logger = logger_into(Format::Json, capture.writer(), threshold);
    (logger, capture)
}
