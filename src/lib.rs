//! Test-support helpers for [`slog`]: run code against a logger whose output
//! is captured in memory, assert that the log lines you expected actually
//! showed up, and keep those expected lines out of `cargo test` output while
//! surfacing the ones you didn't anticipate.
//!
//! The usual entry point is [`expect_logs`] (or [`expect_logs_json`] for
//! structured output):
//!
//! ```
//! use slog::error;
//!
//! slog_expect::expect_logs(
//!     |logger| {
//!         error!(logger, "API call failed"; "error" => "rate limit exceeded", "status" => 429);
//!     },
//!     &["API call failed", "rate limit exceeded"],
//! );
//! ```
//!
//! Lines containing a declared pattern are validated and hidden; anything
//! else the callback logged is echoed to stderr for debugging. A declared
//! pattern that never appears fails the test.
//!
//! When the automatic partition is not enough (say, you care about the order
//! of several messages), [`captured_logger`] hands back the logger and the
//! live sink for manual inspection. [`init_test_logging`] configures a
//! process-wide stderr logger for a whole suite, honoring the `LOG_LEVEL`
//! environment variable the same way capture sessions do.

#[macro_use]
extern crate slog;

mod capture;
mod expect;
mod level;

pub use capture::{captured_json_logger, captured_logger, Capture};
pub use expect::{assert_no_error_logs, expect_logs, expect_logs_json};
pub use level::{init_test_logging, threshold, threshold_from_env, DEFAULT_THRESHOLD, LOG_LEVEL_VAR};
