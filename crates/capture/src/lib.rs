// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console error capture for test assertions.
//!
//! The [`console`] module is the process-wide error/warning sink that code
//! under test logs through. A [`ConsoleTracker`] swaps in capturing wrappers
//! for the duration of one test, sorts captured errors into application and
//! setup categories, and lets the test assert that nothing unexpected was
//! logged.
//!
//! ```
//! use shopqa_capture::{console, console_error, ConsoleTracker};
//!
//! let _console = console::exclusive();
//! let tracker = ConsoleTracker::new();
//! tracker.start();
//! console_error!("NullInjectorError: No provider for PayoutService!");
//! tracker.stop();
//!
//! assert!(tracker.expect_no_app_errors().is_ok());
//! assert!(tracker.expect_no_errors().is_err());
//! ```

pub mod console;
mod format;
mod patterns;
mod record;
mod report;
mod tracker;

pub use console::{ConsoleFn, ConsoleLock};
pub use format::{format_message, short_type_name, ConsoleArg};
pub use patterns::default_setup_patterns;
pub use record::{CapturedMessage, ConsoleLevel};
pub use report::{CategorizedErrors, UnexpectedConsoleOutput};
pub use tracker::ConsoleTracker;
