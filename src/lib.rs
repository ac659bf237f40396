//! Tasker - an interactive terminal task list manager.
//!
//! This library provides the core functionality for the `tasker` binary:
//! JSON-file persistence, the task mutation operations, and the
//! numbered-menu controller that drives an interactive session.

pub mod cli;
pub mod commands;
pub mod display;
pub mod models;
pub mod storage;

/// Library-level error type for tasker operations.
///
/// Only fatal conditions travel as errors: a missing persistence file or
/// an unwritable save is reported where it happens and swallowed, while
/// malformed data and lost input streams propagate up to `main`, which is
/// the one place that decides to terminate the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tasker operations.
pub type Result<T> = std::result::Result<T, Error>;
