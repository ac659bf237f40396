//! Data models for tasker entities.
//!
//! This module defines the core data structures:
//! - `Task` - a description plus a done/pending status
//! - `TaskStatus` - the two-state status enum
//!
//! It also owns the two input normalizations: descriptions are stored in
//! title case, and any status input other than "done" collapses to pending.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status: done or pending, nothing in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    /// Normalize raw user input to a status.
    ///
    /// Exactly "done" (case-insensitive, surrounding whitespace ignored)
    /// maps to `Done`; anything else, including empty input, maps to
    /// `Pending`.
    pub fn from_input(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("done") {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

/// A task tracked by tasker.
///
/// Tasks carry no identity beyond their position in the list: the 1-based
/// index shown to the user is the position, and deleting a task shifts the
/// indices of everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing, stored in title case
    pub description: String,

    /// Current status
    pub status: TaskStatus,
}

impl Task {
    /// Create a task from raw user input, applying both normalizations.
    pub fn from_input(description: &str, status: &str) -> Self {
        Self {
            description: title_case(description),
            status: TaskStatus::from_input(status),
        }
    }
}

/// Title-case a string: an alphabetic character is uppercased when the
/// preceding character is not alphabetic, and lowercased otherwise.
///
/// This matches how the descriptions were historically normalized, so
/// `"walk dog"` becomes `"Walk Dog"` and `"BUY MILK"` becomes `"Buy Milk"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
