//! JSON-file persistence for the task list.
//!
//! The whole list lives in a single file (`tasks.json` in the working
//! directory) and is rewritten in full on every save. Each load/save
//! prints a human-readable `[OK]`/`[WARNING]`/`[ERROR]` status line and
//! mirrors the outcome into the session log.
//!
//! Storage never terminates the process: fatal conditions (malformed data
//! on load, a serialization failure on save) are returned as errors and
//! the entry point decides to exit. Non-fatal I/O failures on save are
//! reported here and swallowed, per the program's error taxonomy.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::Result;
use crate::models::Task;

/// Well-known name of the persistence file.
pub const TASKS_FILE: &str = "tasks.json";

/// Handle to the persistence file.
///
/// The handle only carries the path; the file itself is opened and closed
/// inside each `load`/`save` call, so no file handle outlives a user
/// interaction.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage at the default location: `tasks.json` in the working
    /// directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(TASKS_FILE),
        }
    }

    /// Storage at an explicit path. Used by tests for isolation.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the persistence file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list from disk.
    ///
    /// A missing file is not an error: the user is starting fresh and the
    /// file will be created on the first save. Malformed contents and any
    /// other failure to open the file are fatal and propagate.
    pub fn load(&self) -> Result<Vec<Task>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("no existing {} found, starting empty", self.path.display());
                println!(
                    "[WARNING] No existing {} found. Will attempt to create a new one.",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                error!("unexpected error opening {}: {}", self.path.display(), e);
                println!("[ERROR] Unexpected error opening {}", self.path.display());
                return Err(e.into());
            }
        };

        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => {
                info!("loaded {} task(s) from {}", tasks.len(), self.path.display());
                println!(
                    "[OK] loaded {} task(s) from {}",
                    tasks.len(),
                    self.path.display()
                );
                Ok(tasks)
            }
            Err(e) => {
                error!("invalid JSON data in {}: {}", self.path.display(), e);
                println!("[ERROR] invalid JSON data in {}", self.path.display());
                Err(e.into())
            }
        }
    }

    /// Persist the whole task list, overwriting the file.
    ///
    /// Write failures (permissions, device errors) are reported and
    /// swallowed; the in-memory list is then ahead of the file, which is
    /// the documented trade-off for non-fatal I/O errors. A serialization
    /// failure is fatal and propagates.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        // 4-space indent keeps the file diff-friendly and hand-editable.
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        tasks.serialize(&mut ser)?;

        match fs::write(&self.path, &buf) {
            Ok(()) => {
                info!("saved {} task(s) to {}", tasks.len(), self.path.display());
                println!(
                    "\n[OK] Saved to \"{}\". Total {} task(s) on file.",
                    self.path.display(),
                    tasks.len()
                );
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                error!("no permissions to write to {}", self.path.display());
                println!(
                    "\n[ERROR] No permissions to write to {}",
                    self.path.display()
                );
            }
            Err(e) => {
                error!("unexpected error saving {}: {}", self.path.display(), e);
                println!("\n[ERROR] Unexpected error saving {}", self.path.display());
            }
        }
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
