//! Tasker CLI - an interactive, numbered-menu task list manager.
//!
//! There are no flags, subcommands, or environment variables: the whole
//! interface is the interactive menu. The process exits 0 on the Exit
//! command and 1 on a fatal persistence error.

use std::fs::File;
use std::io;
use std::process;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use tasker::cli;
use tasker::storage::Storage;

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// File logger for the session, writing to `tasker.log` in the working
/// directory. Best-effort: if the file cannot be created there is simply
/// no log.
fn init_logger() {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("tasker.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, config, log_file);
    }
}

fn run() -> tasker::Result<()> {
    let storage = Storage::new();
    let mut tasks = storage.load()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    cli::run(&mut tasks, &storage, &mut input, &mut out)
}
