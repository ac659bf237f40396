//! Task operations: the commands reachable from the menu.
//!
//! Each operation takes the live task list, the storage handle, and the
//! session's input/output streams, so unit tests can drive them with
//! in-memory buffers. Every mutation saves the full list before returning;
//! there is no batching.

use std::io::{self, BufRead, ErrorKind, Write};

use log::debug;

use crate::Result;
use crate::display;
use crate::models::{Task, TaskStatus, title_case};
use crate::storage::Storage;

/// Print `prompt` (no trailing newline) and read one line of input.
///
/// Returns the line without its line terminator. End of input is an
/// `UnexpectedEof` error: an interactive session cannot continue without
/// a stdin, so the session unwinds as a fatal error rather than spinning.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(ErrorKind::UnexpectedEof, "input stream closed").into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt until the user enters a number in `[0, len]`.
///
/// 0 means "cancel, back to the main menu". Non-numeric and out-of-range
/// input gets no error message, just another prompt, since the valid range
/// is visible in the list rendered right above.
fn prompt_task_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    len: usize,
) -> Result<usize> {
    loop {
        let line = prompt_line(input, out, "[TASK NUMBER or 0 to main menu] ")?;
        if let Ok(n) = line.trim().parse::<usize>() {
            if n <= len {
                return Ok(n);
            }
        }
    }
}

/// Render the task list: a count header then one line per task with its
/// 1-based index, description, and uppercased status. Read-only.
pub fn view_tasks<W: Write>(tasks: &[Task], out: &mut W) -> Result<()> {
    display::clear_screen(out)?;
    display::banner(out)?;
    writeln!(out, "{} tasks exist\n", tasks.len())?;
    for (index, task) in tasks.iter().enumerate() {
        writeln!(
            out,
            "[{:2}] {:25} - {}",
            index + 1,
            task.description,
            task.status.to_string().to_uppercase()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// Prompt for a new task and append it to the list.
///
/// The description is re-prompted until non-blank; the status prompt is
/// asked once and normalized. Saves, then waits for an acknowledgment
/// keypress.
pub fn add_task<R: BufRead, W: Write>(
    tasks: &mut Vec<Task>,
    storage: &Storage,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut description = String::new();
    while description.trim().is_empty() {
        description = prompt_line(input, out, "[NEW TASK]: ")?;
    }
    let status = prompt_line(input, out, "[STATUS - done/pending]: ")?;

    let task = Task::from_input(&description, &status);
    let name = task.description.clone();
    tasks.push(task);
    debug!("added task: {}", name);
    storage.save(tasks)?;

    prompt_line(
        input,
        out,
        &format!("\n\"{}\" has been added to tasks\nENTER to continue...", name),
    )?;
    display::clear_screen(out)?;
    Ok(())
}

/// Apply edit inputs to an existing task.
///
/// A blank name keeps the old description; the status is always
/// re-normalized, so a blank status resets the task to pending.
fn edited_task(existing: &Task, description: &str, status: &str) -> Task {
    let description = if description.trim().is_empty() {
        existing.description.clone()
    } else {
        title_case(description)
    };
    Task {
        description,
        status: TaskStatus::from_input(status),
    }
}

/// Show the list, pick a task by number, and replace it.
pub fn edit_task<R: BufRead, W: Write>(
    tasks: &mut Vec<Task>,
    storage: &Storage,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    view_tasks(tasks, out)?;
    let number = prompt_task_number(input, out, tasks.len())?;
    if number == 0 {
        return Ok(());
    }

    let description = prompt_line(input, out, "[NEW TASK NAME or leave blank]: ")?;
    let status = prompt_line(input, out, "[NEW TASK STATUS - done/pending]: ")?;
    tasks[number - 1] = edited_task(&tasks[number - 1], &description, &status);
    debug!("edited task {}", number);
    storage.save(tasks)?;

    prompt_line(
        input,
        out,
        &format!("\nTask {} has been updated\nENTER to continue...", number),
    )?;
    display::clear_screen(out)?;
    Ok(())
}

/// Show the list, pick a task by number, and remove it.
///
/// Tasks after the removed one shift down by one index.
pub fn delete_task<R: BufRead, W: Write>(
    tasks: &mut Vec<Task>,
    storage: &Storage,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    view_tasks(tasks, out)?;
    let number = prompt_task_number(input, out, tasks.len())?;
    if number == 0 {
        return Ok(());
    }

    let removed = tasks.remove(number - 1);
    debug!("deleted task {}: {}", number, removed.description);
    storage.save(tasks)?;

    prompt_line(
        input,
        out,
        &format!("\nTask {} has been deleted\nENTER to continue...", number),
    )?;
    display::clear_screen(out)?;
    Ok(())
}
