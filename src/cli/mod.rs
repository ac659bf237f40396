//! The interactive menu controller.
//!
//! A session is a loop over two states, decided by whether the task list
//! is currently empty: an empty list offers only Add and Exit, a non-empty
//! list offers all five commands. The offered set is recomputed after
//! every command returns, so the first successful add (or the delete that
//! empties the list) changes the next menu.
//!
//! The command read loop is the sole input-validation gate: the operations
//! it dispatches to can assume they were invoked with a valid,
//! currently-offered command.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::Result;
use crate::commands;
use crate::display;
use crate::models::Task;
use crate::storage::Storage;

/// A menu command, carrying its user-facing number and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    View,
    Add,
    Edit,
    Delete,
    Exit,
}

impl MenuCommand {
    /// The number the user types to invoke this command.
    pub fn number(&self) -> u32 {
        match self {
            MenuCommand::View => 1,
            MenuCommand::Add => 2,
            MenuCommand::Edit => 3,
            MenuCommand::Delete => 4,
            MenuCommand::Exit => 0,
        }
    }

    /// The label shown next to the number in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::View => "View existing tasks",
            MenuCommand::Add => "Add a new task",
            MenuCommand::Edit => "Edit existing task",
            MenuCommand::Delete => "Delete existing task",
            MenuCommand::Exit => "Exit",
        }
    }
}

/// The commands valid for the current list state.
///
/// View, edit, and delete are withheld while the list is empty; there is
/// nothing they could operate on.
pub fn offered_commands(list_is_empty: bool) -> Vec<MenuCommand> {
    if list_is_empty {
        vec![MenuCommand::Add, MenuCommand::Exit]
    } else {
        vec![
            MenuCommand::View,
            MenuCommand::Add,
            MenuCommand::Edit,
            MenuCommand::Delete,
            MenuCommand::Exit,
        ]
    }
}

/// Clear, redraw, and prompt until the input parses as the number of a
/// currently-offered command. Invalid input gets no error message, just a
/// fresh screen and another prompt.
fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    offered: &[MenuCommand],
) -> Result<MenuCommand> {
    loop {
        display::clear_screen(out)?;
        display::banner(out)?;
        display::render_menu(out, offered)?;
        let line = commands::prompt_line(input, out, "Enter a command: ")?;
        if let Ok(number) = line.trim().parse::<u32>() {
            if let Some(command) = offered.iter().copied().find(|c| c.number() == number) {
                return Ok(command);
            }
        }
    }
}

/// Run an interactive session until the user exits.
///
/// The controller owns the task list for the process lifetime; every
/// mutating command persists before returning, so exiting needs no final
/// save.
pub fn run<R: BufRead, W: Write>(
    tasks: &mut Vec<Task>,
    storage: &Storage,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    info!("session started with {} task(s)", tasks.len());
    loop {
        let offered = offered_commands(tasks.is_empty());
        let command = read_command(input, out, &offered)?;
        debug!("dispatching {:?}", command);
        match command {
            MenuCommand::View => {
                commands::view_tasks(tasks, out)?;
                commands::prompt_line(input, out, "\nENTER to continue...")?;
                display::clear_screen(out)?;
            }
            MenuCommand::Add => commands::add_task(tasks, storage, input, out)?,
            MenuCommand::Edit => commands::edit_task(tasks, storage, input, out)?,
            MenuCommand::Delete => commands::delete_task(tasks, storage, input, out)?,
            MenuCommand::Exit => {
                display::clear_screen(out)?;
                display::banner(out)?;
                display::render_menu(out, &offered)?;
                writeln!(out, "Thanks for using tasker, exiting...")?;
                info!("session ended with {} task(s)", tasks.len());
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn input(script: &str) -> Cursor<Vec<u8>> {
        Cursor::new(script.as_bytes().to_vec())
    }

    #[test]
    fn test_offered_commands_empty_list() {
        let offered = offered_commands(true);
        assert_eq!(offered, vec![MenuCommand::Add, MenuCommand::Exit]);
    }

    #[test]
    fn test_offered_commands_non_empty_list() {
        let offered = offered_commands(false);
        assert_eq!(
            offered,
            vec![
                MenuCommand::View,
                MenuCommand::Add,
                MenuCommand::Edit,
                MenuCommand::Delete,
                MenuCommand::Exit,
            ]
        );
    }

    #[test]
    fn test_command_numbers_match_menu_slots() {
        assert_eq!(MenuCommand::View.number(), 1);
        assert_eq!(MenuCommand::Add.number(), 2);
        assert_eq!(MenuCommand::Edit.number(), 3);
        assert_eq!(MenuCommand::Delete.number(), 4);
        assert_eq!(MenuCommand::Exit.number(), 0);
    }

    #[test]
    fn test_read_command_skips_invalid_input() {
        let mut out = Vec::new();
        let offered = offered_commands(true);
        // "1" is valid in the non-empty state but not offered here.
        let command =
            read_command(&mut input("x\n7\n1\n2\n"), &mut out, &offered).unwrap();
        assert_eq!(command, MenuCommand::Add);
    }

    #[test]
    fn test_read_command_eof_is_an_error() {
        let mut out = Vec::new();
        let offered = offered_commands(false);
        assert!(read_command(&mut input("garbage\n"), &mut out, &offered).is_err());
    }

    #[test]
    fn test_run_add_transitions_menu_to_non_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::with_path(dir.path().join("tasks.json"));
        let mut tasks = Vec::new();
        let mut out = Vec::new();

        // Add "walk dog"/done, acknowledge, then exit from the full menu.
        run(
            &mut tasks,
            &storage,
            &mut input("2\nwalk dog\ndone\n\n0\n"),
            &mut out,
        )
        .unwrap();

        assert_eq!(tasks.len(), 1);
        let text = String::from_utf8(out).unwrap();
        // The menu rendered after the add must offer all five commands.
        assert!(text.contains("[1] View existing tasks"));
        assert!(text.contains("[3] Edit existing task"));
        assert!(text.contains("[4] Delete existing task"));
        assert!(text.contains("Thanks for using tasker, exiting..."));
    }

    #[test]
    fn test_run_empty_list_withholds_list_commands() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::with_path(dir.path().join("tasks.json"));
        let mut tasks = Vec::new();
        let mut out = Vec::new();

        run(&mut tasks, &storage, &mut input("0\n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[2] Add a new task"));
        assert!(text.contains("[0] Exit"));
        assert!(!text.contains("View existing tasks"));
    }

    #[test]
    fn test_run_delete_returns_menu_to_empty_state() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::with_path(dir.path().join("tasks.json"));
        let mut tasks = vec![Task::from_input("only", "")];
        let mut out = Vec::new();

        // Delete the only task, acknowledge, then exit from the empty menu.
        run(&mut tasks, &storage, &mut input("4\n1\n\n0\n"), &mut out).unwrap();

        assert!(tasks.is_empty());
        let text = String::from_utf8(out).unwrap();
        // The farewell menu is the empty-state one.
        let tail = text.rsplit("Enter a command: ").next().unwrap();
        assert!(!tail.contains("Delete existing task"));
        assert!(tail.contains("Thanks for using tasker, exiting..."));
    }
}
