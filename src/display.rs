//! Display collaborator: screen clearing, the banner, and menu rendering.
//!
//! Everything here writes to a caller-supplied `Write` so the controller
//! and the tests share one code path; only the terminal detection looks at
//! the real stdout.

use std::io::{IsTerminal, Write};

use crate::Result;
use crate::cli::MenuCommand;

/// Fixed banner shown at the top of every screen.
const BANNER: &str = r"
 _____  _    ____  _  _______ ____
|_   _|/ \  / ___|| |/ / ____|  _ \
  | | / _ \ \___ \| ' /|  _| | |_) |
  | |/ ___ \ ___) | . \| |___|  _ <
  |_/_/   \_\____/|_|\_\_____|_| \_\
";

/// Clear the visible terminal buffer.
///
/// A no-op when stdout is not a terminal, which keeps piped transcripts
/// (and test assertions) free of escape sequences.
pub fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    if std::io::stdout().is_terminal() {
        write!(out, "\x1b[2J\x1b[H")?;
        out.flush()?;
    }
    Ok(())
}

/// Print the banner.
pub fn banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER)?;
    Ok(())
}

/// Print one `[n] label` line per offered command.
pub fn render_menu<W: Write>(out: &mut W, commands: &[MenuCommand]) -> Result<()> {
    for command in commands {
        writeln!(out, "[{}] {}", command.number(), command.label())?;
    }
    writeln!(out)?;
    Ok(())
}
