// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal environment and styling utilities.
//!
//! This module provides functions to manipulate the terminal emulator's
//! properties, such as background colors, using OSC (Operating System Command)
//! escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Terminals that do not understand them simply ignore the sequence.

use std::io::{self, Write};

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_color` - A string slice representing the color (e.g., `"#1e1e1e"`).
///
/// # Errors
///
/// Returns an error if writing to or flushing `stdout` fails.
pub(crate) fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_color)?;
    stdout.flush()
}

/// Resets the terminal background to its default color with OSC 111.
///
/// Called during cleanup so the user's terminal is left as it was found.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
