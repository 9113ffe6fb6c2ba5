//! Output utilities for the guide
//!
//! Styles guide lines for the terminal and writes whole blocks.

pub mod colors;

pub use colors::styled_line;

use std::io::{self, Write};

use irta_admin_setup_core::GuideLine;

/// Write each line of a block followed by a newline
pub fn write_lines<W: Write>(out: &mut W, lines: &[GuideLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", styled_line(line))?;
    }
    Ok(())
}
