//! Guide session
//!
//! Prints the intro, waits once for the operator's answer, then prints the
//! matching instruction block. Generic over reader and writer so tests can
//! drive it without a terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use irta_admin_setup_core::{Branch, Guide};

use crate::output::write_lines;
use crate::prompt::{read_response, show_prompt};

/// Run one guide session and return the chosen branch
///
/// Consumes at most one line from `input`.
pub fn run_session<R: BufRead, W: Write>(
    guide: &Guide,
    input: &mut R,
    out: &mut W,
) -> Result<Branch> {
    write_lines(out, &guide.intro()).context("Failed to write guide introduction")?;
    show_prompt(out, "").context("Failed to write prompt")?;

    let response = read_response(input);
    let branch = Branch::from_response(response.as_deref());

    write_lines(out, &guide.block(branch))
        .with_context(|| format!("Failed to write {branch} instructions"))?;
    out.flush().context("Failed to flush output")?;

    Ok(branch)
}
