//! Color utilities for guide output
//!
//! Provides consistent styling for headings and numbered steps. The `console`
//! crate drops the styling when stdout is not a terminal.

use console::Style;
use irta_admin_setup_core::GuideLine;

/// Style a guide line for display
///
/// - Heading -> cyan bold
/// - Step -> yellow number, plain text
/// - Text, Blank -> unstyled
pub fn styled_line(line: &GuideLine) -> String {
    match line {
        GuideLine::Heading(text) => Style::new().cyan().bold().apply_to(text).to_string(),
        GuideLine::Step { number, text } => {
            format!("{} {text}", Style::new().yellow().apply_to(format!("{number}.")))
        }
        GuideLine::Text(_) | GuideLine::Blank => line.to_string(),
    }
}
