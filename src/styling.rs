//! Consolidated styling module for terminal output.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//! - Semantic style constants for node cells and messages

use anstyle::{AnsiColor, Color, Style};

// ============================================================================
// Re-exports from anstream (auto-detecting output)
// ============================================================================

/// Auto-detecting println that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::println;

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Message Styles
// ============================================================================

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Bold error style for names embedded in error messages
pub const ERROR_BOLD: Style = ERROR.bold();

/// Hint style (dimmed) - use as `{HINT}text{HINT:#}`
pub const HINT: Style = Style::new().dimmed();

/// Error emoji - use with ERROR style: `eprintln!("{ERROR_EMOJI} {ERROR}message{ERROR:#}");`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji - use with HINT style: `println!("{HINT_EMOJI} {HINT}message{HINT:#}");`
pub const HINT_EMOJI: &str = "💡";

// ============================================================================
// Node Cell Styles
// ============================================================================

const fn cell(bg: AnsiColor) -> Style {
    Style::new().bg_color(Some(Color::Ansi(bg)))
}

pub const CELL_IDLE: Style = cell(AnsiColor::Green);
pub const CELL_MIXED: Style = cell(AnsiColor::Cyan);
pub const CELL_DRAINING: Style = cell(AnsiColor::Yellow);
pub const CELL_ALLOCATED: Style = cell(AnsiColor::Blue);
pub const CELL_DOWN: Style = cell(AnsiColor::Red);
pub const CELL_RESERVED: Style = cell(AnsiColor::Magenta);
/// `G` has a color but no state token produces it; it only appears if a
/// caller hands the renderer that character directly.
pub const CELL_BRIGHT_CYAN: Style = cell(AnsiColor::BrightCyan);

/// White background with black text, used for `!` and for any unmapped character.
pub const CELL_UNKNOWN: Style =
    cell(AnsiColor::White).fg_color(Some(Color::Ansi(AnsiColor::Black)));

/// Background style for a display character.
///
/// Characters outside the table fall back to [`CELL_UNKNOWN`].
pub fn cell_style(symbol: char) -> Style {
    match symbol {
        'I' => CELL_IDLE,
        'M' => CELL_MIXED,
        'D' => CELL_DRAINING,
        'A' => CELL_ALLOCATED,
        'X' => CELL_DOWN,
        'R' => CELL_RESERVED,
        'G' => CELL_BRIGHT_CYAN,
        _ => CELL_UNKNOWN,
    }
}

// ============================================================================
// Styled Output Types
// ============================================================================

/// A piece of text with an optional style
#[derive(Clone, Debug, PartialEq)]
pub struct StyledString {
    pub text: String,
    pub style: Option<Style>,
}

impl StyledString {
    pub fn new(text: impl Into<String>, style: Option<Style>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(text, Some(style))
    }

    /// Renders to a string with ANSI escape codes
    pub fn render(&self) -> String {
        if let Some(style) = &self.style {
            format!("{}{}{}", style.render(), self.text, style.render_reset())
        } else {
            self.text.clone()
        }
    }
}

/// A line composed of multiple styled strings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledLine {
    pub segments: Vec<StyledString>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw (unstyled) segment
    pub fn push_raw(&mut self, text: impl Into<String>) {
        self.segments.push(StyledString::raw(text));
    }

    /// Add a styled segment
    pub fn push_styled(&mut self, text: impl Into<String>, style: Style) {
        self.segments.push(StyledString::styled(text, style));
    }

    /// Text without any escape codes
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Renders the entire line with ANSI escape codes
    pub fn render(&self) -> String {
        self.segments.iter().map(|s| s.render()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
