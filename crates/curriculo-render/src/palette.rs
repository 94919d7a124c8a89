//! Theme-to-terminal color mapping
//!
//! Primary tints headings and accents, text tints body copy. The theme's
//! background color is not applied: terminals own their own background, so
//! only the PDF-facing views ever see it. Colors use 24-bit ANSI escapes and
//! can be disabled wholesale for plain output and tests.

use curriculo_model::{hex_to_rgb, CvTheme};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Paints preview text with a theme's colors
#[derive(Debug, Clone)]
pub struct Palette {
    primary: (u8, u8, u8),
    text: (u8, u8, u8),
    enabled: bool,
}

impl Palette {
    /// Build a palette from a theme; `enabled = false` yields plain text
    pub fn new(theme: &CvTheme, enabled: bool) -> Self {
        Self {
            primary: hex_to_rgb(&theme.primary),
            text: hex_to_rgb(&theme.text),
            enabled,
        }
    }

    fn paint(&self, s: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        if !self.enabled {
            return s.to_string();
        }
        let weight = if bold { BOLD } else { "" };
        format!("{}\x1b[38;2;{};{};{}m{}{}", weight, r, g, b, s, RESET)
    }

    /// Heading/accent text in the primary color
    pub fn heading(&self, s: &str) -> String {
        self.paint(s, self.primary, true)
    }

    /// Accent text in the primary color, not bold
    pub fn accent(&self, s: &str) -> String {
        self.paint(s, self.primary, false)
    }

    /// Body copy in the text color
    pub fn body(&self, s: &str) -> String {
        self.paint(s, self.text, false)
    }

    /// Emphasized body copy
    pub fn strong(&self, s: &str) -> String {
        self.paint(s, self.text, true)
    }
}
