//! Theme model and the predefined palette
//!
//! A theme is three hex color strings applied uniformly by both renderers:
//! `primary` tints headings and accents, `text` tints body copy and
//! `background` tints the outer container of the preview.

use serde::{Deserialize, Serialize};

/// Three-color palette for the rendered CV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvTheme {
    pub primary: String,
    pub text: String,
    pub background: String,
}

impl Default for CvTheme {
    /// The "Azul Clássico" palette
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            text: "#333333".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

/// A predefined theme selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedTheme {
    pub name: &'static str,
    pub primary: &'static str,
    pub text: &'static str,
    pub background: &'static str,
}

impl NamedTheme {
    /// Materialize the palette as an owned theme value
    pub fn to_theme(&self) -> CvTheme {
        CvTheme {
            primary: self.primary.to_string(),
            text: self.text.to_string(),
            background: self.background.to_string(),
        }
    }
}

/// The built-in palette, in menu order
pub const PREDEFINED_THEMES: &[NamedTheme] = &[
    NamedTheme { name: "Azul Clássico", primary: "#2563eb", text: "#333333", background: "#ffffff" },
    NamedTheme { name: "Verde Profissional", primary: "#10b981", text: "#1f2937", background: "#ffffff" },
    NamedTheme { name: "Roxo Elegante", primary: "#8b5cf6", text: "#1f2937", background: "#ffffff" },
    NamedTheme { name: "Vermelho Impacto", primary: "#ef4444", text: "#1f2937", background: "#ffffff" },
    NamedTheme { name: "Laranja Vibrante", primary: "#f97316", text: "#1f2937", background: "#ffffff" },
    NamedTheme { name: "Turquesa Moderno", primary: "#06b6d4", text: "#1f2937", background: "#ffffff" },
    NamedTheme { name: "Cinza Neutro", primary: "#6b7280", text: "#1f2937", background: "#ffffff" },
    NamedTheme { name: "Rosa Fashion", primary: "#ec4899", text: "#1f2937", background: "#ffffff" },
    // Themes with tinted backgrounds
    NamedTheme { name: "Fundo Azul Suave", primary: "#1e40af", text: "#1f2937", background: "#f0f6ff" },
    NamedTheme { name: "Fundo Verde Suave", primary: "#047857", text: "#1f2937", background: "#f0fdf4" },
    NamedTheme { name: "Fundo Creme", primary: "#9f6d37", text: "#1f2937", background: "#fdf6e3" },
    NamedTheme { name: "Fundo Cinza Claro", primary: "#4b5563", text: "#1f2937", background: "#f8f9fa" },
];

/// Look up a predefined theme by name, case-insensitive
pub fn find_theme(name: &str) -> Option<&'static NamedTheme> {
    PREDEFINED_THEMES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Parse a `#rgb` or `#rrggbb` hex color into its channels
///
/// Consumers assume no validation beyond shape; anything unparseable
/// falls back to black so rendering never fails on a bad color.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');

    // Expand the 3-digit shorthand (e.g. #fff)
    let expanded: String;
    let hex = if hex.len() == 3 {
        expanded = hex
            .chars()
            .flat_map(|c| std::iter::repeat(c).take(2))
            .collect();
        &expanded
    } else {
        hex
    };

    // Byte length alone is not enough: multi-byte characters would land
    // the slices off a char boundary
    if hex.len() != 6 || !hex.is_ascii() {
        return (0, 0, 0);
    }

    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    (parse(0..2), parse(2..4), parse(4..6))
}
