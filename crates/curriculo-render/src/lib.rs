//! curriculo-render - Terminal preview of the CV
//!
//! A deterministic, stateless projection of (CvData, CvTheme) into a text
//! representation for on-screen display. Given the same inputs it produces
//! the same output; section visibility comes from the shared predicate in
//! `curriculo-model` so the preview can never disagree with the PDF about
//! which sections appear.

mod palette;
mod preview;

pub use palette::Palette;
pub use preview::{render, PreviewOptions};
