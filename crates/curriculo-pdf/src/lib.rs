//! curriculo-pdf - PDF generation via Typst
//!
//! This crate turns a (CvData, CvTheme) pair into a downloadable PDF.
//!
//! # Architecture
//!
//! The generation pipeline consists of two stages:
//!
//! 1. **Transpiler** - Converts the CV aggregate to Typst markup
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! Generation is one synchronous pass with no cancellation; callers mark
//! the operation as in progress and surface a failure as a dismissible
//! message, never a crash.
//!
//! # Example
//!
//! ```ignore
//! use curriculo_model::{CvData, CvTheme};
//! use curriculo_pdf::render_pdf;
//!
//! let pdf_bytes = render_pdf(&CvData::new(), &CvTheme::default())?;
//! ```

mod compiler;
mod error;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::Transpiler;

use curriculo_model::{CvData, CvTheme};

/// Convenience function to render a CV to PDF
pub fn render_pdf(cv: &CvData, theme: &CvTheme) -> Result<Vec<u8>> {
    let markup = Transpiler::transpile(cv, theme);
    tracing::debug!(markup_len = markup.len(), "transpiled CV to Typst markup");
    Compiler::compile(&markup)
}

/// Default download file name: `curriculo-<name>.pdf`
///
/// The person's name is slugified; an empty name yields the
/// `curriculo-sem-nome.pdf` fallback.
pub fn suggested_file_name(cv: &CvData) -> String {
    let slug = slugify(&cv.personal_info.name);
    if slug.is_empty() {
        "curriculo-sem-nome.pdf".to_string()
    } else {
        format!("curriculo-{}.pdf", slug)
    }
}

/// Lowercase and collapse everything non-alphanumeric into single dashes
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
