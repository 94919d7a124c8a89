//! Error types for edit operations

use thiserror::Error;

/// Result type for edit operations
pub type Result<T> = std::result::Result<T, EditError>;

/// Errors that can occur while applying an edit
///
/// An out-of-range index is a caller bug (the interface only offers valid
/// indices), but it is reported as an error rather than a panic so the
/// application stays interactive.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// Index points past the end of a section's sequence
    #[error("índice {index} fora do intervalo para {section} (tamanho {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },
}
