//! curriculo CLI - Command-line interface library
//!
//! This library provides the CLI for the curriculo CV builder:
//! - Section editing: personal, experience, education, skill, softskill,
//!   language, social
//! - Show: themed terminal preview
//! - Export: themed PDF generation
//! - Theme: palette selection and custom colors
//! - Reset: restore the default CV (guarded by a confirmation)
//!
//! # Binary Usage
//!
//! ```bash
//! # Fill in the header
//! curriculo personal --name "Maria Silva" --email maria@example.com
//!
//! # Add an experience entry and inspect the result
//! curriculo experience add --company Acme --position Dev --start-date 2021-01-01
//! curriculo show
//!
//! # Download the themed PDF
//! curriculo theme apply "Verde Profissional"
//! curriculo export
//! ```

pub mod app;

pub use app::run_cli;
