//! curriculo-model - CV data model and theme definitions
//!
//! This crate provides the canonical in-memory representation of a résumé
//! (the `CvData` aggregate) and the three-color theme applied to every
//! rendered view. Both renderers are pure derivations from these two values,
//! so everything they share lives here: the section-visibility predicate
//! and the pt-BR date formatting.
//!
//! # Example
//!
//! ```
//! use curriculo_model::{CvData, Experience, Section};
//!
//! let mut cv = CvData::default();
//! assert!(Section::Experience.is_empty(&cv));
//!
//! cv.experience.push(Experience {
//!     company: "Acme".to_string(),
//!     position: "Dev".to_string(),
//!     ..Default::default()
//! });
//! assert!(!Section::Experience.is_empty(&cv));
//! ```

pub mod cv;
pub mod format;
pub mod sections;
pub mod theme;

pub use cv::{
    CvData, Education, Experience, Language, LanguageLevel, ParseLevelError, PersonalInfo, Skill,
    SkillLevel, SocialDisplayOptions, SocialLink,
};
pub use format::{format_date_range, format_month_year, CURRENT_LABEL};
pub use sections::{is_blank, visible_sections, Section, ALL_SECTIONS};
pub use theme::{find_theme, hex_to_rgb, CvTheme, NamedTheme, PREDEFINED_THEMES};
