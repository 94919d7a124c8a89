//! curriculo-edit - Form controller for the CV aggregate
//!
//! Every operation here is a pure function from a borrowed [`CvData`] to a
//! new one with exactly one section replaced; nothing mutates in place and
//! nothing persists or renders. Persistence and rendering are triggered by
//! the caller after the new value is produced.
//!
//! # Example
//!
//! ```
//! use curriculo_model::CvData;
//! use curriculo_edit::{add_experience, update_experience, ExperiencePatch};
//!
//! let cv = CvData::new();
//! let cv = add_experience(&cv);
//! let cv = update_experience(&cv, 0, ExperiencePatch {
//!     company: Some("Acme".to_string()),
//!     ..Default::default()
//! }).unwrap();
//! assert_eq!(cv.experience[0].company, "Acme");
//! ```

mod error;
mod ops;
mod social;

pub use error::{EditError, Result};
pub use ops::{
    add_education, add_experience, add_language, add_skill, add_soft_skill, remove_education,
    remove_experience, remove_language, remove_skill, remove_soft_skill, update_education,
    update_experience, update_language, update_personal, update_skill, update_soft_skill,
    EducationPatch, ExperiencePatch, LanguagePatch, PersonalPatch, SkillPatch,
};
pub use social::{
    add_social_link, normalize_url, platform_icon, remove_social_link, set_show_as_icons,
    update_social_link, SocialLinkPatch, PLATFORMS,
};
