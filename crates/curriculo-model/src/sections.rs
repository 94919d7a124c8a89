//! Section visibility shared by both renderers
//!
//! The preview and the PDF must never disagree on which sections appear,
//! so the "is this section non-empty" rule lives here and both renderers
//! consume it instead of re-deriving it.

use crate::cv::CvData;

/// The named subdivisions of a résumé, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Skills,
    SoftSkills,
    Languages,
    SocialLinks,
}

/// All sections in the fixed render order
pub const ALL_SECTIONS: &[Section] = &[
    Section::Experience,
    Section::Education,
    Section::Skills,
    Section::SoftSkills,
    Section::Languages,
    Section::SocialLinks,
];

impl Section {
    /// Whether the section's underlying sequence is empty
    pub fn is_empty(self, cv: &CvData) -> bool {
        match self {
            Section::Experience => cv.experience.is_empty(),
            Section::Education => cv.education.is_empty(),
            Section::Skills => cv.skills.is_empty(),
            Section::SoftSkills => cv.soft_skills.is_empty(),
            Section::Languages => cv.languages.is_empty(),
            Section::SocialLinks => cv.social_links.is_empty(),
        }
    }

    /// Whether the section should be rendered at all
    pub fn is_visible(self, cv: &CvData) -> bool {
        !self.is_empty(cv)
    }

    /// The heading shown above the section
    pub fn title(self) -> &'static str {
        match self {
            Section::Experience => "Experiência Profissional",
            Section::Education => "Educação",
            Section::Skills => "Ferramentas e Habilidades",
            Section::SoftSkills => "Soft Skills",
            Section::Languages => "Idiomas",
            Section::SocialLinks => "Redes Sociais",
        }
    }
}

/// The sections that should be rendered, in render order
pub fn visible_sections(cv: &CvData) -> Vec<Section> {
    ALL_SECTIONS
        .iter()
        .copied()
        .filter(|s| s.is_visible(cv))
        .collect()
}

/// Whether the aggregate has no content at all
///
/// Drives the preview's placeholder state: when every section is empty and
/// no personal field is filled, the normal layout is replaced by a single
/// placeholder block.
pub fn is_blank(cv: &CvData) -> bool {
    let p = &cv.personal_info;
    p.name.is_empty()
        && p.email.is_empty()
        && p.phone.is_empty()
        && p.location.is_empty()
        && ALL_SECTIONS.iter().all(|s| s.is_empty(cv))
}
