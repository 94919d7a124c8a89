//! CV aggregate and section entities
//!
//! `CvData` is the single source of truth for a résumé. It is always fully
//! populated: every field defaults to an empty string or empty sequence, and
//! the serde defaults on the newer sections (`socialLinks`, `socialDisplay`)
//! guarantee that restores of older persisted payloads come back fully
//! populated too.
//!
//! Field names are serialized in camelCase to stay compatible with the
//! persisted `cv-data` layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name and contact details shown in the header block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// One professional experience entry
///
/// Dates are ISO `YYYY-MM-DD` strings; an empty `end_date` means the
/// position is current.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// One education entry, same date semantics as [`Experience`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

/// Proficiency level for technical skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    #[serde(rename = "Básico")]
    Basico,
    #[serde(rename = "Intermediário")]
    Intermediario,
    #[serde(rename = "Avançado")]
    Avancado,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Basico => "Básico",
            SkillLevel::Intermediario => "Intermediário",
            SkillLevel::Avancado => "Avançado",
        };
        write!(f, "{}", label)
    }
}

/// Error returned when a level flag value is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for SkillLevel {
    type Err = ParseLevelError;

    /// Accepts the level name with or without accents, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_level(s).as_str() {
            "basico" => Ok(SkillLevel::Basico),
            "intermediario" => Ok(SkillLevel::Intermediario),
            "avancado" => Ok(SkillLevel::Avancado),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Proficiency level for spoken languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguageLevel {
    #[default]
    #[serde(rename = "Básico")]
    Basico,
    #[serde(rename = "Intermediário")]
    Intermediario,
    #[serde(rename = "Avançado")]
    Avancado,
    #[serde(rename = "Fluente")]
    Fluente,
    #[serde(rename = "Nativo")]
    Nativo,
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageLevel::Basico => "Básico",
            LanguageLevel::Intermediario => "Intermediário",
            LanguageLevel::Avancado => "Avançado",
            LanguageLevel::Fluente => "Fluente",
            LanguageLevel::Nativo => "Nativo",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for LanguageLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_level(s).as_str() {
            "basico" => Ok(LanguageLevel::Basico),
            "intermediario" => Ok(LanguageLevel::Intermediario),
            "avancado" => Ok(LanguageLevel::Avancado),
            "fluente" => Ok(LanguageLevel::Fluente),
            "nativo" => Ok(LanguageLevel::Nativo),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Lowercase and strip the accents that appear in level names
fn fold_level(s: &str) -> String {
    s.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'á' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' => 'o',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// A named technical skill with a proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

/// A spoken language with a proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    pub level: LanguageLevel,
}

/// A social/profile link
///
/// `icon_name` is derived from `platform` only when the platform is set
/// through the edit operations; it is never re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon_name: String,
}

/// Rendering mode for the social link block, applied to all links at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialDisplayOptions {
    pub show_as_icons: bool,
}

impl Default for SocialDisplayOptions {
    fn default() -> Self {
        Self { show_as_icons: true }
    }
}

/// The aggregate root owning every résumé section
///
/// Sequences preserve insertion order, which is the display order. Entities
/// have no independent identity beyond their position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub soft_skills: Vec<String>,
    pub languages: Vec<Language>,
    // Sections added after the first release; older persisted payloads
    // may lack them, so restores synthesize the defaults.
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub social_display: SocialDisplayOptions,
}

impl CvData {
    /// Create the fixed default aggregate used at session start
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for the header, falling back to the placeholder
    pub fn display_name(&self) -> &str {
        if self.personal_info.name.is_empty() {
            "Seu Nome"
        } else {
            &self.personal_info.name
        }
    }
}
