//! Edit operations for the non-social sections
//!
//! The contract is the same for every sequence section: `add_*` appends a
//! default-valued entity, `update_*` replaces the named fields of the entity
//! at an index, `remove_*` splices the entity out and lets later entries
//! shift down. Each operation clones the aggregate and replaces exactly one
//! section of the clone.

use curriculo_model::{CvData, Education, Experience, Language, LanguageLevel, Skill, SkillLevel};

use crate::error::{EditError, Result};

fn check_index(section: &'static str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(EditError::IndexOutOfRange { section, index, len });
    }
    Ok(())
}

/// Field-level update for the personal info block; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct PersonalPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Replace the personal info section with a patched copy
pub fn update_personal(cv: &CvData, patch: PersonalPatch) -> CvData {
    let mut next = cv.clone();
    let info = &mut next.personal_info;
    if let Some(name) = patch.name {
        info.name = name;
    }
    if let Some(email) = patch.email {
        info.email = email;
    }
    if let Some(phone) = patch.phone {
        info.phone = phone;
    }
    if let Some(location) = patch.location {
        info.location = location;
    }
    next
}

/// Field-level update for one experience entry
#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// Append an empty experience entry
pub fn add_experience(cv: &CvData) -> CvData {
    let mut next = cv.clone();
    next.experience.push(Experience::default());
    next
}

/// Patch the experience entry at `index`
pub fn update_experience(cv: &CvData, index: usize, patch: ExperiencePatch) -> Result<CvData> {
    check_index("experiência", index, cv.experience.len())?;
    let mut next = cv.clone();
    let entry = &mut next.experience[index];
    if let Some(company) = patch.company {
        entry.company = company;
    }
    if let Some(position) = patch.position {
        entry.position = position;
    }
    if let Some(start_date) = patch.start_date {
        entry.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        entry.end_date = end_date;
    }
    if let Some(description) = patch.description {
        entry.description = description;
    }
    Ok(next)
}

/// Remove the experience entry at `index`
pub fn remove_experience(cv: &CvData, index: usize) -> Result<CvData> {
    check_index("experiência", index, cv.experience.len())?;
    let mut next = cv.clone();
    next.experience.remove(index);
    Ok(next)
}

/// Field-level update for one education entry
#[derive(Debug, Clone, Default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Append an empty education entry
pub fn add_education(cv: &CvData) -> CvData {
    let mut next = cv.clone();
    next.education.push(Education::default());
    next
}

/// Patch the education entry at `index`
pub fn update_education(cv: &CvData, index: usize, patch: EducationPatch) -> Result<CvData> {
    check_index("educação", index, cv.education.len())?;
    let mut next = cv.clone();
    let entry = &mut next.education[index];
    if let Some(institution) = patch.institution {
        entry.institution = institution;
    }
    if let Some(degree) = patch.degree {
        entry.degree = degree;
    }
    if let Some(start_date) = patch.start_date {
        entry.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        entry.end_date = end_date;
    }
    Ok(next)
}

/// Remove the education entry at `index`
pub fn remove_education(cv: &CvData, index: usize) -> Result<CvData> {
    check_index("educação", index, cv.education.len())?;
    let mut next = cv.clone();
    next.education.remove(index);
    Ok(next)
}

/// Field-level update for one skill entry
#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

/// Append an empty skill entry (level defaults to Básico)
pub fn add_skill(cv: &CvData) -> CvData {
    let mut next = cv.clone();
    next.skills.push(Skill::default());
    next
}

/// Patch the skill entry at `index`
pub fn update_skill(cv: &CvData, index: usize, patch: SkillPatch) -> Result<CvData> {
    check_index("habilidades", index, cv.skills.len())?;
    let mut next = cv.clone();
    let entry = &mut next.skills[index];
    if let Some(name) = patch.name {
        entry.name = name;
    }
    if let Some(level) = patch.level {
        entry.level = level;
    }
    Ok(next)
}

/// Remove the skill entry at `index`
pub fn remove_skill(cv: &CvData, index: usize) -> Result<CvData> {
    check_index("habilidades", index, cv.skills.len())?;
    let mut next = cv.clone();
    next.skills.remove(index);
    Ok(next)
}

/// Append an empty soft skill entry
///
/// Duplicates are permitted; soft skills are bare strings with position
/// as their only identity.
pub fn add_soft_skill(cv: &CvData) -> CvData {
    let mut next = cv.clone();
    next.soft_skills.push(String::new());
    next
}

/// Replace the soft skill at `index`
pub fn update_soft_skill(cv: &CvData, index: usize, value: String) -> Result<CvData> {
    check_index("soft skills", index, cv.soft_skills.len())?;
    let mut next = cv.clone();
    next.soft_skills[index] = value;
    Ok(next)
}

/// Remove the soft skill at `index`
pub fn remove_soft_skill(cv: &CvData, index: usize) -> Result<CvData> {
    check_index("soft skills", index, cv.soft_skills.len())?;
    let mut next = cv.clone();
    next.soft_skills.remove(index);
    Ok(next)
}

/// Field-level update for one language entry
#[derive(Debug, Clone, Default)]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub level: Option<LanguageLevel>,
}

/// Append an empty language entry (level defaults to Básico)
pub fn add_language(cv: &CvData) -> CvData {
    let mut next = cv.clone();
    next.languages.push(Language::default());
    next
}

/// Patch the language entry at `index`
pub fn update_language(cv: &CvData, index: usize, patch: LanguagePatch) -> Result<CvData> {
    check_index("idiomas", index, cv.languages.len())?;
    let mut next = cv.clone();
    let entry = &mut next.languages[index];
    if let Some(name) = patch.name {
        entry.name = name;
    }
    if let Some(level) = patch.level {
        entry.level = level;
    }
    Ok(next)
}

/// Remove the language entry at `index`
pub fn remove_language(cv: &CvData, index: usize) -> Result<CvData> {
    check_index("idiomas", index, cv.languages.len())?;
    let mut next = cv.clone();
    next.languages.remove(index);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cv() -> CvData {
        let mut cv = CvData::new();
        cv.experience.push(Experience {
            company: "Acme".to_string(),
            position: "Dev".to_string(),
            start_date: "2021-01-01".to_string(),
            end_date: String::new(),
            description: "Built things".to_string(),
        });
        cv.experience.push(Experience {
            company: "Globex".to_string(),
            position: "Tech Lead".to_string(),
            start_date: "2018-02-01".to_string(),
            end_date: "2020-12-01".to_string(),
            description: String::new(),
        });
        cv.skills.push(Skill {
            name: "Rust".to_string(),
            level: SkillLevel::Avancado,
        });
        cv.soft_skills.push("Comunicação".to_string());
        cv
    }

    #[test]
    fn test_add_then_remove_last_restores_original() {
        let cv = sample_cv();
        let appended = add_experience(&cv);
        assert_eq!(appended.experience.len(), 3);
        let restored = remove_experience(&appended, appended.experience.len() - 1).unwrap();
        assert_eq!(restored, cv);

        let appended = add_skill(&cv);
        let restored = remove_skill(&appended, appended.skills.len() - 1).unwrap();
        assert_eq!(restored, cv);

        let appended = add_soft_skill(&cv);
        let restored = remove_soft_skill(&appended, appended.soft_skills.len() - 1).unwrap();
        assert_eq!(restored, cv);
    }

    #[test]
    fn test_update_touches_only_the_patched_entity() {
        let cv = sample_cv();
        let next = update_experience(
            &cv,
            0,
            ExperiencePatch {
                position: Some("Senior Dev".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(next.experience[0].position, "Senior Dev");
        // Every other field of entity 0 unchanged
        assert_eq!(next.experience[0].company, cv.experience[0].company);
        assert_eq!(next.experience[0].start_date, cv.experience[0].start_date);
        // Sibling entity untouched, other sections untouched
        assert_eq!(next.experience[1], cv.experience[1]);
        assert_eq!(next.skills, cv.skills);
        assert_eq!(next.personal_info, cv.personal_info);
    }

    #[test]
    fn test_update_does_not_mutate_the_input() {
        let cv = sample_cv();
        let snapshot = cv.clone();
        let _ = update_experience(
            &cv,
            1,
            ExperiencePatch {
                company: Some("Initech".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(cv, snapshot);
    }

    #[test]
    fn test_remove_shifts_later_entries_down() {
        let cv = sample_cv();
        let next = remove_experience(&cv, 0).unwrap();
        assert_eq!(next.experience.len(), 1);
        assert_eq!(next.experience[0].company, "Globex");
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let cv = sample_cv();
        let err = update_experience(&cv, 5, ExperiencePatch::default()).unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                section: "experiência",
                index: 5,
                len: 2
            }
        );
        assert!(remove_language(&cv, 0).is_err());
    }

    #[test]
    fn test_update_personal_partial() {
        let cv = sample_cv();
        let next = update_personal(
            &cv,
            PersonalPatch {
                name: Some("Maria".to_string()),
                email: Some("maria@example.com".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(next.personal_info.name, "Maria");
        assert_eq!(next.personal_info.email, "maria@example.com");
        assert_eq!(next.personal_info.phone, cv.personal_info.phone);
    }

    #[test]
    fn test_update_language_level() {
        let mut cv = CvData::new();
        cv = add_language(&cv);
        assert_eq!(cv.languages[0].level, LanguageLevel::Basico);
        cv = update_language(
            &cv,
            0,
            LanguagePatch {
                name: Some("Inglês".to_string()),
                level: Some(LanguageLevel::Fluente),
            },
        )
        .unwrap();
        assert_eq!(cv.languages[0].name, "Inglês");
        assert_eq!(cv.languages[0].level, LanguageLevel::Fluente);
    }
}
