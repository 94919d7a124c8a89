//! Text layout of the preview
//!
//! Sections appear in the same fixed order as the PDF: header, experience,
//! education, skills, soft skills, languages; social links live inside the
//! header block. Empty sections are omitted, and a fully blank aggregate
//! renders a single placeholder block instead of the normal layout.

use curriculo_model::{format_date_range, is_blank, CvData, CvTheme, Section};

use crate::palette::Palette;

const FRAME: &str =
    "────────────────────────────────────────────────────────────────";

/// Rendering options for the preview
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Apply theme colors as ANSI escapes; disable for plain output
    pub color: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Render the preview of a CV with a theme applied
pub fn render(cv: &CvData, theme: &CvTheme, options: &PreviewOptions) -> String {
    let palette = Palette::new(theme, options.color);
    let mut out = String::new();

    if is_blank(cv) {
        out.push_str(&palette.accent(FRAME));
        out.push('\n');
        out.push_str(&palette.strong("  Seu currículo aparecerá aqui"));
        out.push('\n');
        out.push_str(&palette.body(
            "  Preencha seus dados para ver a pré-visualização.",
        ));
        out.push('\n');
        out.push_str(&palette.accent(FRAME));
        out.push('\n');
        return out;
    }

    render_header(cv, &palette, &mut out);

    if Section::Experience.is_visible(cv) {
        render_section_title(Section::Experience, &palette, &mut out);
        for exp in &cv.experience {
            let range = format_date_range(&exp.start_date, &exp.end_date);
            out.push_str(&format!(
                "  {} — {}",
                palette.strong(&exp.position),
                palette.body(&exp.company)
            ));
            if !range.is_empty() {
                out.push_str(&format!("  ({})", palette.accent(&range)));
            }
            out.push('\n');
            if !exp.description.is_empty() {
                out.push_str(&format!("    {}\n", palette.body(&exp.description)));
            }
        }
        out.push('\n');
    }

    if Section::Education.is_visible(cv) {
        render_section_title(Section::Education, &palette, &mut out);
        for edu in &cv.education {
            let range = format_date_range(&edu.start_date, &edu.end_date);
            out.push_str(&format!(
                "  {} — {}",
                palette.strong(&edu.degree),
                palette.body(&edu.institution)
            ));
            if !range.is_empty() {
                out.push_str(&format!("  ({})", palette.accent(&range)));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    if Section::Skills.is_visible(cv) {
        render_section_title(Section::Skills, &palette, &mut out);
        for skill in &cv.skills {
            out.push_str(&format!(
                "  {}  {}\n",
                palette.body(&skill.name),
                palette.accent(&format!("[{}]", skill.level))
            ));
        }
        out.push('\n');
    }

    if Section::SoftSkills.is_visible(cv) {
        render_section_title(Section::SoftSkills, &palette, &mut out);
        let chips: Vec<String> = cv
            .soft_skills
            .iter()
            .map(|s| palette.accent(&format!("({})", s)))
            .collect();
        out.push_str(&format!("  {}\n\n", chips.join(" ")));
    }

    if Section::Languages.is_visible(cv) {
        render_section_title(Section::Languages, &palette, &mut out);
        for lang in &cv.languages {
            out.push_str(&format!(
                "  {}  {}\n",
                palette.body(&lang.name),
                palette.accent(&lang.level.to_string())
            ));
        }
        out.push('\n');
    }

    out
}

fn render_header(cv: &CvData, palette: &Palette, out: &mut String) {
    out.push_str(&palette.accent(FRAME));
    out.push('\n');
    out.push_str(&format!("  {}\n", palette.heading(cv.display_name())));

    let info = &cv.personal_info;
    let contacts: Vec<&str> = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(|v| v.as_str())
        .collect();
    if !contacts.is_empty() {
        out.push_str(&format!("  {}\n", palette.body(&contacts.join(" · "))));
    }

    if Section::SocialLinks.is_visible(cv) {
        if cv.social_display.show_as_icons {
            // Compact chips labelled by platform
            let chips: Vec<String> = cv
                .social_links
                .iter()
                .map(|l| palette.accent(&format!("[{}]", l.platform)))
                .collect();
            out.push_str(&format!("  {}\n", chips.join(" ")));
        } else {
            for link in &cv.social_links {
                out.push_str(&format!(
                    "  {}\n",
                    palette.accent(&format!("{}: {}", link.platform, link.url))
                ));
            }
        }
    }

    out.push_str(&palette.accent(FRAME));
    out.push_str("\n\n");
}

fn render_section_title(section: Section, palette: &Palette, out: &mut String) {
    out.push_str(&palette.heading(section.title()));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculo_model::{Experience, SocialLink};

    fn plain() -> PreviewOptions {
        PreviewOptions { color: false }
    }

    fn cv_with_experience() -> CvData {
        let mut cv = CvData::new();
        cv.experience.push(Experience {
            company: "Acme".to_string(),
            position: "Dev".to_string(),
            start_date: "2021-01-01".to_string(),
            end_date: String::new(),
            description: "Built things".to_string(),
        });
        cv
    }

    #[test]
    fn test_blank_cv_renders_placeholder() {
        let out = render(&CvData::new(), &CvTheme::default(), &plain());
        assert!(out.contains("Seu currículo aparecerá aqui"));
        assert!(!out.contains("Experiência Profissional"));
    }

    #[test]
    fn test_current_experience_renders_atual() {
        let out = render(&cv_with_experience(), &CvTheme::default(), &plain());
        assert!(out.contains("Experiência Profissional"));
        assert!(out.contains("Dev — Acme"));
        assert!(out.contains("jan. de 2021 - Atual"));
        assert!(out.contains("Built things"));
    }

    #[test]
    fn test_removing_last_entry_hides_the_section() {
        let mut cv = cv_with_experience();
        cv.experience.clear();
        cv.personal_info.name = "Ana".to_string();
        let out = render(&cv, &CvTheme::default(), &plain());
        assert!(!out.contains("Experiência Profissional"));
    }

    #[test]
    fn test_header_falls_back_to_placeholder_name() {
        let mut cv = cv_with_experience();
        cv.personal_info.email = "dev@acme.com".to_string();
        let out = render(&cv, &CvTheme::default(), &plain());
        assert!(out.contains("Seu Nome"));
        assert!(out.contains("dev@acme.com"));
    }

    #[test]
    fn test_social_links_icon_mode_and_list_mode() {
        let mut cv = CvData::new();
        cv.personal_info.name = "Ana".to_string();
        cv.social_links.push(SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/ana".to_string(),
            icon_name: "github".to_string(),
        });

        let icons = render(&cv, &CvTheme::default(), &plain());
        assert!(icons.contains("[GitHub]"));
        assert!(!icons.contains("GitHub: https://github.com/ana"));

        cv.social_display.show_as_icons = false;
        let list = render(&cv, &CvTheme::default(), &plain());
        assert!(list.contains("GitHub: https://github.com/ana"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let cv = cv_with_experience();
        let theme = CvTheme::default();
        let options = PreviewOptions::default();
        assert_eq!(render(&cv, &theme, &options), render(&cv, &theme, &options));
    }
}
