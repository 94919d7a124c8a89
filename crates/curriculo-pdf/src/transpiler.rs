//! CV to Typst markup transpiler
//!
//! Converts a (CvData, CvTheme) pair into Typst markup with a fixed
//! single-page layout: header block, then experience, education, skills,
//! soft skills and languages, in that order. Section visibility uses the
//! same predicate as the preview renderer, so the two views always agree
//! on which sections appear.
//!
//! The page background stays white regardless of `theme.background`, so the
//! printed result is consistent; the background color only tints the
//! on-screen preview.

use curriculo_model::{
    format_date_range, hex_to_rgb, CvData, CvTheme, Education, Experience, Section,
};

/// Transpiler for converting a CV to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a CV with a theme to Typst markup
    pub fn transpile(cv: &CvData, theme: &CvTheme) -> String {
        let primary = color(&theme.primary);
        let text = color(&theme.text);

        let mut output = String::new();
        output.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(&format!("Currículo - {}", cv.display_name()))
        ));
        output.push_str("#set page(paper: \"a4\", margin: (x: 2cm, y: 2cm))\n");
        output.push_str(&format!("#set text(size: 10pt, fill: {})\n\n", text));

        Self::transpile_header(cv, &primary, &mut output);

        if Section::Experience.is_visible(cv) {
            Self::section_title(Section::Experience, &primary, &mut output);
            for exp in &cv.experience {
                Self::transpile_experience(exp, &primary, &mut output);
            }
        }

        if Section::Education.is_visible(cv) {
            Self::section_title(Section::Education, &primary, &mut output);
            for edu in &cv.education {
                Self::transpile_education(edu, &primary, &mut output);
            }
        }

        if Section::Skills.is_visible(cv) {
            Self::section_title(Section::Skills, &primary, &mut output);
            for skill in &cv.skills {
                output.push_str(&format!(
                    "#box(stroke: 0.75pt + black, inset: 4pt, radius: 2pt)[#text(size: 9pt, weight: \"bold\", fill: {})[{}] #text(size: 8pt)[Nível: {}]]\n",
                    primary,
                    escape_text(&skill.name),
                    skill.level
                ));
                output.push_str("#h(6pt)\n");
            }
            output.push('\n');
        }

        if Section::SoftSkills.is_visible(cv) {
            Self::section_title(Section::SoftSkills, &primary, &mut output);
            for soft in &cv.soft_skills {
                output.push_str(&format!(
                    "#box(stroke: 0.75pt + black, inset: 4pt, radius: 2pt)[#text(size: 9pt, weight: \"bold\", fill: {})[{}]]\n#h(6pt)\n",
                    primary,
                    escape_text(soft)
                ));
            }
            output.push('\n');
        }

        if Section::Languages.is_visible(cv) {
            Self::section_title(Section::Languages, &primary, &mut output);
            for lang in &cv.languages {
                output.push_str(&format!(
                    "#text(size: 9pt, weight: \"bold\")[{}]#h(1fr)#text(size: 9pt, weight: \"bold\", fill: {})[{}]\\\n",
                    escape_text(&lang.name),
                    primary,
                    lang.level
                ));
            }
            output.push('\n');
        }

        output
    }

    fn transpile_header(cv: &CvData, primary: &str, output: &mut String) {
        output.push_str(&format!(
            "#text(size: 22pt, weight: \"bold\", fill: {})[{}]\n\n",
            primary,
            escape_text(cv.display_name())
        ));

        let info = &cv.personal_info;
        let contacts: Vec<String> = [&info.email, &info.phone, &info.location]
            .into_iter()
            .filter(|v| !v.is_empty())
            .map(|v| escape_text(v))
            .collect();
        if !contacts.is_empty() {
            output.push_str(&format!(
                "#text(size: 9pt, weight: \"bold\")[{}]\n\n",
                contacts.join(" #h(12pt) ")
            ));
        }

        Self::transpile_social_links(cv, primary, output);

        output.push_str(&format!(
            "#line(length: 100%, stroke: 0.75pt + {})\n\n",
            primary
        ));
    }

    /// Social link block, honoring the uniform display toggle
    fn transpile_social_links(cv: &CvData, primary: &str, output: &mut String) {
        if !Section::SocialLinks.is_visible(cv) {
            return;
        }

        if cv.social_display.show_as_icons {
            // Compact chips carrying only the platform name as link label
            for link in &cv.social_links {
                output.push_str(&format!(
                    "#box(stroke: 0.5pt + {}, inset: 4pt, radius: 2pt)[#link(\"{}\")[#text(size: 9pt, weight: \"bold\", fill: {})[{}]]]\n#h(5pt)\n",
                    primary,
                    escape_string(&link.url),
                    primary,
                    escape_text(&link.platform)
                ));
            }
            output.push('\n');
        } else {
            // One line per link: platform: url
            for link in &cv.social_links {
                output.push_str(&format!(
                    "#link(\"{}\")[#text(size: 9pt, weight: \"bold\", fill: {})[{}: {}]]\\\n",
                    escape_string(&link.url),
                    primary,
                    escape_text(&link.platform),
                    escape_text(&link.url)
                ));
            }
            output.push('\n');
        }
    }

    fn section_title(section: Section, primary: &str, output: &mut String) {
        output.push_str(&format!(
            "#v(6pt)\n#text(size: 14pt, weight: \"bold\", fill: {})[{}]\n#line(length: 100%, stroke: 0.5pt + {})\n\n",
            primary,
            escape_text(section.title()),
            primary
        ));
    }

    fn transpile_experience(exp: &Experience, primary: &str, output: &mut String) {
        output.push_str(&format!(
            "#text(size: 11pt, weight: \"bold\")[{}]",
            escape_text(&exp.position)
        ));
        let range = format_date_range(&exp.start_date, &exp.end_date);
        if !range.is_empty() {
            output.push_str(&format!(
                "#h(1fr)#text(size: 9pt, fill: {})[{}]",
                primary,
                escape_text(&range)
            ));
        }
        output.push_str("\\\n");
        output.push_str(&format!(
            "#text(size: 10pt, weight: \"bold\")[{}]\\\n",
            escape_text(&exp.company)
        ));
        if !exp.description.is_empty() {
            output.push_str(&format!(
                "#text(size: 9pt)[{}]\\\n",
                escape_text(&exp.description)
            ));
        }
        output.push_str("#v(4pt)\n");
    }

    fn transpile_education(edu: &Education, primary: &str, output: &mut String) {
        output.push_str(&format!(
            "#text(size: 11pt, weight: \"bold\")[{}]",
            escape_text(&edu.degree)
        ));
        let range = format_date_range(&edu.start_date, &edu.end_date);
        if !range.is_empty() {
            output.push_str(&format!(
                "#h(1fr)#text(size: 9pt, fill: {})[{}]",
                primary,
                escape_text(&range)
            ));
        }
        output.push_str("\\\n");
        output.push_str(&format!(
            "#text(size: 10pt, weight: \"bold\")[{}]\\\n#v(4pt)\n",
            escape_text(&edu.institution)
        ));
    }
}

/// Render a theme hex color as a Typst rgb() expression
///
/// Goes through the shared channel parser so a malformed hex string can
/// never break compilation.
fn color(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    format!("rgb({}, {}, {})", r, g, b)
}

/// Escape special characters in strings for Typst string literals
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape characters with markup meaning in Typst content
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '#' | '*' | '_' | '[' | ']' | '@' | '$' | '<' | '>' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculo_model::{Language, LanguageLevel, Skill, SkillLevel, SocialLink};

    fn cv_with_experience() -> CvData {
        let mut cv = CvData::new();
        cv.personal_info.name = "Maria Silva".to_string();
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
    fn test_transpile_sets_document_title() {
        let markup = Transpiler::transpile(&cv_with_experience(), &CvTheme::default());
        assert!(markup.contains("#set document(title: \"Currículo - Maria Silva\")"));
        assert!(markup.contains("paper: \"a4\""));
    }

    #[test]
    fn test_page_background_stays_white() {
        let mut theme = CvTheme::default();
        theme.background = "#f0f6ff".to_string();
        let markup = Transpiler::transpile(&cv_with_experience(), &theme);
        assert!(markup.contains("#set page(paper: \"a4\", margin: (x: 2cm, y: 2cm))"));
        // The background color is never applied to the page
        assert!(!markup.contains("rgb(240, 246, 255)"));
    }

    #[test]
    fn test_current_position_renders_atual() {
        let markup = Transpiler::transpile(&cv_with_experience(), &CvTheme::default());
        assert!(markup.contains("Experiência Profissional"));
        assert!(markup.contains("jan. de 2021 - Atual"));
        assert!(markup.contains("Built things"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let markup = Transpiler::transpile(&cv_with_experience(), &CvTheme::default());
        assert!(!markup.contains("Educação"));
        assert!(!markup.contains("Idiomas"));
        assert!(!markup.contains("Soft Skills"));
    }

    #[test]
    fn test_removing_the_entry_hides_the_section() {
        let mut cv = cv_with_experience();
        cv.experience.clear();
        let markup = Transpiler::transpile(&cv, &CvTheme::default());
        assert!(!markup.contains("Experiência Profissional"));
    }

    #[test]
    fn test_theme_primary_applied_to_headings() {
        let markup = Transpiler::transpile(&cv_with_experience(), &CvTheme::default());
        // #2563eb
        assert!(markup.contains("rgb(37, 99, 235)"));
    }

    #[test]
    fn test_skills_render_level_label() {
        let mut cv = CvData::new();
        cv.skills.push(Skill {
            name: "Rust".to_string(),
            level: SkillLevel::Avancado,
        });
        let markup = Transpiler::transpile(&cv, &CvTheme::default());
        assert!(markup.contains("Ferramentas e Habilidades"));
        assert!(markup.contains("Nível: Avançado"));
    }

    #[test]
    fn test_languages_render_name_and_level() {
        let mut cv = CvData::new();
        cv.languages.push(Language {
            name: "Inglês".to_string(),
            level: LanguageLevel::Fluente,
        });
        let markup = Transpiler::transpile(&cv, &CvTheme::default());
        assert!(markup.contains("Idiomas"));
        assert!(markup.contains("Fluente"));
    }

    #[test]
    fn test_social_icons_mode_labels_with_platform_only() {
        let mut cv = CvData::new();
        cv.social_links.push(SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/ana".to_string(),
            icon_name: "github".to_string(),
        });
        let markup = Transpiler::transpile(&cv, &CvTheme::default());
        assert!(markup.contains("#link(\"https://github.com/ana\")"));
        assert!(!markup.contains("GitHub: https://github.com/ana"));
    }

    #[test]
    fn test_social_list_mode_renders_platform_and_url() {
        let mut cv = CvData::new();
        cv.social_display.show_as_icons = false;
        cv.social_links.push(SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/ana".to_string(),
            icon_name: "github".to_string(),
        });
        let markup = Transpiler::transpile(&cv, &CvTheme::default());
        assert!(markup.contains("GitHub: https://github.com/ana"));
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_text_markup_characters() {
        assert_eq!(escape_text("C# *dev*"), "C\\# \\*dev\\*");
        assert_eq!(escape_text("a@b [x]"), "a\\@b \\[x\\]");
    }
}
