//! Integration tests for the curriculo CLI stack
//!
//! These tests exercise the full cycle the CLI drives: edit operations over
//! the aggregate, persistence through the store, and both renderers reading
//! the same stored value.

use tempfile::TempDir;

use curriculo_edit::{
    add_experience, add_social_link, remove_experience, set_show_as_icons, update_experience,
    ExperiencePatch,
};
use curriculo_model::{visible_sections, CvData, CvTheme, Section};
use curriculo_pdf::Transpiler;
use curriculo_render::{render, PreviewOptions};
use curriculo_store::Store;

fn plain() -> PreviewOptions {
    PreviewOptions { color: false }
}

#[test]
fn test_current_experience_appears_in_both_views_until_removed() {
    let cv = CvData::new();
    let cv = add_experience(&cv);
    let cv = update_experience(
        &cv,
        0,
        ExperiencePatch {
            company: Some("Acme".to_string()),
            position: Some("Dev".to_string()),
            start_date: Some("2021-01-01".to_string()),
            end_date: Some(String::new()),
            description: Some("Built things".to_string()),
        },
    )
    .unwrap();

    let theme = CvTheme::default();
    let preview = render(&cv, &theme, &plain());
    let markup = Transpiler::transpile(&cv, &theme);

    // Both views show the section and the open-ended date
    assert!(preview.contains("Experiência Profissional"));
    assert!(markup.contains("Experiência Profissional"));
    assert!(preview.contains("jan. de 2021 - Atual"));
    assert!(markup.contains("jan. de 2021 - Atual"));

    // Removing the only entry hides the section from both views
    let cv = remove_experience(&cv, 0).unwrap();
    let preview = render(&cv, &theme, &plain());
    let markup = Transpiler::transpile(&cv, &theme);
    assert!(!preview.contains("Experiência Profissional"));
    assert!(!markup.contains("Experiência Profissional"));
}

#[test]
fn test_views_agree_on_section_visibility_through_the_store() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let cv = add_social_link(
        &CvData::new(),
        "GitHub".to_string(),
        "github.com/ana".to_string(),
    );
    store.save_data(&cv).unwrap();

    let restored = store.load_data().unwrap();
    assert_eq!(restored, cv);
    assert_eq!(visible_sections(&restored), vec![Section::SocialLinks]);

    let theme = CvTheme::default();
    let preview = render(&restored, &theme, &plain());
    let markup = Transpiler::transpile(&restored, &theme);
    assert!(preview.contains("[GitHub]"));
    assert!(markup.contains("#link(\"https://github.com/ana\")"));
}

#[test]
fn test_display_toggle_switches_pdf_block_without_touching_links() {
    let cv = add_social_link(
        &CvData::new(),
        "GitHub".to_string(),
        "https://github.com/ana".to_string(),
    );
    let theme = CvTheme::default();

    let icons_markup = Transpiler::transpile(&cv, &theme);
    assert!(!icons_markup.contains("GitHub: https://github.com/ana"));

    let toggled = set_show_as_icons(&cv, false);
    let list_markup = Transpiler::transpile(&toggled, &theme);
    assert!(list_markup.contains("GitHub: https://github.com/ana"));
    assert_eq!(toggled.social_links, cv.social_links);
}

#[test]
fn test_session_start_restore_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    // First session: defaults, then an edit, then a snapshot
    let cv = CvData::new();
    let mut cv = add_experience(&cv);
    cv.personal_info.name = "Maria".to_string();
    store.save_data(&cv).unwrap();

    // Next session starts from the snapshot, not the defaults
    let restored = store.load_data().unwrap_or_default();
    assert_eq!(restored.personal_info.name, "Maria");
    assert_eq!(restored.experience.len(), 1);

    // Reset clears the key; the session falls back to the fixed default
    store.reset_data().unwrap();
    let after_reset = store.load_data().unwrap_or_default();
    assert_eq!(after_reset, CvData::new());
}
