//! curriculo-store - Local persistence for the CV and theme
//!
//! Snapshots the `CvData` aggregate and the `CvTheme` to two fixed keys in
//! a local store directory, one JSON file per key. The two keys are written
//! independently with no cross-key atomicity; both are idempotently
//! overwritten on the next save, so a crash between writes only costs the
//! unsaved half.
//!
//! Loads are fail-open: a missing or unreadable key yields `None` with a
//! warning, never an error, and the caller keeps its current in-memory
//! value.

mod error;

pub use error::{Result, StoreError};

use std::fs;
use std::path::{Path, PathBuf};

use curriculo_model::{CvData, CvTheme};

/// Storage key for the serialized CV aggregate
pub const DATA_KEY: &str = "cv-data";

/// Storage key for the serialized theme
pub const THEME_KEY: &str = "cv-theme";

/// File-backed key-value store rooted at a directory
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory backing this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Persist the CV aggregate under the `cv-data` key
    pub fn save_data(&self, cv: &CvData) -> Result<()> {
        self.write_key(DATA_KEY, cv)
    }

    /// Persist the theme under the `cv-theme` key
    pub fn save_theme(&self, theme: &CvTheme) -> Result<()> {
        self.write_key(THEME_KEY, theme)
    }

    /// Load the persisted CV aggregate, if present and readable
    ///
    /// Older payloads without the social sections come back fully
    /// populated with their defaults.
    pub fn load_data(&self) -> Option<CvData> {
        self.read_key(DATA_KEY)
    }

    /// Load the persisted theme, if present and readable
    pub fn load_theme(&self) -> Option<CvTheme> {
        self.read_key(THEME_KEY)
    }

    /// Clear only the CV data key; the theme key is untouched
    pub fn reset_data(&self) -> Result<()> {
        self.remove_key(DATA_KEY)
    }

    /// Clear only the theme key; the CV data key is untouched
    pub fn reset_theme(&self) -> Result<()> {
        self.remove_key(THEME_KEY)
    }

    fn write_key<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json)?;
        tracing::debug!(key, "saved store key");
        Ok(())
    }

    fn read_key<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "could not read store key, keeping current value");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding corrupt store key");
                None
            }
        }
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculo_model::{Experience, SocialLink};

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    fn sample_cv() -> CvData {
        let mut cv = CvData::new();
        cv.personal_info.name = "Maria".to_string();
        cv.experience.push(Experience {
            company: "Acme".to_string(),
            position: "Dev".to_string(),
            start_date: "2021-01-01".to_string(),
            end_date: String::new(),
            description: "Built things".to_string(),
        });
        cv.social_links.push(SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/maria".to_string(),
            icon_name: "github".to_string(),
        });
        cv
    }

    #[test]
    fn test_data_roundtrip_is_deep_equal() {
        let (_dir, store) = temp_store();
        let cv = sample_cv();
        store.save_data(&cv).unwrap();
        assert_eq!(store.load_data().unwrap(), cv);
    }

    #[test]
    fn test_theme_roundtrip() {
        let (_dir, store) = temp_store();
        let theme = CvTheme {
            primary: "#10b981".to_string(),
            text: "#1f2937".to_string(),
            background: "#ffffff".to_string(),
        };
        store.save_theme(&theme).unwrap();
        assert_eq!(store.load_theme().unwrap(), theme);
    }

    #[test]
    fn test_open_reports_its_root() {
        let (dir, store) = temp_store();
        assert_eq!(store.root(), dir.path());
    }

    #[test]
    fn test_missing_keys_load_as_none() {
        let (_dir, store) = temp_store();
        assert!(store.load_data().is_none());
        assert!(store.load_theme().is_none());
    }

    #[test]
    fn test_corrupt_key_is_discarded() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join("cv-data.json"), "{not json").unwrap();
        assert!(store.load_data().is_none());
    }

    #[test]
    fn test_legacy_payload_restores_fully_populated() {
        let (dir, store) = temp_store();
        // Payload predating the socialLinks/socialDisplay sections
        let legacy = r#"{
            "personalInfo": {"name":"Ana","email":"","phone":"","location":""},
            "experience": [],
            "education": [],
            "skills": [],
            "softSkills": [],
            "languages": []
        }"#;
        fs::write(dir.path().join("cv-data.json"), legacy).unwrap();
        let cv = store.load_data().unwrap();
        assert!(cv.social_links.is_empty());
        assert!(cv.social_display.show_as_icons);
    }

    #[test]
    fn test_reset_data_leaves_theme_alone() {
        let (_dir, store) = temp_store();
        store.save_data(&sample_cv()).unwrap();
        store.save_theme(&CvTheme::default()).unwrap();

        store.reset_data().unwrap();
        assert!(store.load_data().is_none());
        assert!(store.load_theme().is_some());
    }

    #[test]
    fn test_reset_theme_leaves_data_alone() {
        let (_dir, store) = temp_store();
        store.save_data(&sample_cv()).unwrap();
        store.save_theme(&CvTheme::default()).unwrap();

        store.reset_theme().unwrap();
        assert!(store.load_theme().is_none());
        assert!(store.load_data().is_some());
    }

    #[test]
    fn test_reset_of_empty_store_is_a_no_op() {
        let (_dir, store) = temp_store();
        store.reset_data().unwrap();
        store.reset_theme().unwrap();
    }

    #[test]
    fn test_saves_are_idempotent_overwrites() {
        let (_dir, store) = temp_store();
        let mut cv = sample_cv();
        store.save_data(&cv).unwrap();
        cv.personal_info.name = "Maria Silva".to_string();
        store.save_data(&cv).unwrap();
        assert_eq!(store.load_data().unwrap().personal_info.name, "Maria Silva");
    }
}
