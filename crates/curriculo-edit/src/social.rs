//! Social link operations
//!
//! Two rules set this section apart from the others: URLs are normalized
//! exactly once, at the point of edit, and the icon name is recomputed from
//! the platform only when the platform itself changes. An unrecognized
//! platform value leaves the previous icon in place.

use curriculo_model::{CvData, SocialLink};

use crate::error::{EditError, Result};

/// Platform suggestion set with the icon each platform maps to
pub const PLATFORMS: &[(&str, &str)] = &[
    ("LinkedIn", "linkedin"),
    ("GitHub", "github"),
    ("Twitter", "twitter"),
    ("Instagram", "instagram"),
    ("Facebook", "facebook"),
    ("YouTube", "youtube"),
    ("Portfolio", "link"),
    ("Outro", "link"),
];

/// Icon identifier for a platform name, `None` when unrecognized
pub fn platform_icon(platform: &str) -> Option<&'static str> {
    PLATFORMS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, icon)| *icon)
}

/// Prefix `https://` unless the value already carries an http(s) scheme
///
/// Idempotent: normalizing an already-normalized value changes nothing.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Field-level update for one social link
#[derive(Debug, Clone, Default)]
pub struct SocialLinkPatch {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon_name: Option<String>,
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(EditError::IndexOutOfRange {
            section: "redes sociais",
            index,
            len,
        });
    }
    Ok(())
}

/// Append a social link, deriving the icon from the platform at creation
///
/// The URL is normalized here, so callers never store a bare host. A
/// platform outside the suggestion set gets an empty icon name.
pub fn add_social_link(cv: &CvData, platform: String, url: String) -> CvData {
    let icon_name = platform_icon(&platform).unwrap_or_default().to_string();
    let mut next = cv.clone();
    next.social_links.push(SocialLink {
        url: normalize_url(&url),
        platform,
        icon_name,
    });
    next
}

/// Patch the social link at `index`
///
/// Setting `platform` recomputes the icon from the lookup table; when the
/// new platform has no entry the icon keeps its prior value. Editing `url`
/// or `icon_name` directly never back-updates the platform.
pub fn update_social_link(cv: &CvData, index: usize, patch: SocialLinkPatch) -> Result<CvData> {
    check_index(index, cv.social_links.len())?;
    let mut next = cv.clone();
    let link = &mut next.social_links[index];
    if let Some(platform) = patch.platform {
        if let Some(icon) = platform_icon(&platform) {
            link.icon_name = icon.to_string();
        }
        link.platform = platform;
    }
    if let Some(url) = patch.url {
        link.url = normalize_url(&url);
    }
    if let Some(icon_name) = patch.icon_name {
        link.icon_name = icon_name;
    }
    Ok(next)
}

/// Remove the social link at `index`
pub fn remove_social_link(cv: &CvData, index: usize) -> Result<CvData> {
    check_index(index, cv.social_links.len())?;
    let mut next = cv.clone();
    next.social_links.remove(index);
    Ok(next)
}

/// Toggle the rendering mode for all social links at once
pub fn set_show_as_icons(cv: &CvData, show_as_icons: bool) -> CvData {
    let mut next = cv.clone();
    next.social_display.show_as_icons = show_as_icons;
    next
}
