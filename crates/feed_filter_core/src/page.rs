use serde::Serialize;
use url::Url;

/// Feed variant implied by the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Subscriptions,
    Channel,
    Shorts,
    Watch,
    #[default]
    Other,
}

impl PageKind {
    /// Classify a path such as `/watch` or `/@channel/videos`.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/feed/subscriptions") {
            PageKind::Subscriptions
        } else if path.starts_with("/@") {
            PageKind::Channel
        } else if path.starts_with("/shorts") {
            PageKind::Shorts
        } else if path.starts_with("/watch") {
            PageKind::Watch
        } else {
            PageKind::Other
        }
    }

    /// Classify a full URL, or a bare path when `location` is not absolute.
    pub fn from_location(location: &str) -> Self {
        Self::from_path(&path_of(location))
    }

    /// Pages whose feeds are never filtered.
    pub fn is_excluded(self) -> bool {
        matches!(self, PageKind::Subscriptions | PageKind::Channel)
    }
}

/// Path component of an absolute URL; anything unparseable is taken as a path.
pub fn path_of(location: &str) -> String {
    let trimmed = location.trim();
    match Url::parse(trimmed) {
        Ok(url) => url.path().to_string(),
        Err(_) => trimmed.to_string(),
    }
}
