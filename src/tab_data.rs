/// Data structures exchanged with the browser's tabs API
use serde::{Deserialize, Serialize};

/// Information about a browser tab, as reported by `tabs.query`
///
/// The host omits `url` when the extension lacks the `tabs` permission.
/// Fields this crate does not read are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl TabInfo {
    pub fn with_url(url: &str) -> TabInfo {
        TabInfo {
            url: Some(url.to_string()),
            ..TabInfo::default()
        }
    }
}

/// Options object passed to `tabs.query`
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    pub current_window: bool,
}

impl TabQuery {
    /// Restrict results to the focused window
    pub fn current_window() -> TabQuery {
        TabQuery {
            current_window: true,
        }
    }
}
