use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub(super) bookmarks_file: Option<String>,
    pub(super) timeout_seconds: u64,
    pub(super) page_load_delay_seconds: u64,
    pub(super) headless: bool,
}

impl AppConfig {
    pub fn new_default() -> AppConfig {
        AppConfig {
            bookmarks_file: None,
            timeout_seconds: 30,
            page_load_delay_seconds: 2,
            headless: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::new_default()
    }
}
