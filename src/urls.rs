use log::warn;
use url::Url;

use crate::types::Bookmark;

/// Keeps entries whose URL the browser can actually fetch, preserving order.
/// Bad entries are skipped with a warning instead of aborting the batch.
pub fn extract_urls(entries: &[Bookmark]) -> Vec<Bookmark> {
    entries
        .iter()
        .filter(|entry| {
            if is_web_url(&entry.url) {
                true
            } else {
                warn!(
                    "Skipping bookmark \"{}\": not a fetchable web URL ({})",
                    entry.title, entry.url
                );
                false
            }
        })
        .cloned()
        .collect()
}

pub fn is_web_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
