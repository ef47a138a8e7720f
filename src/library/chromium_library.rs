use std::fs;
use std::path::{Path, PathBuf};

use home_dir::HomeDirExt;
use serde::{Deserialize, Serialize};

use crate::error::{Edge2PdfError, Result};
use crate::types::{Bookmark, BookmarkNode};

use super::Library;

pub struct ChromiumLibrary;

impl Library for ChromiumLibrary {
    fn get_tree(&self, path: &Path) -> Result<BookmarkNode> {
        if !path.exists() {
            return Err(Edge2PdfError::BookmarksNotFound {
                path: path.to_path_buf(),
            });
        }

        let data = fs::read_to_string(path).map_err(|source| Edge2PdfError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let core: ChromiumBookmarkCore =
            serde_json::from_str(&data).map_err(|e| Edge2PdfError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(collect_tree(core))
    }
}

// Edge and other Chromium browsers always carry the bookmark-bar and
// other-bookmarks roots; the synced root only exists on signed-in profiles.
fn collect_tree(core: ChromiumBookmarkCore) -> BookmarkNode {
    let mut children: Vec<BookmarkNode> = Vec::new();

    children.extend(to_node(core.roots.bookmark_bar));
    children.extend(to_node(core.roots.other));

    if let Some(synced) = core.roots.synced {
        children.extend(to_node(synced));
    }

    BookmarkNode::Folder {
        name: String::new(),
        children,
    }
}

fn to_node(entry: ChromiumBookmark) -> Option<BookmarkNode> {
    if let Some(url) = entry.url {
        Some(BookmarkNode::Bookmark(Bookmark {
            title: entry.name,
            url,
        }))
    } else if let Some(children) = entry.children {
        Some(BookmarkNode::Folder {
            name: entry.name,
            children: children.into_iter().filter_map(to_node).collect(),
        })
    } else {
        // Neither a link nor a folder (e.g. a separator entry); drop it.
        None
    }
}

pub fn default_bookmarks_path() -> Result<PathBuf> {
    if cfg!(target_os = "windows") {
        let base = std::env::var("LOCALAPPDATA").map_err(|_| Edge2PdfError::Config {
            message: "LOCALAPPDATA is not set".to_string(),
        })?;

        Ok(PathBuf::from(base)
            .join("Microsoft")
            .join("Edge")
            .join("User Data")
            .join("Default")
            .join("Bookmarks"))
    } else if cfg!(target_os = "macos") {
        expand_home("~/Library/Application Support/Microsoft Edge/Default/Bookmarks")
    } else {
        expand_home("~/.config/microsoft-edge/Default/Bookmarks")
    }
}

fn expand_home(raw: &str) -> Result<PathBuf> {
    Path::new(raw)
        .expand_home()
        .map_err(|_| Edge2PdfError::Config {
            message: format!("cannot resolve home directory in \"{}\"", raw),
        })
}

#[derive(Serialize, Deserialize)]
struct ChromiumBookmarkCore {
    roots: ChromiumBookmarkRoots,
}

#[derive(Serialize, Deserialize)]
struct ChromiumBookmarkRoots {
    bookmark_bar: ChromiumBookmark,
    other: ChromiumBookmark,
    synced: Option<ChromiumBookmark>,
}

#[derive(Serialize, Deserialize)]
struct ChromiumBookmark {
    children: Option<Vec<ChromiumBookmark>>,
    url: Option<String>,
    name: String,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::error::Edge2PdfError;
    use crate::types::BookmarkNode;

    use super::{ChromiumLibrary, Library};

    const FIXTURE: &str = r#"{
        "roots": {
            "bookmark_bar": {
                "type": "folder",
                "name": "Favorites bar",
                "children": [
                    { "type": "url", "name": "Example", "url": "https://example.com/" },
                    {
                        "type": "folder",
                        "name": "Research",
                        "children": [
                            { "type": "url", "name": "A", "url": "https://a.test/" }
                        ]
                    }
                ]
            },
            "other": { "type": "folder", "name": "Other favorites", "children": [] }
        },
        "version": 1
    }"#;

    #[test]
    fn it_parses_the_store_into_a_tree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bookmarks");
        fs::write(&path, FIXTURE).unwrap();

        let tree = ChromiumLibrary.get_tree(&path).unwrap();

        let BookmarkNode::Folder { name, children } = tree else {
            panic!("root should be a folder");
        };
        assert_eq!(name, "");
        assert_eq!(children.len(), 2);

        let BookmarkNode::Folder { name, children } = &children[0] else {
            panic!("bookmark bar should be a folder");
        };
        assert_eq!(name, "Favorites bar");
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], BookmarkNode::Bookmark(b) if b.url == "https://example.com/"));
        assert!(matches!(&children[1], BookmarkNode::Folder { name, .. } if name == "Research"));
    }

    #[test]
    fn it_fails_when_the_store_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bookmarks");

        let result = ChromiumLibrary.get_tree(&path);

        assert!(matches!(
            result,
            Err(Edge2PdfError::BookmarksNotFound { .. })
        ));
    }

    #[test]
    fn it_fails_on_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bookmarks");
        fs::write(&path, "{ not json").unwrap();

        let result = ChromiumLibrary.get_tree(&path);

        assert!(matches!(result, Err(Edge2PdfError::Parse { .. })));
    }

    #[test]
    fn it_fails_when_the_expected_roots_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bookmarks");
        fs::write(&path, r#"{ "roots": {} }"#).unwrap();

        let result = ChromiumLibrary.get_tree(&path);

        assert!(matches!(result, Err(Edge2PdfError::Parse { .. })));
    }
}
