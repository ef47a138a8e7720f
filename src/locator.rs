use crate::error::{Edge2PdfError, Result};
use crate::types::{Bookmark, BookmarkNode};

/// Direct bookmark children of the first folder named `name`, in store order.
/// Bookmarks inside subfolders of the match are not included.
pub fn folder_bookmarks(tree: &BookmarkNode, name: &str) -> Result<Vec<Bookmark>> {
    let children = find_folder(tree, name).ok_or_else(|| Edge2PdfError::FolderNotFound {
        name: name.to_string(),
    })?;

    Ok(children
        .iter()
        .filter_map(|child| match child {
            BookmarkNode::Bookmark(bookmark) => Some(bookmark.clone()),
            BookmarkNode::Folder { .. } => None,
        })
        .collect())
}

// Pre-order: a folder matches before its children, children left to right.
fn find_folder<'a>(node: &'a BookmarkNode, name: &str) -> Option<&'a [BookmarkNode]> {
    match node {
        BookmarkNode::Bookmark(_) => None,
        BookmarkNode::Folder {
            name: folder_name,
            children,
        } => {
            if folder_name == name {
                Some(children)
            } else {
                children.iter().find_map(|child| find_folder(child, name))
            }
        }
    }
}

/// Every folder in the store as a `/`-joined path, in pre-order.
pub fn list_folders(tree: &BookmarkNode) -> Vec<String> {
    let mut folders = Vec::new();
    collect_folder_paths(tree, "", &mut folders);
    folders
}

fn collect_folder_paths(node: &BookmarkNode, prefix: &str, folders: &mut Vec<String>) {
    if let BookmarkNode::Folder { name, children } = node {
        // The root folder is unnamed and is not listed itself.
        let path = if name.is_empty() {
            prefix.to_string()
        } else if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };

        if !name.is_empty() {
            folders.push(path.clone());
        }

        for child in children {
            collect_folder_paths(child, &path, folders);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Edge2PdfError;
    use crate::types::{Bookmark, BookmarkNode};

    use super::{folder_bookmarks, list_folders};

    fn folder(name: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode::Folder {
            name: name.to_string(),
            children,
        }
    }

    fn link(title: &str, url: &str) -> BookmarkNode {
        BookmarkNode::Bookmark(Bookmark {
            title: title.to_string(),
            url: url.to_string(),
        })
    }

    #[test]
    fn it_returns_direct_children_in_order() {
        let tree = folder(
            "",
            vec![folder(
                "Research",
                vec![
                    link("A", "https://a.test/"),
                    link("B", "https://b.test/"),
                    link("C", "https://c.test/"),
                ],
            )],
        );

        let bookmarks = folder_bookmarks(&tree, "Research").unwrap();

        let titles: Vec<&str> = bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn it_does_not_descend_into_subfolders_of_the_match() {
        let tree = folder(
            "",
            vec![folder(
                "Research",
                vec![
                    link("A", "https://a.test/"),
                    folder("Archive", vec![link("Old", "https://old.test/")]),
                    link("B", "https://b.test/"),
                ],
            )],
        );

        let bookmarks = folder_bookmarks(&tree, "Research").unwrap();

        let titles: Vec<&str> = bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn it_picks_the_first_preorder_match_for_duplicate_names() {
        let tree = folder(
            "",
            vec![
                folder(
                    "Bar",
                    vec![folder("Dup", vec![link("First", "https://first.test/")])],
                ),
                folder("Dup", vec![link("Second", "https://second.test/")]),
            ],
        );

        let bookmarks = folder_bookmarks(&tree, "Dup").unwrap();

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].title, "First");
    }

    #[test]
    fn it_returns_an_empty_list_for_a_folder_without_bookmarks() {
        let tree = folder("", vec![folder("Empty", vec![])]);

        let bookmarks = folder_bookmarks(&tree, "Empty").unwrap();

        assert!(bookmarks.is_empty());
    }

    #[test]
    fn it_fails_when_no_folder_matches() {
        let tree = folder("", vec![folder("Research", vec![])]);

        let result = folder_bookmarks(&tree, "Nonexistent");

        assert!(matches!(
            result,
            Err(Edge2PdfError::FolderNotFound { name }) if name == "Nonexistent"
        ));
    }

    #[test]
    fn it_lists_folder_paths_in_preorder() {
        let tree = folder(
            "",
            vec![
                folder(
                    "Bar",
                    vec![
                        folder("Research", vec![link("A", "https://a.test/")]),
                        folder("News", vec![]),
                    ],
                ),
                folder("Other", vec![]),
            ],
        );

        assert_eq!(
            list_folders(&tree),
            vec!["Bar", "Bar/Research", "Bar/News", "Other"]
        );
    }
}
