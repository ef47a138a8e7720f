use std::path::Path;

use crate::error::Result;
use crate::types::BookmarkNode;

pub mod chromium_library;

pub trait Library {
    fn get_tree(&self, path: &Path) -> Result<BookmarkNode>;
}
