//! Converts a folder of Microsoft Edge bookmarks into a single merged PDF:
//! each bookmarked page is rendered by a headless browser, printed to PDF,
//! and the results are concatenated in the folder's order.

pub mod api;
pub mod config;
pub mod converter;
pub mod error;
pub mod library;
pub mod locator;
pub mod merger;
pub mod pipeline;
pub mod types;
pub mod urls;

pub use converter::ConvertOptions;
pub use error::Edge2PdfError;
pub use pipeline::{convert_and_merge, parse_folder};
pub use types::{Bookmark, BookmarkNode, ConversionReport, ConversionResult, ConversionStatus};
