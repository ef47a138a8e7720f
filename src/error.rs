use std::path::PathBuf;

/// Top-level error type for all edge2pdf operations.
///
/// Per-URL failures (`Navigation`, `Render`) are recovered by the pipeline;
/// everything else aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Edge2PdfError {
    #[error("bookmarks file not found: {}", .path.display())]
    BookmarksNotFound { path: PathBuf },

    #[error("cannot parse bookmarks file \"{}\": {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("folder \"{name}\" not found in bookmarks")]
    FolderNotFound { name: String },

    #[error("browser error: {message}")]
    Browser { message: String },

    #[error("navigation failed for {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("print to PDF failed for {url}: {message}")]
    Render { url: String, message: String },

    #[error("merge error: {0}")]
    Merge(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error at \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Edge2PdfError>;
