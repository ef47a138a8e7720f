use std::path::Path;

use log::{info, warn};
use tempfile::TempDir;

use crate::converter::{ConvertOptions, PdfConverter};
use crate::error::{Edge2PdfError, Result};
use crate::library::chromium_library::ChromiumLibrary;
use crate::library::Library;
use crate::locator;
use crate::merger;
use crate::types::{Bookmark, ConversionReport, ConversionResult, ConversionStatus};
use crate::urls;

/// Reads the bookmark store and returns the fetchable entries of `folder_name`,
/// in store order.
pub fn parse_folder(bookmarks_path: &Path, folder_name: &str) -> Result<Vec<Bookmark>> {
    let library: Box<dyn Library> = Box::new(ChromiumLibrary {});

    let tree = library.get_tree(bookmarks_path)?;
    let entries = locator::folder_bookmarks(&tree, folder_name)?;

    Ok(urls::extract_urls(&entries))
}

/// Converts every entry sequentially and merges the successes, in order, into
/// `output_path`. Per-URL failures are recorded and skipped; the run only
/// fails when there is nothing left to merge (or the merge itself fails).
pub fn convert_and_merge(
    entries: &[Bookmark],
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    if entries.is_empty() {
        return Err(Edge2PdfError::Merge(
            "no URLs to convert; nothing to merge".to_string(),
        ));
    }

    // Holds the per-URL PDFs; removed on every exit path when dropped.
    let workdir = TempDir::new().map_err(|source| Edge2PdfError::Io {
        path: std::env::temp_dir(),
        source,
    })?;

    let converter = PdfConverter::launch(options)?;
    let total = entries.len();
    let mut results = Vec::with_capacity(total);

    for (index, bookmark) in entries.iter().enumerate() {
        info!("[{}/{}] Converting {}", index + 1, total, bookmark.url);

        let pdf_path = workdir.path().join(format!(
            "{:04}_{}.pdf",
            index + 1,
            sanitize_title(&bookmark.title)
        ));

        let status = match converter.convert(&bookmark.url, &pdf_path) {
            Ok(()) => {
                info!("[{}/{}] Converted \"{}\"", index + 1, total, bookmark.title);
                ConversionStatus::Converted { pdf_path }
            }
            Err(error) => {
                warn!(
                    "[{}/{}] Failed to convert \"{}\": {}",
                    index + 1,
                    total,
                    bookmark.title,
                    error
                );
                ConversionStatus::Failed {
                    reason: error.to_string(),
                }
            }
        };

        results.push(ConversionResult {
            bookmark: bookmark.clone(),
            status,
        });
    }

    // The batch is done; release the browser before merging.
    drop(converter);

    let mut report = ConversionReport {
        results,
        output: None,
    };
    log_summary(&report);

    let converted = report.converted_files();
    if converted.is_empty() {
        return Err(Edge2PdfError::Merge(
            "no pages were converted successfully; nothing to merge".to_string(),
        ));
    }

    info!("Merging {} PDFs...", converted.len());
    merger::merge(&converted, output_path)?;
    report.output = Some(output_path.to_path_buf());

    Ok(report)
}

fn log_summary(report: &ConversionReport) {
    info!(
        "Conversion complete: {}/{} succeeded",
        report.converted_count(),
        report.results.len()
    );

    for (bookmark, reason) in report.failed() {
        warn!("  failed: {} ({}): {}", bookmark.title, bookmark.url, reason);
    }
}

fn sanitize_title(title: &str) -> String {
    let name: String = title
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .take(100)
        .collect();

    let name = name.trim_end_matches(&['.', ' '][..]);

    if name.is_empty() {
        "untitled".to_string()
    } else {
        name.to_string()
    }
}
