use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

/// A node of the bookmark store: either a named folder owning its children,
/// or a single saved link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Folder {
        name: String,
        children: Vec<BookmarkNode>,
    },
    Bookmark(Bookmark),
}

#[derive(Debug, Clone)]
pub enum ConversionStatus {
    Converted { pdf_path: PathBuf },
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub bookmark: Bookmark,
    pub status: ConversionStatus,
}

/// Outcome of a whole batch. Result order matches the bookmark folder's
/// order, which is what keeps the merged PDF's pages in source order.
#[derive(Debug)]
pub struct ConversionReport {
    pub results: Vec<ConversionResult>,
    pub output: Option<PathBuf>,
}

impl ConversionReport {
    pub fn converted_files(&self) -> Vec<PathBuf> {
        self.results
            .iter()
            .filter_map(|result| match &result.status {
                ConversionStatus::Converted { pdf_path } => Some(pdf_path.clone()),
                ConversionStatus::Failed { .. } => None,
            })
            .collect()
    }

    pub fn failed(&self) -> Vec<(&Bookmark, &str)> {
        self.results
            .iter()
            .filter_map(|result| match &result.status {
                ConversionStatus::Failed { reason } => {
                    Some((&result.bookmark, reason.as_str()))
                }
                ConversionStatus::Converted { .. } => None,
            })
            .collect()
    }

    pub fn converted_count(&self) -> usize {
        self.results.len() - self.failed().len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().len()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Bookmark, ConversionReport, ConversionResult, ConversionStatus};

    fn bookmark(title: &str) -> Bookmark {
        Bookmark {
            title: title.to_string(),
            url: format!("https://{}.test/", title),
        }
    }

    #[test]
    fn it_partitions_results_preserving_order() {
        let report = ConversionReport {
            results: vec![
                ConversionResult {
                    bookmark: bookmark("a"),
                    status: ConversionStatus::Converted {
                        pdf_path: PathBuf::from("/tmp/0001_a.pdf"),
                    },
                },
                ConversionResult {
                    bookmark: bookmark("b"),
                    status: ConversionStatus::Failed {
                        reason: "navigation failed".to_string(),
                    },
                },
                ConversionResult {
                    bookmark: bookmark("c"),
                    status: ConversionStatus::Converted {
                        pdf_path: PathBuf::from("/tmp/0003_c.pdf"),
                    },
                },
            ],
            output: None,
        };

        assert_eq!(report.converted_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(
            report.converted_files(),
            vec![
                PathBuf::from("/tmp/0001_a.pdf"),
                PathBuf::from("/tmp/0003_c.pdf"),
            ]
        );
        assert_eq!(report.failed()[0].0.title, "b");
    }
}
