//! Batch conversion of many documents
//!
//! Decoding is left to a [`WorkbookSource`]. Each document is converted on
//! its own; a document that cannot be opened is logged and reported, and the
//! batch moves on to the next one.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use xltext_core::Workbook;

use crate::convert::TextWriter;
use crate::error::{LayoutError, LayoutResult, SourceError};
use crate::options::ConvertOptions;

/// Something that can decode a document into a [`Workbook`]
pub trait WorkbookSource {
    /// Open and decode the document at `path`
    fn open(&self, path: &Path) -> Result<Workbook, SourceError>;
}

impl<F> WorkbookSource for F
where
    F: Fn(&Path) -> Result<Workbook, SourceError>,
{
    fn open(&self, path: &Path) -> Result<Workbook, SourceError> {
        self(path)
    }
}

/// The rendered text of one document and where it belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    /// Path of the source document
    pub source: PathBuf,
    /// Derived output path
    pub target: PathBuf,
    /// Rendered text
    pub text: String,
}

/// Result of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Documents converted, in input order
    pub converted: Vec<ConvertedDocument>,
    /// Documents that failed, in input order
    pub failures: Vec<LayoutError>,
}

impl BatchReport {
    /// Check if every document converted
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of documents processed
    pub fn len(&self) -> usize {
        self.converted.len() + self.failures.len()
    }

    /// Check if no documents were processed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Convert every document in `paths`
pub fn convert_batch<S, P>(source: &S, paths: &[P], options: &ConvertOptions) -> BatchReport
where
    S: WorkbookSource + ?Sized,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();
    if paths.is_empty() {
        warn!("There is no xlsx file to be converted to text file");
        return report;
    }

    for path in paths {
        match convert_document(source, path.as_ref(), options) {
            Ok(doc) => report.converted.push(doc),
            Err(e) => {
                error!("{e}");
                report.failures.push(e);
            }
        }
    }
    report
}

/// Convert a single document
pub fn convert_document<S>(
    source: &S,
    path: &Path,
    options: &ConvertOptions,
) -> LayoutResult<ConvertedDocument>
where
    S: WorkbookSource + ?Sized,
{
    debug!("converting {}", path.display());
    let workbook = source.open(path).map_err(|reason| LayoutError::SourceUnreadable {
        path: path.to_path_buf(),
        len: fs::metadata(path).map(|m| m.len()).unwrap_or(0),
        reason,
    })?;

    Ok(ConvertedDocument {
        source: path.to_path_buf(),
        target: target_path_for(path, &options.target_extension),
        text: TextWriter::render_workbook(&workbook, &options.render),
    })
}

/// The source path with its extension replaced
pub fn target_path_for(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_sheet(_: &Path) -> Result<Workbook, SourceError> {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("S")?;
        Ok(wb)
    }

    #[test]
    fn test_target_path() {
        assert_eq!(
            target_path_for(Path::new("dir/report.xlsx"), "txt"),
            PathBuf::from("dir/report.txt")
        );
        assert_eq!(
            target_path_for(Path::new("noext"), "txt"),
            PathBuf::from("noext.txt")
        );
    }

    #[test]
    fn test_empty_batch() {
        let paths: [&str; 0] = [];
        let report = convert_batch(&one_sheet, &paths, &ConvertOptions::default());
        assert!(report.is_empty());
        assert!(report.is_success());
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let source = |path: &Path| {
            if path.ends_with("bad.xlsx") {
                Err(SourceError::InvalidFormat("truncated".into()))
            } else {
                one_sheet(path)
            }
        };
        let report = convert_batch(
            &source,
            &["a.xlsx", "bad.xlsx", "c.xlsx"],
            &ConvertOptions::default(),
        );

        assert_eq!(report.len(), 3);
        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.converted[1].target, PathBuf::from("c.txt"));
        assert!(matches!(
            &report.failures[0],
            LayoutError::SourceUnreadable { path, len: 0, .. } if path == Path::new("bad.xlsx")
        ));
    }
}
