//! Layout error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for layout operations
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur while converting documents to text
#[derive(Debug, Error)]
pub enum LayoutError {
    /// IO error while writing rendered text
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoder could not open or parse a source document
    #[error("{}", display_unreadable(.path, .len))]
    SourceUnreadable {
        /// Source document path
        path: PathBuf,
        /// Size of the source file in bytes (0 when unknown)
        len: u64,
        /// What the decoder reported
        #[source]
        reason: SourceError,
    },
}

/// Failure reported by a [`WorkbookSource`](crate::batch::WorkbookSource)
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The container or its parts could not be decoded
    #[error("Invalid document: {0}")]
    InvalidFormat(String),

    /// Core error raised while assembling the workbook
    #[error("Core error: {0}")]
    Core(#[from] xltext_core::Error),
}

/// Human-facing message for a document that could not be opened
///
/// A zero-length file is reported as possibly empty, anything else as
/// possibly damaged.
pub fn unreadable_message(path: &std::path::Path, len: u64) -> String {
    let verdict = if len == 0 { "empty" } else { "damaged" };
    format!(
        "{} can't be opened. This excel file may be {verdict} !",
        path.display()
    )
}

fn display_unreadable(path: &std::path::Path, len: &u64) -> String {
    unreadable_message(path, *len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_unreadable_message() {
        assert_eq!(
            unreadable_message(Path::new("in/report.xlsx"), 0),
            "in/report.xlsx can't be opened. This excel file may be empty !"
        );
        assert_eq!(
            unreadable_message(Path::new("in/report.xlsx"), 512),
            "in/report.xlsx can't be opened. This excel file may be damaged !"
        );
    }

    #[test]
    fn test_source_unreadable_display() {
        let err = LayoutError::SourceUnreadable {
            path: PathBuf::from("a.xlsx"),
            len: 10,
            reason: SourceError::InvalidFormat("missing workbook part".into()),
        };
        assert_eq!(
            err.to_string(),
            "a.xlsx can't be opened. This excel file may be damaged !"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
