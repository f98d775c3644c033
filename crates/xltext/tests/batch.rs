//! Batch driver tests against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use xltext::{
    convert_batch, ConvertOptions, LayoutError, LineTerminator, RenderOptions, SourceError,
    WorkbookSource,
};
use xltext_core::{Workbook, Worksheet};

/// Decodes a toy format: one cell value per line, all in column A
struct LinesSource;

impl WorkbookSource for LinesSource {
    fn open(&self, path: &Path) -> Result<Workbook, SourceError> {
        let content = fs::read_to_string(path)?;
        if content.is_empty() {
            return Err(SourceError::InvalidFormat("no content".into()));
        }
        if !content.starts_with("#lines") {
            return Err(SourceError::InvalidFormat("bad signature".into()));
        }

        let mut sheet = Worksheet::new("Lines");
        for (row, line) in content.lines().skip(1).enumerate() {
            sheet.set_cell_value_at(row as u32, 0, line)?;
        }
        let mut workbook = Workbook::new();
        workbook.push_worksheet(sheet)?;
        Ok(workbook)
    }
}

fn options() -> ConvertOptions {
    ConvertOptions {
        render: RenderOptions::default().with_line_terminator(LineTerminator::LF),
        ..ConvertOptions::default()
    }
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_converts_every_readable_document() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "first.xlsx", "#lines\nalpha\nbeta\n");
    let second = write(&dir, "second.xlsx", "#lines\ngamma\n");

    let report = convert_batch(&LinesSource, &[&first, &second], &options());
    assert!(report.is_success());
    assert_eq!(report.converted.len(), 2);

    let doc = &report.converted[0];
    assert_eq!(doc.source, first);
    assert_eq!(doc.target, dir.path().join("first.txt"));
    assert_eq!(
        doc.text,
        "============Lines========================\n\
         Orientation: horizontal\n\
         alpha | \n\
         beta  | \n\
         \n"
    );
}

#[test]
fn test_zero_length_file_is_reported_as_empty() {
    let dir = TempDir::new().unwrap();
    let empty = write(&dir, "empty.xlsx", "");

    let report = convert_batch(&LinesSource, &[&empty], &options());
    assert_eq!(report.failures.len(), 1);
    let message = report.failures[0].to_string();
    assert!(message.ends_with("This excel file may be empty !"), "{message}");
    assert!(message.starts_with(&empty.display().to_string()));
}

#[test]
fn test_corrupt_file_is_reported_as_damaged() {
    let dir = TempDir::new().unwrap();
    let damaged = write(&dir, "damaged.xlsx", "PK\u{3}\u{4}garbage");
    let good = write(&dir, "good.xlsx", "#lines\nok\n");

    let report = convert_batch(&LinesSource, &[&damaged, &good], &options());
    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.converted[0].source, good);

    match &report.failures[0] {
        LayoutError::SourceUnreadable { path, len, reason } => {
            assert_eq!(path, &damaged);
            assert!(*len > 0);
            assert!(matches!(reason, SourceError::InvalidFormat(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(report.failures[0]
        .to_string()
        .ends_with("This excel file may be damaged !"));
}

#[test]
fn test_missing_file_fails_alone() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.xlsx");
    let good = write(&dir, "good.xlsx", "#lines\nok\n");

    let report = convert_batch(&LinesSource, &[&missing, &good], &options());
    assert_eq!(report.len(), 2);
    assert_eq!(report.converted.len(), 1);
    assert!(matches!(
        &report.failures[0],
        LayoutError::SourceUnreadable {
            reason: SourceError::Io(_),
            ..
        }
    ));
}

#[test]
fn test_custom_target_extension() {
    let dir = TempDir::new().unwrap();
    let src = write(&dir, "report.xlsx", "#lines\nx\n");
    let options = ConvertOptions {
        target_extension: "log".to_string(),
        ..options()
    };

    let report = convert_batch(&LinesSource, &[&src], &options);
    assert_eq!(report.converted[0].target, dir.path().join("report.log"));
}
