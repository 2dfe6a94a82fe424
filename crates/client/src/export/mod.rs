//! Writers for the exported holiday files.

pub mod pdf;
pub mod xlsx;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use holidays_core::export::{document_file_name, spreadsheet_file_name, EXPORT_YEAR};
use holidays_core::holiday::CalendarEvent;

use crate::error::Result;

/// Export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Paginated PDF document.
    Pdf,
    /// XLSX workbook.
    Xlsx,
}

impl ExportFormat {
    /// Fixed file name for this format.
    pub fn file_name(self) -> String {
        match self {
            ExportFormat::Pdf => document_file_name(EXPORT_YEAR),
            ExportFormat::Xlsx => spreadsheet_file_name(EXPORT_YEAR),
        }
    }
}

/// Writes the export-year events in the given format into `dir` and returns
/// the written path. Existing files are overwritten.
pub fn export_events(
    events: &[CalendarEvent],
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format.file_name());

    match format {
        ExportFormat::Pdf => pdf::write_document(events, &path)?,
        ExportFormat::Xlsx => xlsx::write_spreadsheet(events, &path)?,
    }

    tracing::info!(path = %path.display(), ?format, "Exported holidays");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Pdf.file_name(), "holidays_2024.pdf");
        assert_eq!(ExportFormat::Xlsx.file_name(), "holidays_2024.xlsx");
    }

    #[test]
    fn test_export_events_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("2024");

        let path = export_events(&[], ExportFormat::Xlsx, &nested).unwrap();

        assert_eq!(path, nested.join("holidays_2024.xlsx"));
        assert!(path.exists());
    }
}
