//! XLSX workbook of the export-year events.

use std::path::Path;

use holidays_core::export::{
    events_in_year, spreadsheet_rows, EXPORT_YEAR, SPREADSHEET_HEADER, SPREADSHEET_SHEET_NAME,
};
use holidays_core::holiday::CalendarEvent;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;

/// Data rows of the workbook: one `[title, start, end]` per export-year event.
pub fn sheet_rows(events: &[CalendarEvent]) -> Vec<[String; 3]> {
    spreadsheet_rows(events_in_year(events, EXPORT_YEAR))
}

/// Builds a workbook with a bold `Title/Start/End` header and the
/// [`sheet_rows`] below it.
pub fn build_workbook(events: &[CalendarEvent]) -> Result<Workbook> {
    let rows = sheet_rows(events);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SPREADSHEET_SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, header) in SPREADSHEET_HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string(row_num, col as u16, cell.as_str())?;
        }
    }

    worksheet.set_column_width(0, 40)?;
    worksheet.set_column_width(1, 12)?;
    worksheet.set_column_width(2, 12)?;

    tracing::debug!(rows = rows.len(), "Built workbook");
    Ok(workbook)
}

/// Builds the workbook and saves it to `path`.
pub fn write_spreadsheet(events: &[CalendarEvent], path: &Path) -> Result<()> {
    let mut workbook = build_workbook(events)?;
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_event(title: &str, start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_sheet_rows_keep_only_export_year() {
        let straddling = make_event(
            "Winterferien",
            NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        let day = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        let single = make_event("Tag der Deutschen Einheit", day, day);

        let rows = sheet_rows(&[straddling, single]);

        assert_eq!(
            rows,
            vec![[
                "Tag der Deutschen Einheit".to_string(),
                "2024-10-03".to_string(),
                "2024-10-03".to_string(),
            ]]
        );
    }

    #[test]
    fn test_build_workbook_to_buffer() {
        let day = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        let mut workbook = build_workbook(&[make_event("Tag der Deutschen Einheit", day, day)])
            .unwrap();

        let bytes = workbook.save_to_buffer().unwrap();

        // XLSX files are zip archives.
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_write_spreadsheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays_2024.xlsx");
        let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        write_spreadsheet(&[make_event("Winterferien", start, end)], &path).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
