use super::filter::format_export_date;
use crate::holiday::CalendarEvent;

/// Header row of the exported sheet.
pub const SPREADSHEET_HEADER: [&str; 3] = ["Title", "Start", "End"];

/// Sheet name used in the exported workbook.
pub const SPREADSHEET_SHEET_NAME: &str = "Holidays";

/// One `Title/Start/End` row per event, all cells as display strings.
pub fn spreadsheet_rows<'a>(
    events: impl IntoIterator<Item = &'a CalendarEvent>,
) -> Vec<[String; 3]> {
    events
        .into_iter()
        .map(|event| {
            [
                event.title.clone(),
                format_export_date(event.start_date()),
                format_export_date(event.end_date()),
            ]
        })
        .collect()
}
