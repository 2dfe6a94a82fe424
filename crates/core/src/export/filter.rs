use chrono::NaiveDate;

use crate::holiday::CalendarEvent;

/// Year whose events are exported.
pub const EXPORT_YEAR: i32 = 2024;

/// Events that start on/after January 1st and end on/before December 31st of
/// `year`, in input order.
///
/// This is a containment test, not an overlap test: events crossing either
/// year boundary are left out.
pub fn events_in_year(events: &[CalendarEvent], year: i32) -> Vec<&CalendarEvent> {
    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| event.start_date() >= first && event.end_date() <= last)
        .collect()
}

/// Display form of an event date in exports.
pub fn format_export_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn document_file_name(year: i32) -> String {
    format!("holidays_{year}.pdf")
}

pub fn spreadsheet_file_name(year: i32) -> String {
    format!("holidays_{year}.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_event(title: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> CalendarEvent {
        let date = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        CalendarEvent {
            start: date(start).and_time(NaiveTime::MIN),
            end: date(end).and_time(NaiveTime::MIN),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_events_in_year_containment() {
        let events = vec![
            make_event("Spans into 2024", (2023, 12, 30), (2024, 1, 2)),
            make_event("New Year", (2024, 1, 1), (2024, 1, 1)),
            make_event("Summer", (2024, 7, 29), (2024, 9, 9)),
            make_event("Last day", (2024, 12, 31), (2024, 12, 31)),
            make_event("Spans into 2025", (2024, 12, 23), (2025, 1, 4)),
            make_event("Next year", (2025, 1, 1), (2025, 1, 1)),
        ];

        let titles: Vec<_> = events_in_year(&events, EXPORT_YEAR)
            .iter()
            .map(|e| e.title.as_str())
            .collect();

        assert_eq!(titles, vec!["New Year", "Summer", "Last day"]);
    }

    #[test]
    fn test_events_in_year_keeps_single_day_events() {
        let events = vec![make_event("Tag der Arbeit", (2024, 5, 1), (2024, 5, 1))];
        assert_eq!(events_in_year(&events, 2024).len(), 1);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(document_file_name(EXPORT_YEAR), "holidays_2024.pdf");
        assert_eq!(spreadsheet_file_name(EXPORT_YEAR), "holidays_2024.xlsx");
    }

    #[test]
    fn test_format_export_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_export_date(date), "2024-03-09");
    }
}
