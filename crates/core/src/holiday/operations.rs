use chrono::NaiveTime;

use super::types::{CalendarEvent, HolidayRecord};

/// Turns one holiday record into a calendar event at local midnight.
pub fn materialize_record(record: &HolidayRecord) -> CalendarEvent {
    CalendarEvent {
        start: record.start_date.and_time(NaiveTime::MIN),
        end: record.end_date.and_time(NaiveTime::MIN),
        title: record.name.clone(),
    }
}

/// Maps records to events one-to-one, keeping their order.
///
/// No sorting, de-duplication or merging of overlapping ranges happens here.
pub fn materialize(records: &[HolidayRecord]) -> Vec<CalendarEvent> {
    records.iter().map(materialize_record).collect()
}
