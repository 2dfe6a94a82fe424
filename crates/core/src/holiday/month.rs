use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::CalendarEvent;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months.
    pub in_month: bool,
    /// Titles of the events covering this day, in event order.
    pub titles: Vec<String>,
}

impl DayCell {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// A Monday-first month grid of whole weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthView {
    /// Iterates over the cells belonging to the month itself.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter(|cell| cell.in_month)
    }

    /// Returns the cell for a date, if the grid shows it.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.weeks.iter().flatten().find(|cell| cell.date == date)
    }
}

/// Returns the dates for the week containing the given date (Monday to Sunday).
pub fn get_calendar_week(date: NaiveDate) -> Vec<NaiveDate> {
    let weekday = date.weekday().num_days_from_monday() as i64;
    let monday = date - Duration::days(weekday);

    (0..7)
        .map(|offset| monday + Duration::days(offset))
        .collect()
}

/// First and last day of a month. None for an invalid month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((first, last))
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Groups events under every day they cover within `[from, to]`.
pub fn group_events_by_date(
    events: &[CalendarEvent],
    from: NaiveDate,
    to: NaiveDate,
) -> HashMap<NaiveDate, Vec<&CalendarEvent>> {
    let mut grouped: HashMap<NaiveDate, Vec<&CalendarEvent>> = HashMap::new();

    for event in events {
        let mut current = event.start_date().max(from);
        let last = event.end_date().min(to);
        while current <= last {
            grouped.entry(current).or_default().push(event);
            current += Duration::days(1);
        }
    }

    grouped
}

/// Lays events onto the grid of the given month.
pub fn month_view(year: i32, month: u32, events: &[CalendarEvent]) -> Option<MonthView> {
    let (first, last) = month_bounds(year, month)?;
    let grid_start = get_calendar_week(first)[0];
    let grid_end = get_calendar_week(last)[6];
    let grouped = group_events_by_date(events, grid_start, grid_end);

    let mut weeks = Vec::new();
    let mut week_start = grid_start;
    while week_start <= grid_end {
        let week = get_calendar_week(week_start)
            .into_iter()
            .map(|date| DayCell {
                date,
                in_month: date.month() == month,
                titles: grouped
                    .get(&date)
                    .map(|events| events.iter().map(|e| e.title.clone()).collect())
                    .unwrap_or_default(),
            })
            .collect();
        weeks.push(week);
        week_start += Duration::days(7);
    }

    Some(MonthView { year, month, weeks })
}
