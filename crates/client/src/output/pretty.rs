//! Pretty output formatting.

use holidays_core::export::format_export_date;
use holidays_core::holiday::{CalendarEvent, Country, HolidayType, MonthView, Subdivision};
use holidays_core::selection::ViewState;

const WEEKDAY_HEADER: &str = "Mo  Tu  We  Th  Fr  Sa  Su";

/// Format countries for display.
pub fn format_countries(countries: &[Country]) -> String {
    if countries.is_empty() {
        return "No countries found.".to_string();
    }
    let mut output = format!("COUNTRIES ({})\n", countries.len());
    output.push_str(&"-".repeat(40));
    for country in countries {
        output.push_str(&format!("\n  {:<4} {}", country.iso_code, country.name));
    }
    output
}

/// Format subdivisions for display.
pub fn format_subdivisions(subdivisions: &[Subdivision]) -> String {
    if subdivisions.is_empty() {
        return "No subdivisions found.".to_string();
    }
    let mut output = format!("SUBDIVISIONS ({})\n", subdivisions.len());
    output.push_str(&"-".repeat(40));
    for subdivision in subdivisions {
        output.push_str(&format!(
            "\n  {:<8} {}",
            subdivision.code, subdivision.long_name
        ));
    }
    output
}

/// Format one event as `start - end  title` (a single date for one-day events).
pub fn format_event(event: &CalendarEvent) -> String {
    if event.is_single_day() {
        format!(
            "{}                {}",
            format_export_date(event.start_date()),
            event.title
        )
    } else {
        format!(
            "{} - {}  {}",
            format_export_date(event.start_date()),
            format_export_date(event.end_date()),
            event.title
        )
    }
}

/// Format events for display.
pub fn format_events(events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return "No holidays found.".to_string();
    }
    let mut output = format!("HOLIDAYS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n  {}", format_event(event)));
    }
    output
}

/// Format a month grid followed by the holidays of each covered day.
///
/// Days with at least one holiday are marked with `*`.
pub fn format_month(view: &MonthView) -> String {
    let title = view
        .days()
        .next()
        .map(|cell| cell.date.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", view.year, view.month));

    let mut output = format!("{title}\n{WEEKDAY_HEADER}");
    for week in &view.weeks {
        let line: Vec<String> = week
            .iter()
            .map(|cell| {
                if !cell.in_month {
                    "   ".to_string()
                } else {
                    let marker = if cell.is_empty() { ' ' } else { '*' };
                    format!("{:>2}{marker}", cell.date.format("%-d"))
                }
            })
            .collect();
        output.push('\n');
        output.push_str(line.join(" ").trim_end());
    }

    let covered: Vec<_> = view.days().filter(|cell| !cell.is_empty()).collect();
    if covered.is_empty() {
        output.push_str("\n\nNo holidays this month.");
        return output;
    }
    output.push('\n');
    for cell in covered {
        output.push_str(&format!(
            "\n  {}  {}",
            cell.date.format("%a %d"),
            cell.titles.join(", ")
        ));
    }
    output
}

fn checkbox(checked: bool, holiday_type: HolidayType) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {}", holiday_type.label())
}

/// Format the page header: current selection, filters and notice.
pub fn format_selection(view: &ViewState) -> String {
    let selection = &view.selection;
    let country = match view.selected_country() {
        Some(country) => format!("{} ({})", country.name, country.iso_code),
        None => selection.country.clone(),
    };
    let subdivision = match (view.selected_subdivision(), &selection.subdivision) {
        (Some(subdivision), _) => format!("{} ({})", subdivision.long_name, subdivision.code),
        (None, Some(code)) => code.clone(),
        (None, None) => "All subdivisions".to_string(),
    };

    let mut output = format!(
        "Country: {country}\nSubdivision: {subdivision}\n{}  {}",
        checkbox(selection.include_public, HolidayType::Public),
        checkbox(selection.include_school, HolidayType::School),
    );
    if let Some(notice) = &view.notice {
        output.push_str(&format!("\n! {notice}"));
    }
    output
}

/// Format the whole holiday page for one month.
pub fn format_page(view: &ViewState, month: &MonthView) -> String {
    format!("{}\n\n{}", format_selection(view), format_month(month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use holidays_core::holiday::month_view;
    use holidays_core::selection::Selection;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_event(title: &str, start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_countries(&[]), "No countries found.");
        assert_eq!(format_subdivisions(&[]), "No subdivisions found.");
        assert_eq!(format_events(&[]), "No holidays found.");
    }

    #[test]
    fn test_format_countries() {
        let output = format_countries(&[
            Country::new("1", "DE", "Germany"),
            Country::new("2", "AT", "Austria"),
        ]);
        assert!(output.starts_with("COUNTRIES (2)"));
        assert!(output.contains("DE   Germany"));
        assert!(output.contains("AT   Austria"));
    }

    #[test]
    fn test_format_event_ranges() {
        let single = make_event("Neujahr", make_date(2024, 1, 1), make_date(2024, 1, 1));
        let range = make_event("Osterferien", make_date(2024, 3, 25), make_date(2024, 4, 6));

        assert!(format_event(&single).starts_with("2024-01-01 "));
        assert!(format_event(&single).ends_with("Neujahr"));
        assert_eq!(format_event(&range), "2024-03-25 - 2024-04-06  Osterferien");
    }

    #[test]
    fn test_format_month_marks_holidays() {
        let events = vec![make_event(
            "Tag der Arbeit",
            make_date(2024, 5, 1),
            make_date(2024, 5, 1),
        )];
        let view = month_view(2024, 5, &events).unwrap();
        let output = format_month(&view);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "May 2024");
        assert_eq!(lines[1], WEEKDAY_HEADER);
        assert!(lines[2].contains(" 1*"));
        assert!(lines[2].ends_with(" 5"));
        assert!(output.contains("Wed 01  Tag der Arbeit"));
    }

    #[test]
    fn test_format_month_without_holidays() {
        let view = month_view(2024, 2, &[]).unwrap();
        let output = format_month(&view);
        assert!(output.starts_with("February 2024"));
        assert!(output.ends_with("No holidays this month."));
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_format_selection_checkboxes_and_notice() {
        let mut view = ViewState::new(Selection::new("DE").with_filters(true, false));
        view.set_countries(vec![Country::new("1", "DE", "Germany")]);
        view.set_notice("No country selected");

        let output = format_selection(&view);

        assert!(output.contains("Country: Germany (DE)"));
        assert!(output.contains("Subdivision: All subdivisions"));
        assert!(output.contains("[x] Public Holidays  [ ] School Holidays"));
        assert!(output.ends_with("! No country selected"));
    }
}
