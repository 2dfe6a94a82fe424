//! Interactive holiday page.
//!
//! Renders the selection, the checkboxes and the month grid, then asks for
//! the next action until the user quits.

use std::path::Path;

use chrono::{Datelike, Local};
use dialoguer::Select;
use holidays_core::holiday::{month_view, next_month, previous_month};
use holidays_core::selection::ViewState;

use crate::app::HolidayApp;
use crate::error::{ClientError, Result};
use crate::export::ExportFormat;
use crate::output::pretty;
use crate::source::HolidaySource;

/// Label of the empty subdivision option.
pub const ALL_SUBDIVISIONS: &str = "Select a subdivision";

/// One entry of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChangeCountry,
    ChangeSubdivision,
    TogglePublic,
    ToggleSchool,
    PreviousMonth,
    NextMonth,
    ExportPdf,
    ExportXlsx,
    Quit,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::ChangeCountry,
        Action::ChangeSubdivision,
        Action::TogglePublic,
        Action::ToggleSchool,
        Action::PreviousMonth,
        Action::NextMonth,
        Action::ExportPdf,
        Action::ExportXlsx,
        Action::Quit,
    ];

    /// Menu label. Toggles show the checkbox state they flip.
    pub fn label(self, view: &ViewState) -> String {
        let check = |on: bool| if on { "[x]" } else { "[ ]" };
        match self {
            Action::ChangeCountry => "Change country".to_string(),
            Action::ChangeSubdivision => "Change subdivision".to_string(),
            Action::TogglePublic => {
                format!("{} Public Holidays", check(view.selection.include_public))
            }
            Action::ToggleSchool => {
                format!("{} School Holidays", check(view.selection.include_school))
            }
            Action::PreviousMonth => "Previous month".to_string(),
            Action::NextMonth => "Next month".to_string(),
            Action::ExportPdf => "Export to PDF".to_string(),
            Action::ExportXlsx => "Export to Excel".to_string(),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Country dropdown entries and the index of the selected one.
pub fn country_items(view: &ViewState) -> (Vec<String>, usize) {
    let items = view
        .countries
        .iter()
        .map(|c| format!("{} ({})", c.name, c.iso_code))
        .collect();
    let selected = view
        .countries
        .iter()
        .position(|c| c.iso_code.eq_ignore_ascii_case(&view.selection.country))
        .unwrap_or(0);
    (items, selected)
}

/// Subdivision dropdown entries, led by the empty option, and the index of
/// the selected one.
pub fn subdivision_items(view: &ViewState) -> (Vec<String>, usize) {
    let mut items = vec![ALL_SUBDIVISIONS.to_string()];
    items.extend(
        view.subdivisions
            .iter()
            .map(|s| format!("{} ({})", s.long_name, s.code)),
    );
    let selected = view
        .selection
        .subdivision
        .as_deref()
        .and_then(|code| view.subdivisions.iter().position(|s| s.code == code))
        .map_or(0, |i| i + 1);
    (items, selected)
}

/// Maps a subdivision dropdown index back to a code. Index 0 is the empty option.
pub fn subdivision_choice(view: &ViewState, index: usize) -> Option<String> {
    index
        .checked_sub(1)
        .and_then(|i| view.subdivisions.get(i))
        .map(|s| s.code.clone())
}

fn prompt(label: &str, items: &[String], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(label)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| ClientError::Prompt(e.to_string()))
}

/// Runs the page until the user quits. Starts on the current month.
pub async fn run<S: HolidaySource>(app: &mut HolidayApp<S>, export_dir: &Path) -> Result<()> {
    let today = Local::now().date_naive();
    let (mut year, mut month) = (today.year(), today.month());

    app.load().await;

    loop {
        if let Some(grid) = month_view(year, month, &app.view().events) {
            println!("\n{}\n", pretty::format_page(app.view(), &grid));
        }

        let labels: Vec<String> = Action::ALL.iter().map(|a| a.label(app.view())).collect();
        let action = Action::ALL[prompt("Action", &labels, 0)?];
        tracing::debug!(?action, "Menu action");

        match action {
            Action::ChangeCountry => {
                let (items, selected) = country_items(app.view());
                if items.is_empty() {
                    println!("No countries loaded.");
                    continue;
                }
                let index = prompt("Country", &items, selected)?;
                if let Some(country) = app.view().countries.get(index) {
                    let iso_code = country.iso_code.clone();
                    app.select_country(iso_code).await;
                }
            }
            Action::ChangeSubdivision => {
                let (items, selected) = subdivision_items(app.view());
                let index = prompt("Subdivision", &items, selected)?;
                let code = subdivision_choice(app.view(), index);
                app.select_subdivision(code).await;
            }
            Action::TogglePublic => {
                let include = !app.view().selection.include_public;
                app.set_public_holidays(include).await;
            }
            Action::ToggleSchool => {
                let include = !app.view().selection.include_school;
                app.set_school_holidays(include).await;
            }
            Action::PreviousMonth => (year, month) = previous_month(year, month),
            Action::NextMonth => (year, month) = next_month(year, month),
            Action::ExportPdf | Action::ExportXlsx => {
                let format = if action == Action::ExportPdf {
                    ExportFormat::Pdf
                } else {
                    ExportFormat::Xlsx
                };
                if let Some(path) = app.export(format, export_dir) {
                    println!("Saved {}", path.display());
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}
