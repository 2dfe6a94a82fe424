//! Text layout for the exported holiday document.
//!
//! The layout is computed here in millimetres from the top of the page; the
//! PDF writer only places the resulting lines.

use serde::Serialize;

use super::filter::format_export_date;
use crate::holiday::CalendarEvent;

/// Page geometry for the exported document. Defaults to A4 portrait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub left_margin_mm: f32,
    pub top_margin_mm: f32,
    pub bottom_margin_mm: f32,
    pub line_height_mm: f32,
    pub font_size_pt: f32,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            left_margin_mm: 10.0,
            top_margin_mm: 10.0,
            bottom_margin_mm: 10.0,
            line_height_mm: 10.0,
            font_size_pt: 12.0,
        }
    }
}

impl DocumentLayout {
    /// Lowest position a line may start at.
    fn printable_bottom(&self) -> f32 {
        self.page_height_mm - self.bottom_margin_mm
    }
}

/// A line of text positioned on a page, `y_mm` measured from the top edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub y_mm: f32,
    pub text: String,
}

/// One page of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentPage {
    pub lines: Vec<PlacedLine>,
}

/// `"{n}. {title} - {start} to {end}"`, numbered from 1.
pub fn document_line(index: usize, event: &CalendarEvent) -> String {
    format!(
        "{}. {} - {} to {}",
        index + 1,
        event.title,
        format_export_date(event.start_date()),
        format_export_date(event.end_date())
    )
}

/// Numbered lines for the given events, in order.
pub fn document_lines<'a>(events: impl IntoIterator<Item = &'a CalendarEvent>) -> Vec<String> {
    events
        .into_iter()
        .enumerate()
        .map(|(index, event)| document_line(index, event))
        .collect()
}

/// Splits lines into pages.
///
/// A new page starts at the top margin whenever the next line would pass the
/// printable bottom. An empty input yields one empty page.
pub fn paginate(lines: &[String], layout: &DocumentLayout) -> Vec<DocumentPage> {
    let mut pages = vec![DocumentPage::default()];
    let mut y = layout.top_margin_mm;

    for text in lines {
        if y + layout.line_height_mm > layout.printable_bottom() && y > layout.top_margin_mm {
            pages.push(DocumentPage::default());
            y = layout.top_margin_mm;
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine {
                y_mm: y,
                text: text.clone(),
            });
        }
        y += layout.line_height_mm;
    }

    pages
}
