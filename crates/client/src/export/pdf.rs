//! PDF rendering of the export-year events.

use std::path::Path;

use holidays_core::export::{
    document_lines, events_in_year, paginate, DocumentLayout, DocumentPage, EXPORT_YEAR,
};
use holidays_core::holiday::CalendarEvent;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{ClientError, Result};

/// Lays out the export-year events, one numbered line per event.
pub fn document_pages(events: &[CalendarEvent], layout: &DocumentLayout) -> Vec<DocumentPage> {
    let lines = document_lines(events_in_year(events, EXPORT_YEAR));
    paginate(&lines, layout)
}

/// Renders the pages of [`document_pages`] as PDF bytes.
pub fn render_document(events: &[CalendarEvent], layout: &DocumentLayout) -> Result<Vec<u8>> {
    let pages = document_pages(events, layout);

    let width = Mm(layout.page_width_mm);
    let height = Mm(layout.page_height_mm);
    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("Holidays {EXPORT_YEAR}"),
        width,
        height,
        "Layer 1".to_string(),
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ClientError::Export(e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        // PDF coordinates grow upwards from the bottom edge.
        for line in &page.lines {
            layer.use_text(
                line.text.clone(),
                layout.font_size_pt,
                Mm(layout.left_margin_mm),
                Mm(layout.page_height_mm - line.y_mm),
                &font,
            );
        }
    }

    tracing::debug!(pages = pages.len(), "Rendered document");
    doc.save_to_bytes()
        .map_err(|e| ClientError::Export(e.to_string()))
}

/// Renders with the default A4 layout and writes the result to `path`.
pub fn write_document(events: &[CalendarEvent], path: &Path) -> Result<()> {
    let bytes = render_document(events, &DocumentLayout::default())?;
    std::fs::write(path, bytes)?;
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

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_document_pages_keep_only_export_year() {
        let events = vec![
            make_event("Winterferien", make_date(2023, 12, 30), make_date(2024, 1, 2)),
            make_event("Tag der Arbeit", make_date(2024, 5, 1), make_date(2024, 5, 1)),
        ];

        let pages = document_pages(&events, &DocumentLayout::default());

        let texts: Vec<&str> = pages
            .iter()
            .flat_map(|page| page.lines.iter().map(|line| line.text.as_str()))
            .collect();
        assert_eq!(texts, vec!["1. Tag der Arbeit - 2024-05-01 to 2024-05-01"]);
    }

    #[test]
    fn test_render_document_is_pdf() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let bytes = render_document(
            &[make_event("Tag der Arbeit", day, day)],
            &DocumentLayout::default(),
        )
        .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_document_many_pages() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let events: Vec<_> = (0..60)
            .map(|n| make_event(&format!("Holiday {n}"), day, day))
            .collect();

        let bytes = render_document(&events, &DocumentLayout::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays_2024.pdf");

        write_document(&[], &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }
}
