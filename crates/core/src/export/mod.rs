//! Export rules shared by the PDF and spreadsheet writers.

mod document;
mod filter;
mod spreadsheet;

pub use document::{
    document_line, document_lines, paginate, DocumentLayout, DocumentPage, PlacedLine,
};
pub use filter::{
    document_file_name, events_in_year, format_export_date, spreadsheet_file_name, EXPORT_YEAR,
};
pub use spreadsheet::{spreadsheet_rows, SPREADSHEET_HEADER, SPREADSHEET_SHEET_NAME};
