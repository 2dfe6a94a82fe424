//! holidays_core - pure data model and rules for the holiday calendar.
//!
//! Everything in this crate is a pure function over plain data. Fetching,
//! file writing and user interaction live in `holidays_client`.

pub mod export;
pub mod holiday;
pub mod selection;
pub mod serde;
