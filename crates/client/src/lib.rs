//! holidays_client - CLI client for the holiday calendar API.

pub mod app;
pub mod browse;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod source;

pub use app::HolidayApp;
pub use client::HolidayClient;
pub use error::{ClientError, Result};
