//! Month view command.

use clap::Args;

use super::selection::SelectionArgs;

/// Month view arguments. Year and month default to today.
#[derive(Debug, Clone, Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Year to show.
    #[arg(long)]
    pub year: Option<i32>,

    /// Month to show (1-12).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}
