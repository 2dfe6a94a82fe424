//! Export command.

use std::path::PathBuf;

use clap::Args;

use super::selection::SelectionArgs;
use crate::export::ExportFormat;

/// Export arguments.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// File format.
    #[arg(value_enum)]
    pub format: ExportFormat,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output directory (defaults to HOLIDAYS_EXPORT_DIR, then the current directory).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
