mod ingest;
mod table;

pub use ingest::{upload, UploadSummary};
pub use table::Table;

/// Columns an uploaded table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] =
    ["Machine_ID", "Temperature", "Run_Time", "Downtime_Flag"];

/// Columns fed to the classifier, in this order.
pub const FEATURE_COLUMNS: [&str; 2] = ["Temperature", "Run_Time"];

pub const LABEL_COLUMN: &str = "Downtime_Flag";
