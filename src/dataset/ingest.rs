use log::{info, warn};

use super::{Table, REQUIRED_COLUMNS};
use crate::{
    artifact,
    config::StoragePaths,
    error::{PipelineErr, Result},
};

/// What an accepted upload looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Stores `bytes` as the current dataset and checks it carries the required columns.
///
/// The bytes are written verbatim before any parsing, and the written file is what
/// gets parsed. A table missing a required column is left on disk; training on it
/// will fail later on the missing column.
///
/// # Args
/// * `storage` - Where the dataset lives.
/// * `bytes` - The raw uploaded file.
///
/// # Returns
/// The table's columns and row count, or the first failure.
pub fn upload(storage: &StoragePaths, bytes: &[u8]) -> Result<UploadSummary> {
    let path = storage.dataset();
    artifact::write(path, bytes)?;
    info!("dataset written to {} ({} bytes)", path.display(), bytes.len());

    let table = Table::read(path)?;
    if !table.has_columns(&REQUIRED_COLUMNS) {
        warn!("uploaded dataset has columns {:?}", table.columns());
        return Err(PipelineErr::MissingColumns);
    }

    Ok(UploadSummary {
        columns: table.columns().to_vec(),
        rows: table.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn storage(dir: &tempfile::TempDir) -> StoragePaths {
        StoragePaths::under(dir.path())
    }

    #[test]
    fn accepts_table_with_required_columns() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Machine_ID,Temperature,Run_Time,Downtime_Flag,Shift\n\
                   1,70.5,100,0,A\n\
                   2,91.0,160,1,B\n";

        let summary = upload(&storage(&dir), csv.as_bytes()).unwrap();

        assert_eq!(
            summary.columns,
            ["Machine_ID", "Temperature", "Run_Time", "Downtime_Flag", "Shift"]
        );
        assert_eq!(summary.rows, 2);
    }

    #[test]
    fn every_missing_column_yields_the_same_error() {
        for missing in REQUIRED_COLUMNS {
            let dir = tempfile::tempdir().unwrap();
            let header: Vec<&str> = REQUIRED_COLUMNS
                .into_iter()
                .filter(|c| *c != missing)
                .collect();
            let csv = format!("{}\n1,2,3\n", header.join(","));

            let err = upload(&storage(&dir), csv.as_bytes()).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(err.to_string(), PipelineErr::MissingColumns.to_string());
        }
    }

    #[test]
    fn padded_header_names_do_not_match() {
        let dir = tempfile::tempdir().unwrap();
        let csv = " Machine_ID , Temperature , Run_Time , Downtime_Flag \n1,70,100,0\n";

        let err = upload(&storage(&dir), csv.as_bytes()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn rejected_upload_stays_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(&dir);

        upload(&storage, b"a,b\n1,2\n").unwrap_err();

        assert_eq!(std::fs::read(storage.dataset()).unwrap(), b"a,b\n1,2\n");
    }

    #[test]
    fn malformed_table_is_unexpected() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Machine_ID,Temperature,Run_Time,Downtime_Flag\n1,2,3,4,5\n";

        let err = upload(&storage(&dir), csv.as_bytes()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.to_string().starts_with("Error tokenizing data."));
    }

    #[test]
    fn non_utf8_bytes_are_unexpected() {
        let dir = tempfile::tempdir().unwrap();

        let err = upload(&storage(&dir), &[0xff, 0xfe, 0x00, 0x41]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
