#![allow(dead_code)]

use downtime_predictor::StoragePaths;
use tempfile::TempDir;

/// Ten machines; hot, long-running ones went down.
pub const HOT_FAILS: &str = "\
Machine_ID,Temperature,Run_Time,Downtime_Flag
M1,60.0,100,0
M2,62.5,105,0
M3,65.0,98,0
M4,68.0,110,0
M5,70.0,115,0
M6,85.0,140,1
M7,88.0,150,1
M8,90.5,155,1
M9,93.0,160,1
M10,96.0,170,1
";

/// Same readings as `HOT_FAILS` with every label flipped.
pub const COLD_FAILS: &str = "\
Machine_ID,Temperature,Run_Time,Downtime_Flag
M1,60.0,100,1
M2,62.5,105,1
M3,65.0,98,1
M4,68.0,110,1
M5,70.0,115,1
M6,85.0,140,0
M7,88.0,150,0
M8,90.5,155,0
M9,93.0,160,0
M10,96.0,170,0
";

/// A scratch directory holding both artifacts; dropped with the test.
pub fn scratch() -> (TempDir, StoragePaths) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let storage = StoragePaths::under(dir.path());
    (dir, storage)
}
