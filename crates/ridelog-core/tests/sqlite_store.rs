use std::io::Cursor;

use chrono::NaiveDate;
use ridelog_core::storage::{
    ensure_table, list_records, store_record, RideFilter, SqliteStore, RIDES_TABLE,
};
use ridelog_core::{acquire, SqlExecutor};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date")
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir should be available");
    let path = dir.path().join("nested").join("rides.db");

    {
        let mut store = SqliteStore::open(&path).expect("open should succeed");
        ensure_table(&mut store, RIDES_TABLE).expect("table should be created");
        let record = acquire(
            Cursor::new("9-12-23\n2\n1:01:30\n10000\n400:15\n25.5\n"),
            Vec::new(),
            today(),
        )
        .expect("acquisition should succeed");
        store_record(&mut store, RIDES_TABLE, record).expect("store should succeed");
    }
    assert!(path.exists());

    let mut store = SqliteStore::open(&path).expect("reopen should succeed");
    ensure_table(&mut store, RIDES_TABLE).expect("existing table is left alone");
    let rides = list_records(&store, RIDES_TABLE, &RideFilter::new()).expect("list should succeed");
    assert_eq!(rides.len(), 1);

    let ride = &rides[0];
    assert_eq!(ride.date, NaiveDate::from_ymd_opt(2023, 12, 9).unwrap());
    assert_eq!(ride.day_seconds, 3690);
    assert_eq!(ride.total_distance, 10000.0);
    assert_eq!(ride.day_distance, 25.5);
    assert_eq!(ride.total_seconds, 400 * 3600 + 15 * 60);
}

#[test]
fn test_raw_rows_match_insert_shape() {
    let dir = tempfile::tempdir().expect("tempdir should be available");
    let mut store = SqliteStore::open(&dir.path().join("rides.db")).expect("open should succeed");
    ensure_table(&mut store, RIDES_TABLE).expect("table should be created");

    let record = acquire(
        Cursor::new("\n1\n12.5\n45:00\n100.5\n3\n"),
        Vec::new(),
        today(),
    )
    .expect("acquisition should succeed");
    store_record(&mut store, RIDES_TABLE, record).expect("store should succeed");

    let rows = store
        .query("SELECT Date, DayKM, DaySeconds, TotalKM, TotalSeconds FROM fahrrad_rides")
        .expect("query should succeed");
    assert_eq!(rows.len(), 1);
    let rendered: Vec<String> = rows[0].iter().map(|value| value.to_string()).collect();
    assert_eq!(rendered, vec!["2024-03-07", "12.5", "2700", "100.5", "10800"]);
}

#[test]
fn test_open_in_unwritable_location_fails() {
    let dir = tempfile::tempdir().expect("tempdir should be available");
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"not a directory").expect("write should succeed");

    let result = SqliteStore::open(&blocker.join("rides.db"));
    assert!(result.is_err());
}
