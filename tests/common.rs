#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use catercal::models::{Event, Receipt};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cat() -> Command {
    cargo_bin_cmd!("catercal")
}

/// Unique test DB path inside the system temp dir; any old file is removed.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_catercal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path inside tempdir, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_catercal_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create the schema through `init` in test mode.
pub fn init_db(db_path: &str) {
    cat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Two July 2025 events and two July receipts.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    cat()
        .args([
            "--db",
            db_path,
            "event",
            "add",
            "Corporate lunch",
            "--date",
            "2025-07-25",
            "--est-revenue",
            "2500",
            "--est-food",
            "800",
            "--est-labor",
            "450",
            "--status",
            "confirmed",
        ])
        .assert()
        .success();

    cat()
        .args([
            "--db",
            db_path,
            "event",
            "add",
            "Wedding reception",
            "--date",
            "2025-08-09",
            "--est-revenue",
            "12000",
            "--revenue",
            "12500.50",
            "--list",
            "Appetizers",
            "--list",
            "Mains",
        ])
        .assert()
        .success();

    for (store, total, date) in [("A", "245.67", "2025-07-20"), ("B", "189.43", "2025-07-22")] {
        cat()
            .args([
                "--db", db_path, "receipt", "add", store, "--total", total, "--date", date,
            ])
            .assert()
            .success();
    }
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

pub fn event_on(title: &str, date: NaiveDate) -> Event {
    Event::new(title, date)
}

pub fn receipt(store: &str, total: Decimal, date: NaiveDate) -> Receipt {
    Receipt::new(store, total, date)
}
