use catercal::export::parse_range;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cat, d, init_db_with_data, setup_test_db, temp_out};

#[test]
fn export_events_csv() {
    let db_path = setup_test_db("export_events_csv");
    let out = temp_out("export_events_csv", "csv");
    init_db_with_data(&db_path);

    cat()
        .args(["--db", &db_path, "export", "--what", "events", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "id,date,title,status,estimated_revenue,estimated_food_cost,estimated_labor_cost,\
             actual_revenue,actual_food_cost,actual_labor_cost,notes,lists"
        )
    );
    assert!(content.contains("Corporate lunch"));
    assert!(content.contains("Appetizers; Mains"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn export_receipts_json_with_range() {
    let db_path = setup_test_db("export_receipts_json");
    let out = temp_out("export_receipts_json", "json");
    init_db_with_data(&db_path);

    cat()
        .args([
            "--db",
            &db_path,
            "export",
            "--what",
            "receipts",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2025-07-21:2025-07-31",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["store"], "B");
    assert_eq!(rows[0]["total"], "189.43");
}

#[test]
fn export_xlsx_writes_a_workbook() {
    let db_path = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_db_with_data(&db_path);

    cat()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx files are zip archives
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_db_with_data(&db_path);
    fs::write(&out, "keep me").expect("seed file");

    cat()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    cat()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn export_of_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    cat()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2019"])
        .assert()
        .success()
        .stdout(contains("No events found"));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn range_forms() {
    let r = parse_range("2025").expect("year");
    assert_eq!((r.start, r.end), (d(2025, 1, 1), d(2025, 12, 31)));

    let r = parse_range("2024-02").expect("month");
    assert_eq!((r.start, r.end), (d(2024, 2, 1), d(2024, 2, 29)));

    let r = parse_range("2025-06:2025-08").expect("month span");
    assert_eq!((r.start, r.end), (d(2025, 6, 1), d(2025, 8, 31)));

    let r = parse_range("2025-07-04").expect("day");
    assert!(r.contains(d(2025, 7, 4)));
    assert!(!r.contains(d(2025, 7, 5)));

    assert!(parse_range("2025:2025-07").is_err());
    assert!(parse_range("2025-08:2025-06").is_err());
    assert!(parse_range("July").is_err());
}
