use catercal::db::migrate::pending_migrations;
use catercal::db::pool::DbPool;
use catercal::db::queries::load_log;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cat, init_db, init_db_with_data, setup_test_db, temp_out};

#[test]
fn fresh_database_has_no_pending_migrations() {
    let pool = DbPool::in_memory().expect("in-memory db");
    assert!(pending_migrations(&pool.conn).expect("pending").is_empty());

    let applied = load_log(&pool.conn)
        .expect("log")
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "migration_applied")
        .count();
    assert_eq!(applied, 3);
}

#[test]
fn opening_twice_applies_migrations_once() {
    let db_path = setup_test_db("db_migrate_twice");
    DbPool::open(&db_path).expect("first open");
    let pool = DbPool::open(&db_path).expect("second open");

    let applied = load_log(&pool.conn)
        .expect("log")
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "migration_applied")
        .count();
    assert_eq!(applied, 3);
}

#[test]
fn db_commands_run() {
    let db_path = setup_test_db("db_commands");
    init_db_with_data(&db_path);

    cat()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("up to date"));

    cat()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total events:"))
        .stdout(contains("2025-08-09"));

    cat()
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn log_records_mutations() {
    let db_path = setup_test_db("db_log");
    init_db_with_data(&db_path);

    cat()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Corporate lunch on 2025-07-25"))
        .stdout(contains("receipt:2"));
}

#[test]
fn backup_plain_and_compressed() {
    let db_path = setup_test_db("db_backup");
    init_db(&db_path);

    let plain = temp_out("db_backup", "sqlite");
    cat()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).expect("backup exists").len() > 0);

    let zipped_target = temp_out("db_backup_zip", "zip");
    let raw = temp_out("db_backup_zip", "sqlite");
    cat()
        .args(["--db", &db_path, "backup", "--file", &raw, "--compress"])
        .assert()
        .success();
    assert!(std::path::Path::new(&zipped_target).exists());
    assert!(!std::path::Path::new(&raw).exists());
}

#[test]
fn backup_of_missing_database_fails() {
    let db_path = setup_test_db("db_backup_missing");
    let out = temp_out("db_backup_missing", "sqlite");

    cat()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}
