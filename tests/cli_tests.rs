use chrono::{TimeZone, Utc};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rpainlog::core::store::EntryStore;
use rpainlog::db::store::{DEFAULT_SLOT, SqliteStore};
use std::path::Path;

mod common;
use common::{add, init_db, rpl, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rpl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_add_then_list_shows_classification() {
    let db_path = setup_test_db("add_list");
    init_db(&db_path);

    add(&db_path, "7", "2024-01-02", "08:00", "after the run");

    rpl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Very Intense"))
        .stdout(contains("[SEVERE]"))
        .stdout(contains("02 Jan 2024 08:00"))
        .stdout(contains("after the run"));
}

#[test]
fn test_add_out_of_range_level_is_rejected_before_storage() {
    let db_path = setup_test_db("out_of_range");

    rpl()
        .args(["--db", &db_path, "add", "11", "--date", "2024-03-15", "--time", "14:30"])
        .assert()
        .failure()
        .stderr(contains("❌"))
        .stderr(contains("Error: Pain level 11 is out of range"));

    rpl()
        .args(["--db", &db_path, "add", "-1"])
        .assert()
        .failure()
        .stderr(contains("out of range"));

    // nothing was opened, let alone saved
    assert!(!Path::new(&db_path).exists());
}

#[test]
fn test_add_invalid_time_is_rejected() {
    let db_path = setup_test_db("bad_time");
    init_db(&db_path);

    rpl()
        .args(["--db", &db_path, "add", "3", "--date", "2024-03-15", "--time", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));

    rpl()
        .args(["--db", &db_path, "add", "3", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));

    rpl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}

#[test]
fn test_add_rejects_unpadded_date_and_time() {
    let db_path = setup_test_db("unpadded");
    init_db(&db_path);

    rpl()
        .args(["--db", &db_path, "add", "3", "--date", "2024-3-5", "--time", "09:05"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));

    rpl()
        .args(["--db", &db_path, "add", "3", "--date", "2024-03-05", "--time", "9:05"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));

    rpl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}

#[test]
fn test_add_in_dst_gap_is_rejected() {
    let db_path = setup_test_db("dst_gap");
    init_db(&db_path);

    // clocks in Rome jump from 02:00 to 03:00 on 2024-03-31
    rpl()
        .env("TZ", "Europe/Rome")
        .args(["--db", &db_path, "add", "4", "--date", "2024-03-31", "--time", "02:30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"))
        .stderr(contains("does not exist"));

    rpl()
        .env("TZ", "Europe/Rome")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}

#[test]
fn test_add_ambiguous_time_takes_earlier_instant() {
    let db_path = setup_test_db("dst_fold");
    init_db(&db_path);

    // 02:30 happens twice in Rome on 2024-10-27: first at +02:00, then at +01:00
    rpl()
        .env("TZ", "Europe/Rome")
        .args(["--db", &db_path, "add", "4", "--date", "2024-10-27", "--time", "02:30"])
        .assert()
        .success();

    let store = SqliteStore::open(&db_path, DEFAULT_SLOT).expect("open store");
    let entries = store.load().expect("load");
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].timestamp,
        Utc.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap()
    );
}

#[test]
fn test_add_defaults_to_now() {
    let db_path = setup_test_db("defaults");
    init_db(&db_path);

    rpl()
        .args(["--db", &db_path, "add", "0"])
        .assert()
        .success()
        .stdout(contains("No Pain"));

    rpl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("today"));
}

#[test]
fn test_list_keeps_creation_order_for_backdated_entries() {
    let db_path = setup_test_db("creation_order");
    init_db(&db_path);

    add(&db_path, "2", "2024-03-10", "10:00", "");
    add(&db_path, "9", "2024-01-01", "10:00", "backdated");

    let out = rpl()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);

    let newest = stdout.find("Unbearable").expect("level 9 listed");
    let older = stdout.find("Discomforting").expect("level 2 listed");
    assert!(newest < older, "most recently created entry comes first");
}

#[test]
fn test_list_limit_and_note_preview() {
    let db_path = setup_test_db("limit");
    init_db(&db_path);

    let long_note = "x".repeat(80);
    add(&db_path, "1", "2024-03-01", "10:00", "first");
    add(&db_path, "4", "2024-03-02", "10:00", &long_note);

    rpl()
        .args(["--db", &db_path, "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("Distressing"))
        .stdout(contains(format!("{}...", "x".repeat(50))))
        .stdout(contains("x".repeat(51)).not())
        .stdout(contains("first").not())
        .stdout(contains("1 older entries not shown"));
}

#[test]
fn test_report_average_and_window() {
    let db_path = setup_test_db("report");
    init_db(&db_path);

    add(&db_path, "4", "2024-02-01", "10:00", "");
    add(&db_path, "6", "2024-03-01", "10:00", "");
    add(&db_path, "5", "2024-01-01", "10:00", "");

    rpl()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Average: 5.0"))
        .stdout(contains("Entries:    3"))
        .stdout(contains("Start date: 01/01/2024"))
        .stdout(contains("End date:   01/03/2024"))
        .stdout(contains("01 Jan"));

    rpl()
        .args(["--db", &db_path, "report", "--window", "2"])
        .assert()
        .success()
        .stdout(contains("01 Feb"))
        .stdout(contains("01 Mar"))
        .stdout(contains("01 Jan").not());
}

#[test]
fn test_report_rejects_zero_window() {
    let db_path = setup_test_db("report_zero");
    init_db(&db_path);
    add(&db_path, "4", "2024-02-01", "10:00", "");

    rpl()
        .args(["--db", &db_path, "report", "--window", "0"])
        .assert()
        .failure()
        .stderr(contains("--window"));

    rpl()
        .args(["--db", &db_path, "report", "--window", "1"])
        .assert()
        .success()
        .stdout(contains("01 Feb"))
        .stdout(contains("No entries to chart.").not());
}

#[test]
fn test_report_on_empty_journal() {
    let db_path = setup_test_db("report_empty");
    init_db(&db_path);

    rpl()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("No entries to chart."))
        .stdout(contains("Average: 0.0"))
        .stdout(contains("N/A"));
}

#[test]
fn test_corrupt_payload_is_recovered_and_logged() {
    let db_path = setup_test_db("corrupt");
    init_db(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        rpainlog::db::kv::put(&conn, "painEntries", "[{\"id\": 1, \"painLevel\": ").expect("put");
    }

    rpl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries yet"))
        .stderr(contains("Could not load saved entries"));

    rpl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("load_failed"));
}

#[test]
fn test_scale_lists_every_level() {
    let db_path = setup_test_db("scale");

    let mut assert = rpl().args(["--db", &db_path, "scale"]).assert().success();
    for label in [
        "No Pain",
        "Very Mild",
        "Discomforting",
        "Tolerable",
        "Distressing",
        "Very Distressing",
        "Intense",
        "Very Intense",
        "Utterly Horrible",
        "Unbearable",
        "Unspeakable",
    ] {
        assert = assert.stdout(contains(label));
    }
    assert.stdout(contains("MODERATE"));
}

#[test]
fn test_log_records_adds_and_migrations() {
    let db_path = setup_test_db("log");
    init_db(&db_path);
    add(&db_path, "3", "2024-03-15", "14:30", "");

    rpl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("level 3 (Tolerable)"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    add(&db_path, "5", "2024-03-15", "14:30", "");

    rpl()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("painEntries"))
        .stdout(contains("entries:"))
        .stdout(contains("Integrity check passed"));
}
