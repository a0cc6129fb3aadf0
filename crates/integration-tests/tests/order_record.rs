//! Shape of the persisted order records.

use chrono::{DateTime, Utc};
use tinshop_core::MissingItemPolicy;
use tinshop_integration_tests::{demo_shop, order_log_path, run_script};

fn first_record(dir: &tempfile::TempDir) -> serde_json::Value {
    let contents = std::fs::read_to_string(order_log_path(dir)).expect("order log should exist");
    let line = contents.lines().next().expect("at least one record");
    serde_json::from_str(line).expect("record should be valid JSON")
}

#[test]
fn test_record_is_self_describing_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut shop = demo_shop(&dir, MissingItemPolicy::default());
    run_script(&mut shop, "4\np1\n3\n7\nAlice\n0\n");

    let record = first_record(&dir);
    assert!(record.get("id").expect("id").is_string());
    assert_eq!(
        record.get("customer").expect("customer").as_str(),
        Some("Alice")
    );
    assert_eq!(record.get("total").expect("total").as_str(), Some("59.97"));

    let items = record.get("items").expect("items").as_array().expect("array");
    assert_eq!(items.len(), 1);
    let item = items.first().expect("item");
    assert_eq!(item.get("id").expect("id").as_str(), Some("p1"));
    assert_eq!(item.get("quantity").expect("quantity").as_u64(), Some(3));
    assert_eq!(item.get("name").expect("name").as_str(), Some("T-shirt"));
}

#[test]
fn test_created_at_is_rfc3339_utc_with_z_suffix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut shop = demo_shop(&dir, MissingItemPolicy::default());

    let before = Utc::now();
    run_script(&mut shop, "4\np4\n1\n7\n\n0\n");
    let after = Utc::now();

    let record = first_record(&dir);
    let raw = record
        .get("created_at")
        .expect("created_at")
        .as_str()
        .expect("string timestamp");
    assert!(raw.ends_with('Z'), "got {raw}");

    let parsed: DateTime<Utc> = DateTime::parse_from_rfc3339(raw)
        .expect("timestamp should parse")
        .with_timezone(&Utc);
    // Millisecond serialization may truncate below `before`; a second of
    // slack keeps the bound honest without getting flaky.
    assert!(parsed >= before - chrono::Duration::seconds(1));
    assert!(parsed <= after + chrono::Duration::seconds(1));
}

#[test]
fn test_each_line_parses_independently() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut shop = demo_shop(&dir, MissingItemPolicy::default());
    run_script(&mut shop, "4\np1\n1\n7\nAlice\n4\np3\n2\n7\nBob\n0\n");

    let contents = std::fs::read_to_string(order_log_path(&dir)).expect("order log");
    let records: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line parses on its own"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records.get(1).expect("second").get("customer").expect("customer").as_str(),
        Some("Bob")
    );
}
