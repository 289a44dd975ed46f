use sales_metrics::aggregate;
use sales_metrics::output::{
    new_saved_analytics, read_report, render_summary, report_to_string, to_report, write_report,
    AnalyticsStore,
};
use std::path::Path;
use tempfile::tempdir;

const INPUT: &str = "\
8,2025-01-01T14:56:52,[149543:7|649302:7],100.50
3,2025-01-01T09:10:00,[149543:3],50.25
broken
";

#[test]
fn test_report_round_trip_through_file() {
    let aggregation = aggregate(INPUT).unwrap();
    let report = to_report("sales.txt", &aggregation);

    let dir = tempdir().unwrap();
    let path = dir.path().join("out/report.json");
    write_report(&report, &path).unwrap();

    let loaded = read_report(&path).unwrap();
    assert_eq!(loaded.metrics, aggregation.snapshot);
    assert_eq!(loaded.lines_skipped, 1);
    assert_eq!(loaded.transactions_processed, 2);
}

#[test]
fn test_report_json_shape() {
    let aggregation = aggregate(INPUT).unwrap();
    let json = report_to_string(&to_report("sales.txt", &aggregation)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["metrics"]["highestSalesValue"]["date"], "2025-01-01");
    assert_eq!(value["metrics"]["highestSalesStaff"]["sales"], 100.5);
    assert_eq!(value["metrics"]["highestHour"]["hour"], 14);
    assert_eq!(value["warnings"][0]["lineNumber"], 3);
    assert_eq!(value["warnings"][0]["kind"], "LineProcessingError");
}

#[test]
fn test_read_report_missing_file() {
    assert!(read_report(Path::new("definitely/not/here.json")).is_err());
}

#[test]
fn test_summary_mentions_every_metric() {
    let aggregation = aggregate(INPUT).unwrap();
    let text = render_summary(&aggregation.snapshot, &aggregation.warnings);

    assert!(text.contains("Highest Sales Volume: 2025-01-01 (17 items)"));
    assert!(text.contains("Highest Sales Value:  2025-01-01 (150.75)"));
    assert!(text.contains("Most Sold Product:    149543 (10 units)"));
    assert!(text.contains("Top Staff:            8 (100.50)"));
    assert!(text.contains("Peak Hour:            14:00"));
}

#[test]
fn test_store_saves_snapshot() {
    let aggregation = aggregate(INPUT).unwrap();
    let dir = tempdir().unwrap();
    let store = AnalyticsStore::open(dir.path().join("saved.json"));

    let record = new_saved_analytics(Path::new("uploads/jan.csv"), &aggregation.snapshot, "Jan");
    store.save(record.clone()).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records, vec![record]);
    assert_eq!(records[0].filename, "jan");
}
