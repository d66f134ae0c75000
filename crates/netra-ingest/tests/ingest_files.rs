use std::fs;
use std::path::PathBuf;

use netra_core::DType;
use netra_ingest::{scan_file, FileFormat, IngestError};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("netra_ingest_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn csv_infers_types_and_nulls() {
    let path = temp_file(
        "people.csv",
        "age,salary,city,active\n25,50000.0,Groningen,true\n30,60000.0,Thrissur,false\n,,null,\n",
    );

    let (frame, format) = scan_file(&path).expect("scan csv");
    assert_eq!(format, FileFormat::Csv);
    assert_eq!(format.label(), "CSV");
    assert_eq!(frame.row_count(), 3);
    assert_eq!(frame.column_count(), 4);

    assert_eq!(frame.column("age").map(|c| c.dtype()), Some(DType::Int));
    assert_eq!(
        frame.column("salary").map(|c| c.dtype()),
        Some(DType::Float)
    );
    assert_eq!(frame.column("city").map(|c| c.dtype()), Some(DType::Utf8));
    assert_eq!(frame.column("active").map(|c| c.dtype()), Some(DType::Bool));

    assert_eq!(frame.column("age").map(|c| c.null_count()), Some(1));
    assert_eq!(frame.column("city").map(|c| c.null_count()), Some(1));
}

#[test]
fn tsv_uses_tab_delimiter() {
    let path = temp_file("points.tsv", "x\ty\n1\t2\n3\t4\n");

    let (frame, format) = scan_file(&path).expect("scan tsv");
    assert_eq!(format, FileFormat::Tsv);
    assert_eq!(frame.row_count(), 2);
    assert_eq!(frame.column("y").map(|c| c.dtype()), Some(DType::Int));
}

#[test]
fn short_csv_rows_read_as_missing_cells() {
    let path = temp_file("ragged.csv", "a,b\n1,2\n3\n");

    let (frame, _) = scan_file(&path).expect("scan ragged csv");
    assert_eq!(frame.row_count(), 2);
    assert_eq!(frame.column("b").map(|c| c.null_count()), Some(1));
}

#[test]
fn json_extension_dispatches_on_shape() {
    let array = temp_file("events.json", r#"[{"a": 1}, {"a": 2}]"#);
    let (frame, format) = scan_file(&array).expect("scan json array");
    assert_eq!(format, FileFormat::Json);
    assert_eq!(format.label(), "JSON (Standard)");
    assert_eq!(frame.row_count(), 2);

    let ndjson = temp_file("events2.json", "{\"a\": 1}\n{\"a\": 2}\n{\"a\": 3}\n");
    let (frame, format) = scan_file(&ndjson).expect("scan ndjson-shaped json");
    assert_eq!(format, FileFormat::Ndjson);
    assert_eq!(frame.row_count(), 3);
}

#[test]
fn ndjson_extension_reads_lines() {
    let path = temp_file("logs.ndjson", "{\"level\": \"info\"}\n\n{\"level\": \"warn\"}\n");
    let (frame, format) = scan_file(&path).expect("scan ndjson");
    assert_eq!(format, FileFormat::Ndjson);
    assert_eq!(frame.row_count(), 2);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = temp_file("data.parquet", "not parquet");
    match scan_file(&path) {
        Err(IngestError::UnsupportedFormat(ext)) => assert_eq!(ext, "parquet"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}
