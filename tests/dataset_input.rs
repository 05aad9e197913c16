use std::fs;
use std::io::Write;

use diskfit::error::AnalysisError;
use diskfit::io::dataset::{parse_dataset, read_dataset};
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

#[test]
fn parses_two_column_rows_and_skips_blank_lines() {
    let data = "4,20\n\n16,12\n0.5, 35\n";
    let dataset = parse_dataset(data.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.samples()[0].y, 4.0);
    assert_eq!(dataset.samples()[0].x, 20.0);
    assert_eq!(dataset.x_values(), vec![20.0, 12.0, 35.0]);
}

#[test]
fn three_columns_reject_the_file() {
    let err = parse_dataset("4,20\n4,20,1\n".as_bytes()).unwrap_err();
    match err {
        AnalysisError::InvalidDataset(msg) => assert!(msg.contains("line 2")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn non_numeric_field_rejects_the_file() {
    let err = parse_dataset("4,20\nabc,12\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidDataset(_)));
}

#[test]
fn negative_value_rejects_the_file() {
    let err = parse_dataset("4,20\n-1,12\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidDataset(_)));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(
        parse_dataset("\n\n".as_bytes()).unwrap_err(),
        AnalysisError::EmptyDataset
    );
}

#[test]
fn reads_plain_and_gzip_files() {
    let tmp = TempDir::new().unwrap();
    let plain = tmp.path().join("data.csv");
    fs::write(&plain, "4,20\n16,12\n").unwrap();
    assert_eq!(read_dataset(&plain).unwrap().len(), 2);

    let gz = tmp.path().join("data.csv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"4,20\n16,12\n2,30\n").unwrap();
    fs::write(&gz, enc.finish().unwrap()).unwrap();
    assert_eq!(read_dataset(&gz).unwrap().len(), 3);
}

#[test]
fn missing_file_reports_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.csv");
    let err = read_dataset(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.csv"));
}
