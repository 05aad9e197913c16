use diskfit::io::table::{cutoff_annotation, error_line, result_table};
use diskfit::model::taxonomy::{ErrorRecord, update_error_tables};
use diskfit::model::{CutoffPair, Dataset, MicCutoffPair};
use diskfit::schema::v1::Mode;

#[test]
fn disk_annotation_with_intermediate_range() {
    let text = cutoff_annotation(CutoffPair { s: 32.0, r: 12.0 }, Mode::Disk);
    assert_eq!(text, ">=32 (S) / 13-31 (I) / <=12 (R)");
    let text = cutoff_annotation(CutoffPair { s: 21.0, r: 19.0 }, Mode::Disk);
    assert_eq!(text, ">=21 (S) / 20-20 (I) / <=19 (R)");
}

#[test]
fn disk_annotation_without_intermediate_range() {
    let text = cutoff_annotation(CutoffPair { s: 20.0, r: 19.0 }, Mode::Disk);
    assert_eq!(text, ">=20 (S) / <=19 (R)");
}

#[test]
fn mic_annotation_uses_adjacent_bins() {
    let text = cutoff_annotation(CutoffPair { s: 4.0, r: 16.0 }, Mode::MicVsMic);
    assert_eq!(text, "<=4 (S) / 8-8 (I) / >=16 (R)");
    let text = cutoff_annotation(CutoffPair { s: 4.0, r: 8.0 }, Mode::MicVsMic);
    assert_eq!(text, "<=4 (S) / >=8 (R)");
}

#[test]
fn error_line_with_percentages() {
    let record = ErrorRecord {
        sample_count: 4,
        very_major_count: 1,
        major_count: 0,
        minor_count: 1,
    };
    assert_eq!(
        error_line("", ">=I+2", &record),
        vec!["", ">=I+2", "4", "1 (25)", "0 (0)", "1 (25)"]
    );
}

#[test]
fn error_line_for_empty_band() {
    let line = error_line("", "<=I-2", &ErrorRecord::default());
    assert_eq!(line, vec!["", "<=I-2", "0", "0 (0)", "0 (0)", "0 (0)"]);
}

#[test]
fn percentages_round_to_two_decimals() {
    let record = ErrorRecord {
        sample_count: 3,
        very_major_count: 1,
        major_count: 0,
        minor_count: 0,
    };
    assert_eq!(error_line("", "Total", &record)[3], "1 (33.33)");
}

#[test]
fn mic_table_carries_agreement_rows() {
    let dataset = Dataset::from_columns(&[1.0, 32.0], &[1.0, 32.0]).unwrap();
    let tables = update_error_tables(
        &dataset,
        CutoffPair { s: 4.0, r: 16.0 },
        MicCutoffPair { s: 4.0, r: 16.0 },
        Mode::MicVsMic,
    )
    .unwrap();
    let rows = result_table("E. coli", Mode::MicVsMic, CutoffPair { s: 4.0, r: 16.0 }, &tables);
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0][0], "MIC breakpoints (mg/L)");
    assert_eq!(rows[2][0], "E. coli");
    assert_eq!(rows[3][1], "Total");
    assert_eq!(rows[7][0], "Essential agreement (%)");
    assert_eq!(rows[7][1], "100");
    assert_eq!(rows[8][0], "Categorical agreement (%)");
}
