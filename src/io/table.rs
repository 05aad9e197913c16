use crate::io::{format_value, round2};
use crate::model::CutoffPair;
use crate::model::bins::{STANDARD_MIC_VALUES, mic_index};
use crate::model::taxonomy::{ErrorRecord, ErrorTables};
use crate::schema::v1::Mode;

pub const BAND_LABELS: [&str; 3] = [">=I+2", "I+1 to I-1", "<=I-2"];

/// Breakpoint text with the inequality directions of the active mode.
pub fn cutoff_annotation(cutoffs: CutoffPair, mode: Mode) -> String {
    let s = format_value(cutoffs.s);
    let r = format_value(cutoffs.r);
    match mode {
        Mode::Disk => {
            if cutoffs.s > cutoffs.r + 1.0 {
                format!(
                    ">={} (S) / {}-{} (I) / <={} (R)",
                    s,
                    format_value(cutoffs.r + 1.0),
                    format_value(cutoffs.s - 1.0),
                    r
                )
            } else {
                format!(">={} (S) / <={} (R)", s, r)
            }
        }
        Mode::MicVsMic => match (mic_index(cutoffs.s), mic_index(cutoffs.r)) {
            (Some(is), Some(ir)) if ir > is + 1 => format!(
                "<={} (S) / {}-{} (I) / >={} (R)",
                s,
                format_value(STANDARD_MIC_VALUES[is + 1]),
                format_value(STANDARD_MIC_VALUES[ir - 1]),
                r
            ),
            _ => format!("<={} (S) / >={} (R)", s, r),
        },
    }
}

fn count_with_percent(count: u64, total: u64) -> String {
    let pct = round2(100.0 * count as f64 / total as f64);
    format!("{} ({})", count, format_value(pct))
}

pub fn error_line(caption: &str, range: &str, record: &ErrorRecord) -> Vec<String> {
    let mut line = vec![
        caption.to_string(),
        range.to_string(),
        record.sample_count.to_string(),
    ];
    if record.sample_count > 0 {
        line.push(count_with_percent(record.very_major_count, record.sample_count));
        line.push(count_with_percent(record.major_count, record.sample_count));
        line.push(count_with_percent(record.minor_count, record.sample_count));
    } else {
        line.extend(std::iter::repeat_n("0 (0)".to_string(), 3));
    }
    line
}

/// Rows of the error table shown to the user and written on export.
pub fn result_table(
    strain_name: &str,
    mode: Mode,
    cutoffs: CutoffPair,
    tables: &ErrorTables,
) -> Vec<Vec<String>> {
    let title = match mode {
        Mode::Disk => "Proposed Disk Breakpoint (mm)",
        Mode::MicVsMic => "MIC breakpoints (mg/L)",
    };
    let mut rows = vec![
        row(&[title, "Range", "No. Isolates", "", "No. of Errors", ""]),
        row(&["", "", "", "Very major (%)", "Major (%)", "Minor (%)"]),
        row(&[strain_name, "", "", "", "", ""]),
    ];
    rows.push(error_line(
        &cutoff_annotation(cutoffs, mode),
        "Total",
        &tables.overall,
    ));
    rows.push(error_line("", BAND_LABELS[0], &tables.bands.i_plus2));
    rows.push(error_line("", BAND_LABELS[1], &tables.bands.i_plus1_minus1));
    rows.push(error_line("", BAND_LABELS[2], &tables.bands.i_minus2));

    if let Some(agreement) = &tables.agreement {
        let essential = format_value(round2(agreement.essential));
        let categorical = format_value(round2(agreement.categorical));
        rows.push(row(&["Essential agreement (%)", &essential, "", "", "", ""]));
        rows.push(row(&["Categorical agreement (%)", &categorical, "", "", "", ""]));
    }
    rows
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
