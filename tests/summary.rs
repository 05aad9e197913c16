use std::fs;

use diskfit::config::{AnalysisDefaults, CutoffTexts};
use diskfit::ctx::Ctx;
use diskfit::io::summary::format_summary;
use diskfit::pipeline::Pipeline;
use diskfit::schema::v1::Mode;
use tempfile::TempDir;

#[test]
fn summary_format() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("data.csv");
    fs::write(&input, "32,10\n20,10\n16,15\n8,20\n4,25\n2,30\n1,35\n0.5,40\n").unwrap();
    let mut ctx = Ctx::new(
        input,
        tmp.path().join("out"),
        CutoffTexts::from_defaults(&AnalysisDefaults::default_v1()),
        Mode::Disk,
        false,
        Some("E. coli".to_string()),
        false,
        false,
        "0.0.0-test",
    );
    Pipeline::full().run(&mut ctx).unwrap();

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("diskfit v"));
    assert!(s.contains("Strain: E. coli"));
    assert!(s.contains("Input: 8 samples, mode=disk, data=disk"));
    assert!(s.contains("Cutoffs: >=21 (S) / 20-20 (I) / <=19 (R)"));
    assert!(s.contains("Errors: very_major=0 major=0 minor=0 (of 8)"));
    assert!(s.contains("Note: it was possible to fit the data"));
    assert!(!s.contains("Agreement"));
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn summary_requires_a_finished_run() {
    let ctx = Ctx::new(
        "input.csv".into(),
        "out".into(),
        CutoffTexts::from_defaults(&AnalysisDefaults::default_v1()),
        Mode::Disk,
        false,
        None,
        false,
        false,
        "0.0.0-test",
    );
    assert!(format_summary(&ctx).is_err());
}
