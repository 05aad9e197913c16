use diskfit::config::{CutoffTexts, SanityLimits};
use diskfit::error::AnalysisError;
use diskfit::model::Category::{Intermediate as I, Resistant as R, Susceptible as S};
use diskfit::model::taxonomy::{
    Band, ErrorClass, band_for, classify_error, update_error_tables,
    update_error_tables_from_text,
};
use diskfit::model::{CutoffPair, Dataset, MicCutoffPair};
use diskfit::schema::v1::Mode;

const MIC: MicCutoffPair = MicCutoffPair { s: 4.0, r: 16.0 };

#[test]
fn error_class_for_every_pair() {
    // (predicted, actual)
    assert_eq!(classify_error(R, R), ErrorClass::None);
    assert_eq!(classify_error(I, I), ErrorClass::None);
    assert_eq!(classify_error(S, S), ErrorClass::None);
    assert_eq!(classify_error(S, R), ErrorClass::VeryMajor);
    assert_eq!(classify_error(R, S), ErrorClass::Major);
    assert_eq!(classify_error(I, R), ErrorClass::Minor);
    assert_eq!(classify_error(I, S), ErrorClass::Minor);
    assert_eq!(classify_error(R, I), ErrorClass::Minor);
    assert_eq!(classify_error(S, I), ErrorClass::Minor);
}

#[test]
fn only_matching_categories_are_error_free() {
    for actual in [R, I, S] {
        for predicted in [R, I, S] {
            let class = classify_error(predicted, actual);
            assert_eq!(class == ErrorClass::None, predicted == actual);
        }
    }
}

#[test]
fn bands_split_on_breakpoints() {
    assert_eq!(band_for(32.0, MIC), Band::IPlus2);
    assert_eq!(band_for(16.0, MIC), Band::IPlus1Minus1);
    assert_eq!(band_for(8.0, MIC), Band::IPlus1Minus1);
    assert_eq!(band_for(4.0, MIC), Band::IPlus1Minus1);
    assert_eq!(band_for(2.0, MIC), Band::IMinus2);
}

fn mixed_disk_dataset() -> Dataset {
    let mics = [32.0, 2.0, 8.0, 4.0, 16.0];
    let zones = [35.0, 10.0, 20.0, 12.0, 25.0];
    Dataset::from_columns(&mics, &zones).unwrap()
}

#[test]
fn disk_tables_count_each_error_class() {
    let tables = update_error_tables(
        &mixed_disk_dataset(),
        CutoffPair { s: 32.0, r: 12.0 },
        MIC,
        Mode::Disk,
    )
    .unwrap();

    assert_eq!(tables.overall.sample_count, 5);
    assert_eq!(tables.overall.very_major_count, 1);
    assert_eq!(tables.overall.major_count, 2);
    assert_eq!(tables.overall.minor_count, 1);
    assert_eq!(tables.overall.error_count(), 4);

    assert_eq!(tables.bands.i_plus2.sample_count, 1);
    assert_eq!(tables.bands.i_plus2.very_major_count, 1);
    assert_eq!(tables.bands.i_plus1_minus1.sample_count, 3);
    assert_eq!(tables.bands.i_plus1_minus1.major_count, 1);
    assert_eq!(tables.bands.i_plus1_minus1.minor_count, 1);
    assert_eq!(tables.bands.i_minus2.sample_count, 1);
    assert_eq!(tables.bands.i_minus2.major_count, 1);

    assert_eq!(tables.confusion.get(R, S), 1);
    assert_eq!(tables.confusion.get(S, R), 2);
    assert_eq!(tables.confusion.get(I, I), 1);
    assert_eq!(tables.confusion.get(R, I), 1);
    assert_eq!(tables.confusion.total(), 5);
    assert!(tables.agreement.is_none());
}

#[test]
fn band_counts_sum_to_total() {
    let tables = update_error_tables(
        &mixed_disk_dataset(),
        CutoffPair { s: 30.0, r: 14.0 },
        MIC,
        Mode::Disk,
    )
    .unwrap();
    let b = &tables.bands;
    assert_eq!(
        b.i_plus2.sample_count + b.i_plus1_minus1.sample_count + b.i_minus2.sample_count,
        tables.overall.sample_count
    );
    assert_eq!(
        b.i_plus2.error_count() + b.i_plus1_minus1.error_count() + b.i_minus2.error_count(),
        tables.overall.error_count()
    );
}

#[test]
fn mic_vs_mic_agreement() {
    // eight exact matches, one major (1 vs 32), one minor (16 vs 8)
    let mics = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 1.0, 2.0, 1.0, 16.0];
    let alt = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 1.0, 2.0, 32.0, 8.0];
    let dataset = Dataset::from_columns(&mics, &alt).unwrap();
    let tables = update_error_tables(
        &dataset,
        CutoffPair { s: 4.0, r: 16.0 },
        MIC,
        Mode::MicVsMic,
    )
    .unwrap();

    assert_eq!(tables.overall.major_count, 1);
    assert_eq!(tables.overall.minor_count, 1);
    let agreement = tables.agreement.unwrap();
    assert_eq!(agreement.categorical, 80.0);
    assert_eq!(agreement.essential, 90.0);
}

#[test]
fn empty_dataset_is_rejected() {
    let err = update_error_tables(
        &Dataset::default(),
        CutoffPair { s: 32.0, r: 12.0 },
        MIC,
        Mode::Disk,
    )
    .unwrap_err();
    assert_eq!(err, AnalysisError::EmptyDataset);
}

#[test]
fn non_numeric_cutoff_text_is_reported() {
    let texts = CutoffTexts {
        mic_s: "4".to_string(),
        mic_r: "16".to_string(),
        x_s: "thirty".to_string(),
        x_r: "12".to_string(),
    };
    let err = update_error_tables_from_text(
        &mixed_disk_dataset(),
        &texts,
        &SanityLimits::default_v1(),
        Mode::Disk,
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::NonNumericCutoff { .. }));
    assert!(err.to_string().contains("thirty"));
}
