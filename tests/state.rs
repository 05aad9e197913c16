use diskfit::config::{AnalysisDefaults, CutoffField};
use diskfit::error::AnalysisError;
use diskfit::model::{CutoffPair, Dataset};
use diskfit::schema::v1::{CutoffOrigin, Mode};
use diskfit::state::AnalysisState;

fn loaded() -> AnalysisState {
    let dataset = Dataset::from_columns(&[32.0, 8.0, 2.0], &[10.0, 20.0, 35.0]).unwrap();
    AnalysisState::new(&AnalysisDefaults::default_v1())
        .with_dataset(dataset)
        .refresh_error_tables()
        .unwrap()
}

#[test]
fn defaults_seed_the_session() {
    let state = AnalysisState::new(&AnalysisDefaults::default_v1());
    assert!(state.dataset().is_none());
    assert_eq!(state.mode(), Mode::Disk);
    assert_eq!(state.x_cutoffs(), CutoffPair { s: 32.0, r: 12.0 });
    assert_eq!(state.mic_cutoffs().s, 4.0);
    assert_eq!(state.mic_cutoffs().r, 16.0);
    assert_eq!(state.strain_name(), "Acinetobacter baumannii");
    assert!(state.error_tables().is_none());
}

#[test]
fn refresh_without_dataset_fails() {
    let state = AnalysisState::new(&AnalysisDefaults::default_v1());
    assert_eq!(
        state.refresh_error_tables().unwrap_err(),
        AnalysisError::NoDataset
    );
}

#[test]
fn live_edit_ignores_unparseable_text() {
    let state = loaded();
    let next = state.with_live_edit(CutoffField::XSusceptible, "3x");
    assert_eq!(next, state);
    assert!(next.error_tables().is_some());
}

#[test]
fn live_edit_applies_and_clears_tables() {
    let state = loaded();
    let next = state.with_live_edit(CutoffField::XSusceptible, "30");
    assert_eq!(next.x_cutoffs().s, 30.0);
    assert_eq!(next.origin(), CutoffOrigin::Manual);
    assert!(next.error_tables().is_none());
    // the original is untouched
    assert_eq!(state.x_cutoffs().s, 32.0);
    assert!(state.error_tables().is_some());
}

#[test]
fn mode_and_data_changes_clear_tables() {
    let state = loaded();
    assert!(state.with_mode(Mode::MicVsMic).error_tables().is_none());
    let other = Dataset::from_columns(&[1.0], &[30.0]).unwrap();
    assert!(state.with_dataset(other).error_tables().is_none());
}

#[test]
fn refreshed_tables_follow_new_cutoffs() {
    let state = loaded();
    assert_eq!(state.error_tables().unwrap().overall.error_count(), 0);
    let edited = state
        .with_live_edit(CutoffField::XResistant, "25")
        .refresh_error_tables()
        .unwrap();
    // 20 mm now reads resistant while its MIC is intermediate
    assert_eq!(edited.error_tables().unwrap().overall.minor_count, 1);
}
