use crate::error::AnalysisError;
use crate::model::{CutoffPair, MicCutoffPair};
use crate::schema::v1::Mode;

#[derive(Debug, Clone)]
pub struct AnalysisDefaults {
    pub mic_cutoff_s: f64,
    pub mic_cutoff_r: f64,
    pub x_cutoff_s: f64,
    pub x_cutoff_r: f64,
    pub strain_name: String,
    pub mode: Mode,
    pub use_manual_cutoffs: bool,
}

impl AnalysisDefaults {
    pub fn default_v1() -> Self {
        Self {
            mic_cutoff_s: 4.0,
            mic_cutoff_r: 16.0,
            x_cutoff_s: 32.0,
            x_cutoff_r: 12.0,
            strain_name: "Acinetobacter baumannii".to_string(),
            mode: Mode::Disk,
            use_manual_cutoffs: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SanityLimits {
    pub mic_breakpoint_min: f64,
    pub mic_breakpoint_max: f64,
}

impl SanityLimits {
    pub const fn default_v1() -> Self {
        Self {
            mic_breakpoint_min: 0.016,
            mic_breakpoint_max: 256.0,
        }
    }
}

/// The four editable cutoff fields of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffField {
    MicSusceptible,
    MicResistant,
    XSusceptible,
    XResistant,
}

impl CutoffField {
    pub fn label(self) -> &'static str {
        match self {
            Self::MicSusceptible => "susceptible MIC breakpoint",
            Self::MicResistant => "resistant MIC breakpoint",
            Self::XSusceptible => "susceptible cutoff",
            Self::XResistant => "resistant cutoff",
        }
    }
}

/// Commit-path parsing: anything that is not a finite number is reported.
pub fn parse_cutoff(text: &str, field: CutoffField) -> Result<f64, AnalysisError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AnalysisError::NonNumericCutoff {
            field: field.label(),
            text: trimmed.to_string(),
        }),
    }
}

/// Live-edit parsing: unparseable text yields `None` and the caller keeps
/// the previous value.
pub fn parse_cutoff_live(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn check_range(
    value: f64,
    field: CutoffField,
    min: f64,
    max: f64,
) -> Result<f64, AnalysisError> {
    if value < min || value > max {
        return Err(AnalysisError::CutoffOutOfRange {
            field: field.label(),
            value,
            min,
            max,
        });
    }
    Ok(value)
}

pub fn check_non_negative(value: f64, field: CutoffField) -> Result<f64, AnalysisError> {
    if value < 0.0 {
        return Err(AnalysisError::NegativeCutoff {
            field: field.label(),
            value,
        });
    }
    Ok(value)
}

/// Raw cutoff text as entered by the user, before commit-path validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutoffTexts {
    pub mic_s: String,
    pub mic_r: String,
    pub x_s: String,
    pub x_r: String,
}

impl CutoffTexts {
    pub fn from_defaults(defaults: &AnalysisDefaults) -> Self {
        Self {
            mic_s: defaults.mic_cutoff_s.to_string(),
            mic_r: defaults.mic_cutoff_r.to_string(),
            x_s: defaults.x_cutoff_s.to_string(),
            x_r: defaults.x_cutoff_r.to_string(),
        }
    }

    /// MIC breakpoints, parsed and range-checked.
    pub fn parse_mic(&self, limits: &SanityLimits) -> Result<MicCutoffPair, AnalysisError> {
        let s = parse_cutoff(&self.mic_s, CutoffField::MicSusceptible)?;
        let r = parse_cutoff(&self.mic_r, CutoffField::MicResistant)?;
        let s = check_range(
            s,
            CutoffField::MicSusceptible,
            limits.mic_breakpoint_min,
            limits.mic_breakpoint_max,
        )?;
        let r = check_range(
            r,
            CutoffField::MicResistant,
            limits.mic_breakpoint_min,
            limits.mic_breakpoint_max,
        )?;
        Ok(MicCutoffPair { s, r })
    }

    /// x cutoffs, parsed and required non-negative.
    pub fn parse_x(&self) -> Result<CutoffPair, AnalysisError> {
        let s = parse_cutoff(&self.x_s, CutoffField::XSusceptible)?;
        let r = parse_cutoff(&self.x_r, CutoffField::XResistant)?;
        let s = check_non_negative(s, CutoffField::XSusceptible)?;
        let r = check_non_negative(r, CutoffField::XResistant)?;
        Ok(CutoffPair { s, r })
    }
}
