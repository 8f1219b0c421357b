//! The dive record and dive-computer modes.

use std::fmt;

use chrono::{DateTime, Utc};

/// A single logged dive.
///
/// The engine treats dives as an opaque data source: classification values
/// are derived from these fields, and records are never mutated or retained
/// beyond a single aggregation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Dive {
    /// Moment the dive started. All calendar binning is done in UTC so a
    /// dive never drifts between buckets with the local timezone.
    pub when: DateTime<Utc>,
    /// Maximum depth reached, in millimetres.
    pub max_depth_mm: i32,
    /// Raw dive-computer mode. Logs written by newer or older software may
    /// carry values outside the known range; see [`DiveMode::from_raw`].
    pub dive_mode: i32,
    /// Comma-separated buddy names.
    pub buddy: String,
    /// Comma-separated dive-guide names.
    pub dive_guide: String,
}

impl Dive {
    /// Create a new dive record
    pub fn new(
        when: DateTime<Utc>,
        max_depth_mm: i32,
        dive_mode: i32,
        buddy: impl Into<String>,
        dive_guide: impl Into<String>,
    ) -> Self {
        Self {
            when,
            max_depth_mm,
            dive_mode,
            buddy: buddy.into(),
            dive_guide: dive_guide.into(),
        }
    }
}

/// Breathing apparatus mode reported by the dive computer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiveMode {
    /// Open circuit
    OpenCircuit,
    /// Closed-circuit rebreather
    Ccr,
    /// Passive semi-closed rebreather
    Pscr,
    /// Freedive (no apparatus)
    Freedive,
}

impl DiveMode {
    /// All known modes, in raw-index order
    pub const ALL: [DiveMode; 4] = [
        DiveMode::OpenCircuit,
        DiveMode::Ccr,
        DiveMode::Pscr,
        DiveMode::Freedive,
    ];

    /// Interpret a raw dive-computer mode value.
    ///
    /// Values outside the known range are clamped to open circuit rather
    /// than treated as an error, tolerating format skew in older or newer
    /// dive logs.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::OpenCircuit,
            1 => Self::Ccr,
            2 => Self::Pscr,
            3 => Self::Freedive,
            _ => Self::OpenCircuit,
        }
    }

    /// Stable index of this mode, usable as a bin value
    pub fn index(&self) -> i64 {
        match self {
            Self::OpenCircuit => 0,
            Self::Ccr => 1,
            Self::Pscr => 2,
            Self::Freedive => 3,
        }
    }

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenCircuit => "OC",
            Self::Ccr => "CCR",
            Self::Pscr => "pSCR",
            Self::Freedive => "Freedive",
        }
    }
}

impl fmt::Display for DiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in DiveMode::ALL {
            assert_eq!(DiveMode::from_raw(mode.index() as i32), mode);
        }
    }

    #[test]
    fn test_out_of_range_mode_clamps_to_open_circuit() {
        assert_eq!(DiveMode::from_raw(-1), DiveMode::OpenCircuit);
        assert_eq!(DiveMode::from_raw(4), DiveMode::OpenCircuit);
        assert_eq!(DiveMode::from_raw(i32::MAX), DiveMode::OpenCircuit);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(DiveMode::OpenCircuit.to_string(), "OC");
        assert_eq!(DiveMode::Pscr.label(), "pSCR");
    }
}
