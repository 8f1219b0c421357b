//! Dive-computer mode axis.

use crate::binners::{bin_dives_by, count_dives_by};
use crate::dive::{Dive, DiveMode};
use crate::traits::{Axis, Binner};
use crate::types::{AxisKind, Bin, BinnedCount, BinnedDives};
use crate::units::Preferences;

fn mode_of(dive: &Dive) -> i64 {
    DiveMode::from_raw(dive.dive_mode).index()
}

fn mode_bin(index: i64) -> Bin {
    // index comes from DiveMode::index, so the clamp never fires here.
    let mode = DiveMode::from_raw(index as i32);
    Bin::new(index, mode.label())
}

/// Bins dives by breathing apparatus mode
#[derive(Debug, Clone, Copy, Default)]
pub struct DiveModeBinner;

impl Binner for DiveModeBinner {
    fn bin_dives<'a>(&self, dives: &[&'a Dive]) -> Vec<BinnedDives<'a>> {
        bin_dives_by(dives, mode_of, mode_bin)
    }

    fn count_dives(&self, dives: &[&Dive]) -> Vec<BinnedCount> {
        count_dives_by(dives, mode_of, mode_bin)
    }
}

/// The dive-mode axis: a single binner
#[derive(Debug, Clone, Copy, Default)]
pub struct DiveModeAxis {
    binner: DiveModeBinner,
}

impl Axis for DiveModeAxis {
    fn kind(&self) -> AxisKind {
        AxisKind::Discrete
    }

    fn name(&self) -> String {
        "Dive mode".to_string()
    }

    fn binners(&self, _prefs: &Preferences) -> Vec<&dyn Binner> {
        vec![&self.binner]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::UNNAMED_BINNER;
    use chrono::{TimeZone, Utc};

    fn dive_with_mode(raw: i32) -> Dive {
        Dive::new(
            Utc.with_ymd_and_hms(2021, 7, 1, 8, 0, 0).unwrap(),
            15_000,
            raw,
            "",
            "",
        )
    }

    #[test]
    fn test_modes_bin_by_index() {
        let dives = [dive_with_mode(1), dive_with_mode(0), dive_with_mode(1)];
        let refs: Vec<&Dive> = dives.iter().collect();

        let counts = DiveModeBinner.count_dives(&refs);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].bin.format(), "OC");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].bin.format(), "CCR");
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn test_unknown_modes_fold_into_open_circuit() {
        let dives = [dive_with_mode(42), dive_with_mode(-3), dive_with_mode(0)];
        let refs: Vec<&Dive> = dives.iter().collect();

        let counts = DiveModeBinner.count_dives(&refs);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].bin.format(), "OC");
        assert_eq!(counts[0].count, 3);
    }

    #[test]
    fn test_single_binner_keeps_placeholder_name() {
        let axis = DiveModeAxis::default();
        let prefs = Preferences::default();
        let binners = axis.binners(&prefs);
        assert_eq!(binners.len(), 1);
        assert_eq!(binners[0].name(), UNNAMED_BINNER);
    }
}
