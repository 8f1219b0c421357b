//! Maximum depth binned in fixed metre or foot steps.
//!
//! The axis exposes one binner per configured step size; which set is
//! visible depends on the caller's live unit preference.

use crate::binners::{bin_dives_by, count_dives_by};
use crate::dive::Dive;
use crate::traits::{Axis, Binner};
use crate::types::{AxisKind, Bin, BinnedCount, BinnedDives};
use crate::units::{mm_to_feet, LengthUnit, Preferences};

/// Step sizes offered when depths are shown in metres
pub const METRIC_STEPS: [i64; 3] = [5, 10, 20];
/// Step sizes offered when depths are shown in feet
pub const IMPERIAL_STEPS: [i64; 3] = [15, 30, 60];

/// Bins dives into fixed-width depth buckets.
///
/// The bucket index is the floor-divided maximum depth: metric buckets
/// truncate to whole metres first, imperial buckets round to the nearest
/// whole foot first.
#[derive(Debug, Clone, Copy)]
pub struct DepthBinner {
    step: i64,
    unit: LengthUnit,
}

impl DepthBinner {
    /// Create a depth binner with the given step size
    pub fn new(step: i64, unit: LengthUnit) -> Self {
        Self {
            step: step.max(1),
            unit,
        }
    }

    /// The step size of this binner, in its unit
    pub fn step(&self) -> i64 {
        self.step
    }

    /// The unit this binner buckets in
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    fn bucket_of(&self, dive: &Dive) -> i64 {
        match self.unit {
            LengthUnit::Meters => i64::from(dive.max_depth_mm / 1000) / self.step,
            LengthUnit::Feet => (mm_to_feet(dive.max_depth_mm).round() as i64) / self.step,
        }
    }

    fn bucket_bin(&self, bucket: i64) -> Bin {
        let lower = bucket * self.step;
        let upper = (bucket + 1) * self.step;
        Bin::new(
            bucket,
            format!("{lower}\u{2013}{upper} {}", self.unit.abbreviation()),
        )
    }
}

impl Binner for DepthBinner {
    fn name(&self) -> String {
        format!("in {} {} steps", self.step, self.unit.abbreviation())
    }

    fn bin_dives<'a>(&self, dives: &[&'a Dive]) -> Vec<BinnedDives<'a>> {
        bin_dives_by(dives, |d| self.bucket_of(d), |b| self.bucket_bin(b))
    }

    fn count_dives(&self, dives: &[&Dive]) -> Vec<BinnedCount> {
        count_dives_by(dives, |d| self.bucket_of(d), |b| self.bucket_bin(b))
    }
}

/// The depth axis: metric or imperial step binners, chosen by the live
/// unit preference
#[derive(Debug, Clone)]
pub struct DepthAxis {
    metric: Vec<DepthBinner>,
    imperial: Vec<DepthBinner>,
}

impl Default for DepthAxis {
    fn default() -> Self {
        Self {
            metric: METRIC_STEPS
                .iter()
                .map(|&step| DepthBinner::new(step, LengthUnit::Meters))
                .collect(),
            imperial: IMPERIAL_STEPS
                .iter()
                .map(|&step| DepthBinner::new(step, LengthUnit::Feet))
                .collect(),
        }
    }
}

impl Axis for DepthAxis {
    fn kind(&self) -> AxisKind {
        AxisKind::Numeric
    }

    fn name(&self) -> String {
        "Depth".to_string()
    }

    fn binners(&self, prefs: &Preferences) -> Vec<&dyn Binner> {
        let set = match prefs.length_unit {
            LengthUnit::Meters => &self.metric,
            LengthUnit::Feet => &self.imperial,
        };
        log::debug!(
            "depth axis exposing {} binners for unit {}",
            set.len(),
            prefs.length_unit
        );
        set.iter().map(|binner| binner as &dyn Binner).collect()
    }
}
