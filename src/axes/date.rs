//! Dive date binned by year, quarter or month.
//!
//! All calendar breakdowns use UTC so bucket boundaries do not drift with
//! the local timezone. Calendar week is defined differently in different
//! parts of the world and therefore omitted.

use chrono::Datelike;

use crate::binners::{bin_dives_by, count_dives_by};
use crate::dive::Dive;
use crate::traits::{Axis, Binner};
use crate::types::{AxisKind, Bin, BinnedCount, BinnedDives};
use crate::units::Preferences;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn year_of(dive: &Dive) -> i64 {
    i64::from(dive.when.year())
}

fn quarter_of(dive: &Dive) -> (i64, i64) {
    let quarter = match dive.when.month0() {
        0..=2 => 1,
        3..=5 => 2,
        6..=8 => 3,
        _ => 4,
    };
    (i64::from(dive.when.year()), quarter)
}

fn month_of(dive: &Dive) -> (i64, i64) {
    (i64::from(dive.when.year()), i64::from(dive.when.month0()))
}

fn year_bin(year: i64) -> Bin {
    Bin::new(year, year.to_string())
}

fn quarter_bin((year, quarter): (i64, i64)) -> Bin {
    Bin::new((year, quarter), format!("{year} Q{quarter}"))
}

fn month_bin((year, month0): (i64, i64)) -> Bin {
    Bin::new(
        (year, month0),
        format!("{} {year}", MONTH_NAMES[month0 as usize]),
    )
}

/// Bins dives by calendar year
#[derive(Debug, Clone, Copy, Default)]
pub struct YearBinner;

impl Binner for YearBinner {
    fn name(&self) -> String {
        "Yearly".to_string()
    }

    fn bin_dives<'a>(&self, dives: &[&'a Dive]) -> Vec<BinnedDives<'a>> {
        bin_dives_by(dives, year_of, year_bin)
    }

    fn count_dives(&self, dives: &[&Dive]) -> Vec<BinnedCount> {
        count_dives_by(dives, year_of, year_bin)
    }
}

/// Bins dives by calendar quarter
#[derive(Debug, Clone, Copy, Default)]
pub struct QuarterBinner;

impl Binner for QuarterBinner {
    fn name(&self) -> String {
        "Quarterly".to_string()
    }

    fn bin_dives<'a>(&self, dives: &[&'a Dive]) -> Vec<BinnedDives<'a>> {
        bin_dives_by(dives, quarter_of, quarter_bin)
    }

    fn count_dives(&self, dives: &[&Dive]) -> Vec<BinnedCount> {
        count_dives_by(dives, quarter_of, quarter_bin)
    }
}

/// Bins dives by calendar month
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthBinner;

impl Binner for MonthBinner {
    fn name(&self) -> String {
        "Monthly".to_string()
    }

    fn bin_dives<'a>(&self, dives: &[&'a Dive]) -> Vec<BinnedDives<'a>> {
        bin_dives_by(dives, month_of, month_bin)
    }

    fn count_dives(&self, dives: &[&Dive]) -> Vec<BinnedCount> {
        count_dives_by(dives, month_of, month_bin)
    }
}

/// The dive-date axis: yearly, quarterly and monthly binners
#[derive(Debug, Clone, Copy, Default)]
pub struct DateAxis {
    year: YearBinner,
    quarter: QuarterBinner,
    month: MonthBinner,
}

impl Axis for DateAxis {
    fn kind(&self) -> AxisKind {
        AxisKind::Discrete
    }

    fn name(&self) -> String {
        "Date".to_string()
    }

    fn binners(&self, _prefs: &Preferences) -> Vec<&dyn Binner> {
        vec![&self.year, &self.quarter, &self.month]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn dive_on(year: i32, month: u32, day: u32) -> Dive {
        Dive::new(
            Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap(),
            20_000,
            0,
            "",
            "",
        )
    }

    #[test]
    fn test_year_binning() {
        let dives = [dive_on(2020, 5, 1), dive_on(2019, 1, 1), dive_on(2020, 8, 9)];
        let refs: Vec<&Dive> = dives.iter().collect();

        let counts = YearBinner.count_dives(&refs);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].bin.format(), "2019");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].bin.format(), "2020");
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn test_quarter_boundaries() {
        // March (month index 2) is still Q1, April (index 3) is Q2.
        let march = dive_on(2019, 3, 31);
        let april = dive_on(2019, 4, 1);
        let refs: Vec<&Dive> = vec![&march, &april];

        let counts = QuarterBinner.count_dives(&refs);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].bin.format(), "2019 Q1");
        assert_eq!(counts[1].bin.format(), "2019 Q2");
    }

    #[test]
    fn test_quarters_order_chronologically_across_years() {
        let dives = [dive_on(2020, 2, 1), dive_on(2019, 11, 1)];
        let refs: Vec<&Dive> = dives.iter().collect();

        let counts = QuarterBinner.count_dives(&refs);
        assert_eq!(counts[0].bin.format(), "2019 Q4");
        assert_eq!(counts[1].bin.format(), "2020 Q1");
    }

    #[test]
    fn test_month_labels() {
        let d = dive_on(2019, 3, 15);
        let refs = [&d];

        let groups = MonthBinner.bin_dives(&refs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].bin.format(), "Mar 2019");
    }

    #[test]
    fn test_axis_exposes_three_binners() {
        let axis = DateAxis::default();
        let prefs = Preferences::default();
        let names: Vec<String> = axis.binners(&prefs).iter().map(|b| b.name()).collect();
        assert_eq!(names, ["Yearly", "Quarterly", "Monthly"]);
        assert_eq!(axis.kind(), AxisKind::Discrete);
    }
}
