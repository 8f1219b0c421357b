//! Buddies (including dive guides).
//!
//! The only multi-valued axis: one dive can list several people, so a dive
//! may appear in several bins, and a dive listing nobody appears in none.

use crate::binners::{bin_dives_multi, count_dives_multi};
use crate::dive::Dive;
use crate::traits::{Axis, Binner};
use crate::types::{AxisKind, Bin, BinnedCount, BinnedDives};
use crate::units::Preferences;

/// Everyone on the dive: buddy names first, then dive guides. Entries are
/// trimmed and blanks dropped; a name typed twice is kept twice.
fn people_of(dive: &Dive) -> Vec<String> {
    let mut people = Vec::new();
    for field in [&dive.buddy, &dive.dive_guide] {
        for name in field.split(',') {
            let name = name.trim();
            if !name.is_empty() {
                people.push(name.to_string());
            }
        }
    }
    people
}

fn buddy_bin(name: String) -> Bin {
    let label = name.clone();
    Bin::new(name, label)
}

/// Bins dives by the people on them
#[derive(Debug, Clone, Copy, Default)]
pub struct BuddyBinner;

impl Binner for BuddyBinner {
    fn bin_dives<'a>(&self, dives: &[&'a Dive]) -> Vec<BinnedDives<'a>> {
        bin_dives_multi(dives, people_of, buddy_bin)
    }

    fn count_dives(&self, dives: &[&Dive]) -> Vec<BinnedCount> {
        count_dives_multi(dives, people_of, buddy_bin)
    }
}

/// The buddy axis: a single multi-valued binner
#[derive(Debug, Clone, Copy, Default)]
pub struct BuddyAxis {
    binner: BuddyBinner,
}

impl Axis for BuddyAxis {
    fn kind(&self) -> AxisKind {
        AxisKind::Discrete
    }

    fn name(&self) -> String {
        "Buddies".to_string()
    }

    fn binners(&self, _prefs: &Preferences) -> Vec<&dyn Binner> {
        vec![&self.binner]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn dive_with(buddy: &str, guide: &str) -> Dive {
        Dive::new(
            Utc.with_ymd_and_hms(2022, 9, 3, 11, 0, 0).unwrap(),
            18_000,
            0,
            buddy,
            guide,
        )
    }

    #[test]
    fn test_buddy_and_guide_lists_are_concatenated() {
        let d = dive_with("Alice, Bob", "Carol");
        let refs = [&d];

        let counts = BuddyBinner.count_dives(&refs);
        let names: Vec<&str> = counts.iter().map(|c| c.bin.format()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert!(counts.iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        let d = dive_with("", " , ,Dana ");
        let refs = [&d];

        let counts = BuddyBinner.count_dives(&refs);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].bin.format(), "Dana");
    }

    #[test]
    fn test_dive_without_people_contributes_nothing() {
        let d = dive_with("", "");
        let refs = [&d];

        assert!(BuddyBinner.bin_dives(&refs).is_empty());
        assert!(BuddyBinner.count_dives(&refs).is_empty());
    }

    #[test]
    fn test_duplicate_name_on_one_dive_counts_twice() {
        // Literal behavior: duplicates within one dive's list are kept.
        let d = dive_with("Alice, Alice", "");
        let refs = [&d];

        let counts = BuddyBinner.count_dives(&refs);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 2);
    }

    #[test]
    fn test_dive_appears_in_every_matching_bin() {
        let first = dive_with("Alice", "");
        let second = dive_with("Alice, Bob", "");
        let refs: Vec<&Dive> = vec![&first, &second];

        let groups = BuddyBinner.bin_dives(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].bin.format(), "Alice");
        assert_eq!(groups[0].dives.len(), 2);
        assert_eq!(groups[1].bin.format(), "Bob");
        assert_eq!(groups[1].dives.len(), 1);
    }
}
