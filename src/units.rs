//! Unit preferences consulted by unit-sensitive axes.
//!
//! The engine does not own unit configuration; callers hold a
//! [`Preferences`] value and pass it by reference into axis queries. The
//! depth axis re-reads it on every call, so a preference change takes
//! effect immediately without any cache invalidation.

use std::fmt;

/// Length unit used for depth binning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Metres
    #[default]
    Meters,
    /// Feet
    Feet,
}

impl LengthUnit {
    /// Short unit label used in bin labels ("m" or "ft")
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Feet => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Read-only external unit configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    /// Unit used when presenting depths
    pub length_unit: LengthUnit,
}

impl Preferences {
    /// Preferences with the given length unit
    pub fn with_length_unit(length_unit: LengthUnit) -> Self {
        Self { length_unit }
    }
}

/// Convert millimetres to feet
pub fn mm_to_feet(mm: i32) -> f64 {
    f64::from(mm) * 0.00328084
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_feet() {
        assert!((mm_to_feet(1000) - 3.28084).abs() < 1e-9);
        assert_eq!(mm_to_feet(0), 0.0);
    }

    #[test]
    fn test_default_preferences_are_metric() {
        assert_eq!(Preferences::default().length_unit, LengthUnit::Meters);
    }
}
