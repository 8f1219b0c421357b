//! Core types for bin representation.

use std::cmp::Ordering;
use std::fmt;

use crate::dive::Dive;
use crate::error::{Error, Result};

/// The classification value of a bin.
///
/// A closed union over the three concrete value kinds produced by the
/// built-in axes: plain integers (year, depth-bucket index, dive-mode
/// index), integer pairs compared lexicographically (year + quarter,
/// year + month), and strings (buddy name).
///
/// Values of different kinds have no meaningful order. Binners only ever
/// compare values of one kind within a single result set, so the partial
/// ordering returns `None` (and [`BinValue::try_cmp`] an error) instead of
/// inventing an order across kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinValue {
    /// A single integer value
    Int(i64),
    /// A pair of integers, ordered lexicographically
    IntPair(i64, i64),
    /// A string value
    Str(String),
}

impl BinValue {
    /// Name of the concrete kind, used in mismatch errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::IntPair(_, _) => "integer-pair",
            Self::Str(_) => "string",
        }
    }

    /// Compare two values of the same kind.
    ///
    /// Returns [`Error::BinKindMismatch`] when the kinds differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ok(a.cmp(b)),
            (Self::IntPair(a0, a1), Self::IntPair(b0, b1)) => Ok((a0, a1).cmp(&(b0, b1))),
            (Self::Str(a), Self::Str(b)) => Ok(a.cmp(b)),
            _ => Err(Error::BinKindMismatch {
                left: self.kind_name(),
                right: other.kind_name(),
            }),
        }
    }
}

impl PartialOrd for BinValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl From<i64> for BinValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<(i64, i64)> for BinValue {
    fn from((a, b): (i64, i64)) -> Self {
        Self::IntPair(a, b)
    }
}

impl From<String> for BinValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for BinValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// One distinct classification value plus its display label.
///
/// Constructed once per distinct value discovered during an aggregation
/// call and immutable afterwards. The label is built by the binner, which
/// holds the display context (step size, unit), so formatting stays a pure
/// function of the value. Consumers only use [`Bin::format`] and the
/// comparison operations.
#[derive(Debug, Clone)]
pub struct Bin {
    value: BinValue,
    label: String,
}

impl Bin {
    /// Create a bin from a value and its precomputed label
    pub fn new(value: impl Into<BinValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Human-readable label for this bin
    pub fn format(&self) -> &str {
        &self.label
    }

    /// The underlying classification value
    pub fn value(&self) -> &BinValue {
        &self.value
    }

    /// Compare two bins of the same kind; see [`BinValue::try_cmp`]
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.value.try_cmp(&other.value)
    }
}

impl PartialEq for Bin {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Bin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A bin together with the dives that fell into it.
///
/// The dive list preserves the relative order of the input collection.
#[derive(Debug, Clone)]
pub struct BinnedDives<'a> {
    /// The bin
    pub bin: Bin,
    /// Dives whose derived value matched the bin, in input order
    pub dives: Vec<&'a Dive>,
}

/// A bin together with the number of dives that fell into it
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedCount {
    /// The bin
    pub bin: Bin,
    /// Number of dives whose derived value matched the bin
    pub count: usize,
}

/// Algebraic capability of an axis's values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// Unordered categories; no linear placement, no averaging
    Discrete,
    /// Linearly ordered positions; no averaging
    Continuous,
    /// Linearly ordered positions that also support averaging
    Numeric,
}

impl AxisKind {
    /// Get the name of the axis kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Continuous => "continuous",
            Self::Numeric => "numeric",
        }
    }

    /// Whether values can be placed on a linear axis
    pub fn supports_linear_axis(&self) -> bool {
        matches!(self, Self::Continuous | Self::Numeric)
    }

    /// Whether values support averaging and summary statistics
    pub fn supports_averaging(&self) -> bool {
        matches!(self, Self::Numeric)
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_ordering() {
        let a = BinValue::Int(2019);
        let b = BinValue::Int(2020);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(b.try_cmp(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.try_cmp(&a.clone()).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_pair_ordering_is_lexicographic() {
        let q4_2019 = BinValue::IntPair(2019, 4);
        let q1_2020 = BinValue::IntPair(2020, 1);
        assert_eq!(q4_2019.try_cmp(&q1_2020).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_mismatched_kinds_do_not_order() {
        let year = BinValue::Int(2019);
        let buddy = BinValue::from("Alice");
        assert_eq!(year.partial_cmp(&buddy), None);
        assert_eq!(
            year.try_cmp(&buddy),
            Err(Error::BinKindMismatch {
                left: "integer",
                right: "string",
            })
        );
    }

    #[test]
    fn test_bin_format_and_equality() {
        let bin = Bin::new(2019i64, "2019");
        assert_eq!(bin.format(), "2019");
        assert_eq!(bin.to_string(), "2019");
        // Equality is defined by value, not label.
        assert_eq!(bin, Bin::new(2019i64, "anything"));
        assert_ne!(bin, Bin::new(2020i64, "2019"));
    }

    #[test]
    fn test_axis_kind_capabilities() {
        assert!(!AxisKind::Discrete.supports_linear_axis());
        assert!(AxisKind::Continuous.supports_linear_axis());
        assert!(!AxisKind::Continuous.supports_averaging());
        assert!(AxisKind::Numeric.supports_linear_axis());
        assert!(AxisKind::Numeric.supports_averaging());
        assert_eq!(AxisKind::Numeric.to_string(), "numeric");
    }
}
