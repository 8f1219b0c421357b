//! Binning and aggregation engine for dive-log statistics
//!
//! This crate is the statistical backbone behind dive-log charts and
//! tables: it takes a collection of dives and groups them into named,
//! orderable bins along a selectable classification axis, producing either
//! the grouped dives per bin or per-bin counts.
//!
//! # Key Concepts
//!
//! - **[`Bin`]**: one distinct classification value (a year, a depth
//!   bucket, a buddy name) plus its display label and ordering.
//! - **[`Binner`]**: a strategy reducing a dive collection into ordered
//!   `(Bin, payload)` pairs along one concrete scheme.
//! - **[`Axis`]**: a named classification dimension grouping one or more
//!   binners and declaring whether its values are discrete, continuous or
//!   numeric.
//! - **[`axes`]**: the process-lifetime registry of all available axes
//!   (date, depth, dive mode, buddies).
//!
//! Output is always strictly ascending by bin value with no duplicates,
//! and grouping preserves the input order of dives within each bin.
//!
//! # Examples
//!
//! ## Counting dives per year
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use divelog_stats::{axes, Axis, Binner, Dive, Preferences};
//!
//! let dives = vec![
//!     Dive::new(
//!         Utc.with_ymd_and_hms(2019, 3, 4, 10, 0, 0).unwrap(),
//!         23_400,
//!         0,
//!         "Alice, Bob",
//!         "Carol",
//!     ),
//!     Dive::new(
//!         Utc.with_ymd_and_hms(2020, 7, 21, 9, 30, 0).unwrap(),
//!         41_200,
//!         1,
//!         "Bob",
//!         "",
//!     ),
//! ];
//! let refs: Vec<&Dive> = dives.iter().collect();
//!
//! let prefs = Preferences::default();
//! let date_axis = axes().get(0).unwrap();
//! let yearly = date_axis.get_binner(0, &prefs).unwrap();
//!
//! for group in yearly.count_dives(&refs) {
//!     println!("{}: {} dives", group.bin.format(), group.count);
//! }
//! ```
//!
//! ## Unit-sensitive depth binners
//!
//! ```rust
//! use divelog_stats::{axes, Axis, Binner, LengthUnit, Preferences};
//!
//! let depth_axis = axes().get(1).unwrap();
//!
//! let metric = Preferences::default();
//! assert_eq!(depth_axis.binners(&metric)[1].name(), "in 10 m steps");
//!
//! // The binner list follows the preference on every call; nothing is
//! // cached across preference changes.
//! let imperial = Preferences::with_length_unit(LengthUnit::Feet);
//! assert_eq!(depth_axis.binners(&imperial)[0].name(), "in 15 ft steps");
//! ```

pub mod axes;
pub mod binners;
pub mod dive;
pub mod error;
pub mod registry;
pub mod traits;
pub mod types;
pub mod units;

pub use dive::{Dive, DiveMode};
pub use error::{Error, Result};
pub use registry::{axes, AxisRegistry};
pub use traits::{Axis, Binner, UNNAMED_BINNER};
pub use types::{AxisKind, Bin, BinValue, BinnedCount, BinnedDives};
pub use units::{LengthUnit, Preferences};

use axes::date::YearBinner;
use axes::depth::DepthBinner;

// Convenience functions
/// Count dives per calendar year
pub fn yearly_counts(dives: &[&Dive]) -> Vec<BinnedCount> {
    YearBinner.count_dives(dives)
}

/// Count dives per fixed-width depth bucket of the given step size
pub fn depth_counts(dives: &[&Dive], step: i64, unit: LengthUnit) -> Vec<BinnedCount> {
    DepthBinner::new(step, unit).count_dives(dives)
}
