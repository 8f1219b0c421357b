//! Concrete classification axes built on the generic reduction.

pub mod buddy;
pub mod date;
pub mod depth;
pub mod mode;

pub use buddy::{BuddyAxis, BuddyBinner};
pub use date::{DateAxis, MonthBinner, QuarterBinner, YearBinner};
pub use depth::{DepthAxis, DepthBinner};
pub use mode::{DiveModeAxis, DiveModeBinner};
