//! Core traits for binning dives along classification axes.

use crate::dive::Dive;
use crate::types::{AxisKind, BinnedCount, BinnedDives};
use crate::units::Preferences;

/// Placeholder binner name. Single-binner axes never show a binner name in
/// the UI, so displaying this string anywhere is a caller bug.
pub const UNNAMED_BINNER: &str = "N/D";

/// Strategy that reduces a dive collection into grouped or counted bins
/// along one concrete classification scheme.
///
/// Binners are stateless or configured once at construction; the same
/// binner may be invoked concurrently from multiple threads.
pub trait Binner: Send + Sync {
    /// Name disambiguating this binner from others on the same axis.
    ///
    /// Only meaningful when an axis exposes several binners; the default
    /// is a placeholder that should never reach the UI.
    fn name(&self) -> String {
        UNNAMED_BINNER.to_string()
    }

    /// Group dives by their derived classification value.
    ///
    /// The result is strictly ascending by bin value with no duplicate
    /// values; each bin's dive list preserves the input order.
    fn bin_dives<'a>(&self, dives: &[&'a Dive]) -> Vec<BinnedDives<'a>>;

    /// Count dives per derived classification value.
    ///
    /// Yields the same bins as [`Binner::bin_dives`], with each group
    /// replaced by its size.
    fn count_dives(&self, dives: &[&Dive]) -> Vec<BinnedCount>;
}

/// A named classification dimension grouping one or more compatible
/// binners.
pub trait Axis: Send + Sync {
    /// Algebraic capability of this axis's values
    fn kind(&self) -> AxisKind;

    /// User-facing axis name
    fn name(&self) -> String;

    /// Binners currently available on this axis.
    ///
    /// May depend on the live unit preference and is re-evaluated on every
    /// call, never cached, so a preference change takes effect immediately.
    fn binners(&self, prefs: &Preferences) -> Vec<&dyn Binner>;

    /// Select a binner by index.
    ///
    /// Any index outside `[0, len)` falls back to the first binner rather
    /// than failing, so a stale UI selection survives a preference change
    /// that shrank the list. `None` only when the axis currently exposes
    /// no binners at all.
    fn get_binner(&self, idx: usize, prefs: &Preferences) -> Option<&dyn Binner> {
        let binners = self.binners(prefs);
        if binners.is_empty() {
            return None;
        }
        Some(if idx < binners.len() {
            binners[idx]
        } else {
            binners[0]
        })
    }
}
