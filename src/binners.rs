//! Generic ordered-insertion reduction shared by all binners.
//!
//! Every binner accumulates `(value, payload)` entries in a vector kept
//! ascending by value: a binary search locates the entry for each derived
//! value, appending to it on a hit and inserting at the sorted position on
//! a miss. This gives deterministic ascending output without a separate
//! sort pass, which a hash map would not. Amortized O(n log n) for n
//! value-occurrences.
//!
//! The functions are parameterized over a value-extraction function and a
//! bin-construction function instead of per-axis subclasses; each axis
//! instantiates them with its own derivation and labelling.

use crate::dive::Dive;
use crate::types::{Bin, BinnedCount, BinnedDives};

/// Add a dive under `value`, creating the entry if the value is new
fn add_dive_to_value_bin<'a, T: Ord>(
    bins: &mut Vec<(T, Vec<&'a Dive>)>,
    value: T,
    dive: &'a Dive,
) {
    match bins.binary_search_by(|(existing, _)| existing.cmp(&value)) {
        Ok(idx) => bins[idx].1.push(dive),
        Err(idx) => bins.insert(idx, (value, vec![dive])),
    }
}

/// Bump the count under `value`, creating the entry if the value is new
fn increment_count_bin<T: Ord>(bins: &mut Vec<(T, usize)>, value: T) {
    match bins.binary_search_by(|(existing, _)| existing.cmp(&value)) {
        Ok(idx) => bins[idx].1 += 1,
        Err(idx) => bins.insert(idx, (value, 1)),
    }
}

/// Group dives by a single derived value per dive.
///
/// `to_value` derives the classification value; `make_bin` turns each
/// distinct value into its [`Bin`] once all dives are consumed.
pub fn bin_dives_by<'a, T, V, B>(
    dives: &[&'a Dive],
    to_value: V,
    make_bin: B,
) -> Vec<BinnedDives<'a>>
where
    T: Ord,
    V: Fn(&Dive) -> T,
    B: Fn(T) -> Bin,
{
    let mut value_bins: Vec<(T, Vec<&Dive>)> = Vec::new();
    for &dive in dives {
        add_dive_to_value_bin(&mut value_bins, to_value(dive), dive);
    }

    value_bins
        .into_iter()
        .map(|(value, dives)| BinnedDives {
            bin: make_bin(value),
            dives,
        })
        .collect()
}

/// Count dives by a single derived value per dive
pub fn count_dives_by<T, V, B>(dives: &[&Dive], to_value: V, make_bin: B) -> Vec<BinnedCount>
where
    T: Ord,
    V: Fn(&Dive) -> T,
    B: Fn(T) -> Bin,
{
    let mut value_bins: Vec<(T, usize)> = Vec::new();
    for &dive in dives {
        increment_count_bin(&mut value_bins, to_value(dive));
    }

    value_bins
        .into_iter()
        .map(|(value, count)| BinnedCount {
            bin: make_bin(value),
            count,
        })
        .collect()
}

/// Group dives by zero or more derived values per dive.
///
/// A dive contributes once per occurrence in its value list; duplicate
/// occurrences within one dive's own list are deliberately not
/// deduplicated. Dives with an empty value list contribute nothing.
pub fn bin_dives_multi<'a, T, V, B>(
    dives: &[&'a Dive],
    to_values: V,
    make_bin: B,
) -> Vec<BinnedDives<'a>>
where
    T: Ord,
    V: Fn(&Dive) -> Vec<T>,
    B: Fn(T) -> Bin,
{
    let mut value_bins: Vec<(T, Vec<&Dive>)> = Vec::new();
    for &dive in dives {
        for value in to_values(dive) {
            add_dive_to_value_bin(&mut value_bins, value, dive);
        }
    }

    value_bins
        .into_iter()
        .map(|(value, dives)| BinnedDives {
            bin: make_bin(value),
            dives,
        })
        .collect()
}

/// Count dives by zero or more derived values per dive
pub fn count_dives_multi<T, V, B>(dives: &[&Dive], to_values: V, make_bin: B) -> Vec<BinnedCount>
where
    T: Ord,
    V: Fn(&Dive) -> Vec<T>,
    B: Fn(T) -> Bin,
{
    let mut value_bins: Vec<(T, usize)> = Vec::new();
    for &dive in dives {
        for value in to_values(dive) {
            increment_count_bin(&mut value_bins, value);
        }
    }

    value_bins
        .into_iter()
        .map(|(value, count)| BinnedCount {
            bin: make_bin(value),
            count,
        })
        .collect()
}
