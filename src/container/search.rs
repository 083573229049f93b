//! Nearest-key search
//!
//! A narrowing search finds where the target would sort, then the candidate
//! and its immediate neighbours are compared by absolute distance.

use crate::domain::KeyDomain;

/// Index of the key closest to `target` in a sorted slice.
///
/// Returns `None` for an empty slice. Ties go to the lower index.
pub fn nearest_index<K: KeyDomain>(keys: &[K], target: K) -> Option<usize> {
    match keys.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }

    let candidate = lower_bound(keys, target);

    // Nearest key is at candidate - 1 or candidate; compare the neighbours.
    let first = candidate.saturating_sub(1);
    let last = (candidate + 1).min(keys.len() - 1);

    let best = (first..=last).min_by_key(|&i| keys[i].distance(target))?;

    // Equal keys are contiguous; report the first of a run of duplicates.
    Some(lower_bound(&keys[..best], keys[best]))
}

/// First index whose key is `>= target` (`keys.len()` if none)
pub(crate) fn lower_bound<K: Ord>(keys: &[K], target: K) -> usize {
    let mut left = 0;
    let mut right = keys.len();

    while left < right {
        let middle = left + (right - left) / 2;
        if keys[middle] < target {
            left = middle + 1;
        } else {
            right = middle;
        }
    }

    left
}
