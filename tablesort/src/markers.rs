//! Header sort markers.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::state::SortState;

/// A set of boolean marker names attached to a header cell.
pub trait MarkerSet {
    fn contains_marker(&self, marker: &str) -> bool;
    fn insert_marker(&mut self, marker: &str);
    fn remove_marker(&mut self, marker: &str);

    /// Flip presence of `marker`. Returns whether it is present afterwards.
    fn toggle_marker(&mut self, marker: &str) -> bool {
        if self.contains_marker(marker) {
            self.remove_marker(marker);
            false
        } else {
            self.insert_marker(marker);
            true
        }
    }
}

impl MarkerSet for BTreeSet<String> {
    fn contains_marker(&self, marker: &str) -> bool {
        self.contains(marker)
    }

    fn insert_marker(&mut self, marker: &str) {
        self.insert(marker.to_string());
    }

    fn remove_marker(&mut self, marker: &str) {
        self.remove(marker);
    }
}

impl MarkerSet for HashSet<String> {
    fn contains_marker(&self, marker: &str) -> bool {
        self.contains(marker)
    }

    fn insert_marker(&mut self, marker: &str) {
        self.insert(marker.to_string());
    }

    fn remove_marker(&mut self, marker: &str) {
        self.remove(marker);
    }
}

/// Marker names for the sorted column and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortMarkers {
    pub sorted: String,
    pub ascending: String,
}

impl Default for SortMarkers {
    fn default() -> Self {
        Self {
            sorted: "sorted".to_string(),
            ascending: "sorted-asc".to_string(),
        }
    }
}

/// Mark `sorted_column` as sorted and flip its ascending marker; clear both
/// markers on every other header.
///
/// Direction here is only a presence flip and does not look at row order.
/// [`apply_sort_indicators`] derives it from a [`SortState`] instead.
pub fn toggle_sort_indicators<M: MarkerSet>(
    headers: &mut [M],
    sorted_column: usize,
    markers: &SortMarkers,
) {
    for (index, header) in headers.iter_mut().enumerate() {
        if index == sorted_column {
            header.insert_marker(&markers.sorted);
            header.toggle_marker(&markers.ascending);
        } else {
            header.remove_marker(&markers.sorted);
            header.remove_marker(&markers.ascending);
        }
    }
}

/// Mark the state's column as sorted, with the ascending marker present iff
/// the state is ascending; clear both markers on every other header.
pub fn apply_sort_indicators<M: MarkerSet>(
    headers: &mut [M],
    state: SortState,
    markers: &SortMarkers,
) {
    for (index, header) in headers.iter_mut().enumerate() {
        if index == state.column {
            header.insert_marker(&markers.sorted);
            if state.ascending {
                header.insert_marker(&markers.ascending);
            } else {
                header.remove_marker(&markers.ascending);
            }
        } else {
            header.remove_marker(&markers.sorted);
            header.remove_marker(&markers.ascending);
        }
    }
}
