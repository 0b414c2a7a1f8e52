//! Plain in-memory table.

use std::collections::BTreeSet;

use crate::markers::{MarkerSet, SortMarkers, apply_sort_indicators};
use crate::rows::sort_rows;
use crate::state::SortState;
use crate::value::ValueType;

/// A header cell with its label and marker set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub label: String,
    pub markers: BTreeSet<String>,
}

impl Header {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            markers: BTreeSet::new(),
        }
    }
}

impl MarkerSet for Header {
    fn contains_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    fn insert_marker(&mut self, marker: &str) {
        self.markers.insert(marker.to_string());
    }

    fn remove_marker(&mut self, marker: &str) {
        self.markers.remove(marker);
    }
}

/// Headers, text rows and the current sort state.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<Header>,
    pub rows: Vec<Vec<String>>,
    pub markers: SortMarkers,
    sort: Option<SortState>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Header::new).collect(),
            ..Default::default()
        }
    }

    pub fn with_rows<R, S>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.push_row(row);
        }
        self
    }

    pub fn with_markers(mut self, markers: SortMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Current sort state.
    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Sort by `column`, toggling direction if it is already the sorted
    /// column. Returns the new state.
    pub fn sort_by_column(&mut self, column: usize, value_type: ValueType) -> SortState {
        let state = SortState::next(self.sort, column);
        self.apply_sort(state, value_type);
        state
    }

    /// Sort to an explicit state.
    pub fn apply_sort(&mut self, state: SortState, value_type: ValueType) {
        sort_rows(
            &mut self.rows,
            state.column,
            value_type,
            state.ascending,
            |row: &Vec<String>, index| row.get(index).cloned(),
        );
        apply_sort_indicators(&mut self.headers, state, &self.markers);
        self.sort = Some(state);
    }

    /// Forget the sort state and clear header markers. Row order is kept.
    pub fn clear_sort(&mut self) {
        for header in &mut self.headers {
            header.remove_marker(&self.markers.sorted);
            header.remove_marker(&self.markers.ascending);
        }
        self.sort = None;
    }

    /// Cell texts of one column, top to bottom.
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map_or("", String::as_str))
            .collect()
    }

    /// Index of the header currently carrying the sorted marker.
    pub fn sorted_header(&self) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.contains_marker(&self.markers.sorted))
    }
}
