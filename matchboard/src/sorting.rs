//! Sortable tables in the page tree.
//!
//! The sort itself lives in `tablesort`; this module resolves a table by id,
//! feeds it the body rows and header class lists, and remembers each
//! table's [`SortState`] between calls.

use std::collections::HashMap;

use pagedom::table::{cell_text, first_body_mut, header_cells_mut, is_row};
use pagedom::{ClassList, Element, find_element_mut};
use tablesort::{
    MarkerSet, SortMarkers, SortState, ValueType, apply_sort_indicators, sort_rows,
    toggle_sort_indicators,
};

/// Header class list seen as a marker set.
struct HeaderClasses<'a>(&'a mut ClassList);

impl MarkerSet for HeaderClasses<'_> {
    fn contains_marker(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }

    fn insert_marker(&mut self, marker: &str) {
        self.0.add(marker);
    }

    fn remove_marker(&mut self, marker: &str) {
        self.0.remove(marker);
    }

    fn toggle_marker(&mut self, marker: &str) -> bool {
        self.0.toggle(marker)
    }
}

fn header_classes(table: &mut Element) -> Vec<HeaderClasses<'_>> {
    header_cells_mut(table)
        .into_iter()
        .map(|th| HeaderClasses(&mut th.classes))
        .collect()
}

/// Sorts page tables by id and keeps their sort state.
#[derive(Debug, Default)]
pub struct TableSorter {
    markers: SortMarkers,
    states: HashMap<String, SortState>,
}

impl TableSorter {
    pub fn new(markers: SortMarkers) -> Self {
        Self {
            markers,
            states: HashMap::new(),
        }
    }

    pub fn markers(&self) -> &SortMarkers {
        &self.markers
    }

    /// Last sort applied to a table.
    pub fn state(&self, table_id: &str) -> Option<SortState> {
        self.states.get(table_id).copied()
    }

    /// Sort a table's body rows by `column`.
    ///
    /// Sorting the column the table is already sorted by reverses the
    /// direction; any other column sorts ascending. Header markers are
    /// updated to match. Returns the applied state, or `None` (leaving the
    /// tree untouched) when there is no such table or it has no body.
    pub fn sort_table(
        &mut self,
        root: &mut Element,
        table_id: &str,
        column: usize,
        value_type: ValueType,
    ) -> Option<SortState> {
        let Some(table) = find_element_mut(root, table_id) else {
            log::debug!("[sort] no table '{}', skipping", table_id);
            return None;
        };

        let state = SortState::next(self.state(table_id), column);
        if !sort_body(table, state, value_type) {
            log::debug!("[sort] table '{}' has no body, skipping", table_id);
            return None;
        }
        sync_sort_indicators(table, state, &self.markers);

        log::debug!(
            "[sort] table '{}' by column {} ({}), ascending={}",
            table_id,
            column,
            value_type,
            state.ascending
        );
        self.states.insert(table_id.to_string(), state);
        Some(state)
    }

    /// Forget a table's state. Its rows and markers are left as they are.
    pub fn forget(&mut self, table_id: &str) -> Option<SortState> {
        self.states.remove(table_id)
    }
}

/// Reorder the rows of the table's first body. Non-row children stay in
/// front, rows are re-appended in sorted order. Returns false without a body.
pub fn sort_body(table: &mut Element, state: SortState, value_type: ValueType) -> bool {
    let Some(body) = first_body_mut(table) else {
        return false;
    };
    let Some(children) = body.content.children_mut() else {
        return true;
    };

    let (mut rows, others): (Vec<Element>, Vec<Element>) =
        children.drain(..).partition(|el| is_row(el));
    sort_rows(&mut rows, state.column, value_type, state.ascending, cell_text);

    children.extend(others);
    children.extend(rows);
    true
}

/// Flip the ascending marker on `sorted_column` and clear every other
/// header's markers. Direction is not checked against row order.
pub fn update_sort_indicators(table: &mut Element, sorted_column: usize, markers: &SortMarkers) {
    toggle_sort_indicators(&mut header_classes(table), sorted_column, markers);
}

/// Set header markers from an explicit state.
pub fn sync_sort_indicators(table: &mut Element, state: SortState, markers: &SortMarkers) {
    apply_sort_indicators(&mut header_classes(table), state, markers);
}
