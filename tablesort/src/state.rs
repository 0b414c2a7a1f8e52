use serde::{Deserialize, Serialize};

/// Which column a table is sorted by, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub column: usize,
    pub ascending: bool,
}

impl SortState {
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub fn descending(column: usize) -> Self {
        Self {
            column,
            ascending: false,
        }
    }

    /// State after a sort request on `column`.
    ///
    /// If the column is already sorted, toggles the direction.
    /// If sorting a different column, sorts ascending.
    pub fn next(previous: Option<SortState>, column: usize) -> Self {
        match previous {
            Some(state) if state.column == column => state.reversed(),
            _ => Self::ascending(column),
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            ascending: !self.ascending,
            ..self
        }
    }
}
