//! Sortable table core.
//!
//! Works on plain row collections and header marker sets, so it can drive
//! any tree that exposes those. Sort direction is an explicit
//! [`SortState`] value: sorting the same column again really reverses the
//! rows, and header markers are derived from that state.

mod collate;
mod markers;
mod rows;
mod state;
mod table;
mod value;

pub use collate::collate;
pub use markers::{MarkerSet, SortMarkers, apply_sort_indicators, toggle_sort_indicators};
pub use rows::{compare_keys, sort_rows};
pub use state::SortState;
pub use table::{Header, Table};
pub use value::{SortKey, ValueType, parse_date, parse_number};
