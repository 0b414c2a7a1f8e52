//! Page behaviours for the match management front end.
//!
//! Each behaviour operates on a [`pagedom::Element`] tree and is a no-op when
//! the elements it targets are absent. [`Page`] ties them to the load, tick
//! and user-event points of a page's life.

pub mod alerts;
pub mod config;
pub mod forms;
pub mod logging;
pub mod match_times;
pub mod page;
pub mod password;
pub mod paths;
pub mod preview;
pub mod sorting;
pub mod spinner;
pub mod widgets;

pub use config::{ConfigError, PageConfig};
pub use page::Page;
pub use sorting::TableSorter;
pub use tablesort::{SortState, ValueType};
