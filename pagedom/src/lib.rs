//! In-memory document tree for page behaviours.
//!
//! Elements carry an id, a tag, a class list, attributes and either text or
//! child elements. Lookups mirror the handful of DOM queries page scripts
//! rely on: by id, by predicate, by ancestor, and the table accessors.
//! As with `<template>`, the content of a [`Tag::Template`] element is inert:
//! lookups find the template itself but never descend into it.

pub mod element;
pub mod query;
pub mod table;
pub mod types;

pub use element::{
    Content, Element, find_all, find_all_mut, find_element, find_element_mut, find_first_mut,
    remove_all,
};
pub use query::{
    NodePath, closest_path, element_at_path, element_at_path_mut, find_path, path_to,
    remove_at_path,
};
pub use types::*;
