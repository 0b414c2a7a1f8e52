//! Table accessors mirroring `table.tBodies`, `tbody.rows` and `row.cells`.

use crate::element::{Element, find_all, find_all_mut};
use crate::types::Tag;

/// First `tbody` child of a table.
pub fn first_body(table: &Element) -> Option<&Element> {
    table.child_elements().iter().find(|el| el.tag == Tag::TBody)
}

pub fn first_body_mut(table: &mut Element) -> Option<&mut Element> {
    table
        .content
        .children_mut()?
        .iter_mut()
        .find(|el| el.tag == Tag::TBody)
}

/// Every header cell of the table in document order.
pub fn header_cells(table: &Element) -> Vec<&Element> {
    find_all(table, &|el| el.tag == Tag::Th)
}

pub fn header_cells_mut(table: &mut Element) -> Vec<&mut Element> {
    find_all_mut(table, &|el| el.tag == Tag::Th)
}

pub fn is_row(el: &Element) -> bool {
    el.tag == Tag::Tr
}

pub fn is_cell(el: &Element) -> bool {
    matches!(el.tag, Tag::Td | Tag::Th)
}

/// The `index`th cell of a row, if the row has that many.
pub fn cell(row: &Element, index: usize) -> Option<&Element> {
    row.child_elements().iter().filter(|el| is_cell(el)).nth(index)
}

/// Trimmed text content of a cell, if the row has that many cells.
pub fn cell_text(row: &Element, index: usize) -> Option<String> {
    cell(row, index).map(|c| c.text_content().trim().to_string())
}

/// Trimmed cell texts of every body row, for inspecting order.
pub fn column_texts(table: &Element, index: usize) -> Vec<Option<String>> {
    first_body(table)
        .map(|body| {
            body.child_elements()
                .iter()
                .filter(|el| is_row(el))
                .map(|row| cell_text(row, index))
                .collect()
        })
        .unwrap_or_default()
}
