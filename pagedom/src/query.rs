//! Path-based navigation.
//!
//! Elements do not link to their parents, so ancestor lookups work on a
//! [`NodePath`]: the child indices leading from the root to a node.

use crate::element::{Content, Element, searchable};

/// Child indices from the root to a node. The root itself is the empty path.
pub type NodePath = Vec<usize>;

/// Path to the element with the given id.
pub fn path_to(root: &Element, id: &str) -> Option<NodePath> {
    find_path(root, |el| el.id == id)
}

/// Path to the first element (root included) matching `pred`.
pub fn find_path(root: &Element, pred: impl Fn(&Element) -> bool) -> Option<NodePath> {
    let mut path = Vec::new();
    if search_by(root, &pred, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn search_by(el: &Element, pred: &impl Fn(&Element) -> bool, path: &mut NodePath) -> bool {
    if pred(el) {
        return true;
    }
    for (index, child) in searchable(el).iter().enumerate() {
        path.push(index);
        if search_by(child, pred, path) {
            return true;
        }
        path.pop();
    }
    false
}

pub fn element_at_path<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |el, &index| el.child_elements().get(index))
}

pub fn element_at_path_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut el = root;
    for &index in path {
        el = el.content.children_mut()?.get_mut(index)?;
    }
    Some(el)
}

/// Path of the nearest ancestor-or-self of `id` that matches `pred`.
pub fn closest_path(
    root: &Element,
    id: &str,
    pred: impl Fn(&Element) -> bool,
) -> Option<NodePath> {
    let mut path = path_to(root, id)?;
    loop {
        let el = element_at_path(root, &path)?;
        if pred(el) {
            return Some(path);
        }
        path.pop()?;
    }
}

/// Detach the node at `path`. The root cannot be removed.
pub fn remove_at_path(root: &mut Element, path: &[usize]) -> Option<Element> {
    let (&last, parent_path) = path.split_last()?;
    let parent = element_at_path_mut(root, parent_path)?;
    let Content::Children(children) = &mut parent.content else {
        return None;
    };
    if last < children.len() {
        Some(children.remove(last))
    } else {
        log::trace!("[dom] no node at {path:?}, nothing removed");
        None
    }
}
