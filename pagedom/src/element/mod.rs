mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::types::Tag;

/// Children a lookup may descend into. Template content is inert, so
/// searches see the `template` element but nothing inside it.
pub(crate) fn searchable(el: &Element) -> &[Element] {
    if el.tag == Tag::Template {
        &[]
    } else {
        el.child_elements()
    }
}

fn searchable_mut(el: &mut Element) -> Option<&mut Vec<Element>> {
    if el.tag == Tag::Template {
        None
    } else {
        el.content.children_mut()
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in searchable(root) {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    find_first_mut(root, &|el| el.id == id)
}

/// First element (root included) matching `pred`, in document order.
pub fn find_first_mut<'a>(
    root: &'a mut Element,
    pred: &impl Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    if pred(root) {
        return Some(root);
    }

    for child in searchable_mut(root)? {
        if let Some(found) = find_first_mut(child, pred) {
            return Some(found);
        }
    }

    None
}

/// Every element (root included) matching `pred`, in document order.
pub fn find_all<'a>(root: &'a Element, pred: &impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, pred, &mut found);
    found
}

fn collect<'a>(el: &'a Element, pred: &impl Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if pred(el) {
        out.push(el);
    }
    for child in searchable(el) {
        collect(child, pred, out);
    }
}

/// Mutable counterpart of [`find_all`]. Matching elements are not descended
/// into, so the returned borrows never overlap.
pub fn find_all_mut<'a>(
    root: &'a mut Element,
    pred: &impl Fn(&Element) -> bool,
) -> Vec<&'a mut Element> {
    let mut found = Vec::new();
    collect_mut(root, pred, &mut found);
    found
}

fn collect_mut<'a>(
    el: &'a mut Element,
    pred: &impl Fn(&Element) -> bool,
    out: &mut Vec<&'a mut Element>,
) {
    if pred(el) {
        out.push(el);
        return;
    }
    if let Some(children) = searchable_mut(el) {
        for child in children {
            collect_mut(child, pred, out);
        }
    }
}

/// Detach every descendant matching `pred`, returning them in document
/// order. Matches are removed with their subtrees; the root is never removed.
pub fn remove_all(root: &mut Element, pred: &impl Fn(&Element) -> bool) -> Vec<Element> {
    let mut removed = Vec::new();
    remove_matching(root, pred, &mut removed);
    removed
}

fn remove_matching(el: &mut Element, pred: &impl Fn(&Element) -> bool, out: &mut Vec<Element>) {
    let Some(children) = searchable_mut(el) else {
        return;
    };
    for mut child in std::mem::take(children) {
        if pred(&child) {
            out.push(child);
        } else {
            remove_matching(&mut child, pred, out);
            children.push(child);
        }
    }
}
