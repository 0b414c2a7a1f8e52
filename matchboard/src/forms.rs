//! Form behaviours: submit validation, delete confirmation and repeatable
//! field groups.

use pagedom::{
    Element, Tag, closest_path, element_at_path_mut, find_all, find_element, find_element_mut,
    find_first_mut, remove_at_path,
};

pub const NEEDS_VALIDATION_CLASS: &str = "needs-validation";
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Prevented,
}

fn field_is_valid(field: &Element) -> bool {
    if field.attrs.contains_key("disabled") {
        return true;
    }
    let value = field.get_attr("value").unwrap_or("");
    if field.attrs.contains_key("required") && value.is_empty() {
        return false;
    }
    match field.get_attr("minlength").and_then(|n| n.parse::<usize>().ok()) {
        Some(min) if !value.is_empty() => value.encode_utf16().count() >= min,
        _ => true,
    }
}

/// Whether every enabled field under `form` satisfies its `required` and
/// `minlength` constraints. Values are checked as entered, so whitespace
/// counts as a value.
pub fn check_validity(form: &Element) -> bool {
    find_all(form, &|el| el.tag != Tag::Form)
        .into_iter()
        .all(field_is_valid)
}

/// Handle a submit of the form with `form_id`.
///
/// Forms marked `needs-validation` are blocked while invalid and always
/// gain `was-validated` so their feedback styling shows. Other forms always
/// proceed. `None` when there is no such form.
pub fn submit_form(root: &mut Element, form_id: &str) -> Option<SubmitOutcome> {
    let form = find_element_mut(root, form_id)?;
    if !form.has_class(NEEDS_VALIDATION_CLASS) {
        return Some(SubmitOutcome::Proceed);
    }

    let outcome = if check_validity(form) {
        SubmitOutcome::Proceed
    } else {
        log::debug!("[forms] '{}' failed validation", form_id);
        SubmitOutcome::Prevented
    };
    form.classes.add(WAS_VALIDATED_CLASS);
    Some(outcome)
}

/// Asks the user a yes/no question.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Prompt for F {
    fn confirm(&mut self, message: &str) -> bool {
        (*self)(message)
    }
}

/// Whether a click on `element` should go ahead. Elements carrying
/// `data-confirm` ask first; everything else proceeds.
pub fn confirm_action(element: &Element, prompt: &mut impl Prompt) -> bool {
    match element.get_attr("data-confirm") {
        Some(message) => prompt.confirm(message),
        None => true,
    }
}

/// Append a copy of the template's content to the `.dynamic-fields`
/// container inside the button's `.form-group`. Returns false if any of the
/// three is missing.
pub fn add_form_field(root: &mut Element, button_id: &str, template_id: &str) -> bool {
    let Some(template) = find_element(root, template_id) else {
        return false;
    };
    let fields = template.child_elements().to_vec();

    let Some(group_path) = closest_path(root, button_id, |el| el.has_class("form-group")) else {
        return false;
    };
    let Some(group) = element_at_path_mut(root, &group_path) else {
        return false;
    };
    let Some(container) = group.content.children_mut().and_then(|children| {
        children
            .iter_mut()
            .find_map(|child| find_first_mut(child, &|el| el.has_class("dynamic-fields")))
    }) else {
        return false;
    };

    for field in fields {
        container.append_child(field);
    }
    true
}

/// Remove the `.dynamic-field` group the button belongs to. Returns false
/// if the button is not inside one.
pub fn remove_form_field(root: &mut Element, button_id: &str) -> bool {
    closest_path(root, button_id, |el| el.has_class("dynamic-field"))
        .and_then(|path| remove_at_path(root, &path))
        .is_some()
}
