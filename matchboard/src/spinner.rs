//! Loading overlay for slow requests.

use std::time::{Duration, Instant};

use pagedom::{Element, Tag, find_first_mut, find_path, remove_at_path};

pub const OVERLAY_CLASS: &str = "spinner-overlay";

fn overlay() -> Element {
    Element::div().class(OVERLAY_CLASS).child(
        Element::div()
            .class("spinner-border text-primary")
            .attr("role", "status")
            .child(Element::span("Loading...").class("visually-hidden")),
    )
}

/// Append the overlay to the page body (or the root if there is no body).
pub fn show_loading_spinner(root: &mut Element) {
    match find_first_mut(root, &|el| el.tag == Tag::Body) {
        Some(body) => body.append_child(overlay()),
        None => root.append_child(overlay()),
    }
}

/// Remove the first overlay. Returns false if none was showing.
pub fn hide_loading_spinner(root: &mut Element) -> bool {
    find_path(root, |el| el.has_class(OVERLAY_CLASS))
        .and_then(|path| remove_at_path(root, &path))
        .is_some()
}

/// Shows the overlay only for requests outlasting `delay`.
#[derive(Debug, Clone)]
pub struct LoadingSpinner {
    delay: Duration,
    pending_since: Option<Instant>,
    shown: bool,
}

impl LoadingSpinner {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
            shown: false,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// A request started. Restarts the delay if one was already pending.
    pub fn ajax_start(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// Show the overlay once the pending request has outlasted the delay.
    /// Returns true on the call that shows it.
    pub fn poll(&mut self, root: &mut Element, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.duration_since(since) >= self.delay => {
                self.pending_since = None;
                show_loading_spinner(root);
                self.shown = true;
                log::trace!("[spinner] shown");
                true
            }
            _ => false,
        }
    }

    /// Requests finished: cancel the pending delay and hide the overlay.
    pub fn ajax_stop(&mut self, root: &mut Element) {
        self.pending_since = None;
        if hide_loading_spinner(root) {
            log::trace!("[spinner] hidden");
        }
        self.shown = false;
    }
}
