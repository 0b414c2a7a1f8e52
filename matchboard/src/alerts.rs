//! Alert auto-dismissal.

use std::time::{Duration, Instant};

use pagedom::{Element, remove_all};

/// Remove every `.alert` element that does not carry `permanent_class`.
/// Returns how many were removed.
pub fn dismiss_alerts(root: &mut Element, permanent_class: &str) -> usize {
    let removed = remove_all(root, &|el| {
        el.has_class("alert") && !el.has_class(permanent_class)
    });
    if !removed.is_empty() {
        log::debug!("[alerts] dismissed {}", removed.len());
    }
    removed.len()
}

/// One-shot deadline for the dismissal pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertTimer {
    due: Option<Instant>,
}

impl AlertTimer {
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// True exactly once, on the first call at or after the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
