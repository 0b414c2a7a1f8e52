//! A page tree plus the behaviours bound to it.

use std::fmt::Display;
use std::time::Instant;

use chrono::TimeZone;
use pagedom::Element;
use tablesort::{SortState, ValueType};

use crate::alerts::{AlertTimer, dismiss_alerts};
use crate::config::PageConfig;
use crate::forms::{SubmitOutcome, submit_form};
use crate::match_times::localize_match_times;
use crate::password::{Strength, check_password_strength, update_password_strength_indicator};
use crate::preview::{SelectedFile, update_file_preview};
use crate::sorting::TableSorter;
use crate::spinner::LoadingSpinner;
use crate::widgets::{Chart, ChartConfig, WidgetTargets, initialize_chart};

#[derive(Debug)]
pub struct Page {
    pub root: Element,
    pub config: PageConfig,
    pub sorter: TableSorter,
    spinner: LoadingSpinner,
    alerts: AlertTimer,
    widgets: WidgetTargets,
}

impl Page {
    pub fn new(root: Element, config: PageConfig) -> Self {
        Self {
            root,
            sorter: TableSorter::new(config.sort_markers.clone()),
            spinner: LoadingSpinner::new(config.spinner_delay()),
            alerts: AlertTimer::default(),
            widgets: WidgetTargets::default(),
            config,
        }
    }

    /// Load-time setup: localise match times, collect widget targets and
    /// schedule the alert dismissal.
    pub fn ready<Tz>(&mut self, now: Instant, tz: &Tz) -> &WidgetTargets
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        localize_match_times(&mut self.root, tz);
        self.widgets = WidgetTargets::collect(&self.root);
        self.alerts.arm(now, self.config.alert_dismiss_after());
        log::debug!(
            "[page] ready: {} tooltips, {} popovers, {} date pickers",
            self.widgets.tooltips.len(),
            self.widgets.popovers.len(),
            self.widgets.date_pickers.len()
        );
        &self.widgets
    }

    /// Run whatever timers are due.
    pub fn tick(&mut self, now: Instant) {
        if self.alerts.fire(now) {
            dismiss_alerts(&mut self.root, &self.config.permanent_alert_class);
        }
        self.spinner.poll(&mut self.root, now);
    }

    pub fn widgets(&self) -> &WidgetTargets {
        &self.widgets
    }

    pub fn spinner_shown(&self) -> bool {
        self.spinner.is_shown()
    }

    pub fn sort_table(
        &mut self,
        table_id: &str,
        column: usize,
        value_type: ValueType,
    ) -> Option<SortState> {
        self.sorter
            .sort_table(&mut self.root, table_id, column, value_type)
    }

    pub fn ajax_start(&mut self, now: Instant) {
        self.spinner.ajax_start(now);
    }

    pub fn ajax_stop(&mut self) {
        self.spinner.ajax_stop(&mut self.root);
    }

    /// The password field changed.
    pub fn password_input(&mut self, value: &str) -> Strength {
        let score = check_password_strength(value);
        update_password_strength_indicator(&mut self.root, &self.config.password_indicator_id, score);
        Strength::from_score(score)
    }

    pub fn submit(&mut self, form_id: &str) -> Option<SubmitOutcome> {
        submit_form(&mut self.root, form_id)
    }

    /// Bind a chart definition to one of the page's canvases.
    pub fn chart(&self, canvas_id: &str, config: ChartConfig) -> Option<Chart> {
        initialize_chart(&self.root, canvas_id, config)
    }

    pub fn file_selected(&mut self, input_id: &str, file: Option<&SelectedFile>) -> bool {
        update_file_preview(&mut self.root, input_id, file)
    }
}
