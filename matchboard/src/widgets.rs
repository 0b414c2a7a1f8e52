//! Elements handed to the client-side widget library on load.

use pagedom::{Element, find_all, find_element};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Tooltip,
    Popover,
}

impl Toggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
            Self::Popover => "popover",
        }
    }
}

/// Ids of elements whose `data-bs-toggle` names `toggle`.
pub fn bootstrap_targets(root: &Element, toggle: Toggle) -> Vec<String> {
    find_all(root, &|el| el.get_attr("data-bs-toggle") == Some(toggle.as_str()))
        .into_iter()
        .map(|el| el.id.clone())
        .collect()
}

/// Ids of `.date-picker` elements.
pub fn date_picker_targets(root: &Element) -> Vec<String> {
    find_all(root, &|el| el.has_class("date-picker"))
        .into_iter()
        .map(|el| el.id.clone())
        .collect()
}

/// Options passed to the date picker widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerOptions {
    pub format: String,
    pub autoclose: bool,
    pub today_highlight: bool,
}

impl Default for DatePickerOptions {
    fn default() -> Self {
        Self {
            format: "yyyy-mm-dd".to_string(),
            autoclose: true,
            today_highlight: true,
        }
    }
}

/// Everything the widget library initialises on page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetTargets {
    pub tooltips: Vec<String>,
    pub popovers: Vec<String>,
    pub date_pickers: Vec<String>,
}

impl WidgetTargets {
    pub fn collect(root: &Element) -> Self {
        Self {
            tooltips: bootstrap_targets(root, Toggle::Tooltip),
            popovers: bootstrap_targets(root, Toggle::Popover),
            date_pickers: date_picker_targets(root),
        }
    }
}

/// Chart definition handed to the charting library as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// A chart bound to its canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub canvas_id: String,
    pub config: ChartConfig,
}

/// Bind `config` to the canvas with `canvas_id`. `None` if the page has no
/// such canvas.
pub fn initialize_chart(root: &Element, canvas_id: &str, config: ChartConfig) -> Option<Chart> {
    let Some(canvas) = find_element(root, canvas_id) else {
        log::debug!("[widgets] no canvas '{}', chart skipped", canvas_id);
        return None;
    };
    Some(Chart {
        canvas_id: canvas.id.clone(),
        config,
    })
}
