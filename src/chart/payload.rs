use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::projection::ViewModel;

pub const ESTIMATED_SERIES: &str = "Irrigation water estimated";
pub const APPLIED_SERIES: &str = "Applied irrigation water amount";
pub const PRECIPITATION_SERIES: &str = "Effective precipitation";

const ESTIMATED_COLOR: &str = "#f7a35c";
const PRECIPITATION_COLOR: &str = "#7cb5ec";

/// Data handed to the chart library.
///
/// Always serialized through `serde_json`, so numbers use `.` whatever the
/// page's display locale is.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ChartPayload {
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub series: Vec<SeriesPayload>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SeriesPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: Vec<f64>,
}

impl From<&ViewModel> for ChartPayload {
    fn from(view: &ViewModel) -> Self {
        let series = &view.series;
        ChartPayload {
            title: view.title.clone(),
            subtitle: view.subtitle.clone(),
            categories: series.labels.clone(),
            series: vec![
                SeriesPayload {
                    name: ESTIMATED_SERIES.into(),
                    color: Some(ESTIMATED_COLOR.into()),
                    data: series.estimated.clone(),
                },
                SeriesPayload {
                    name: APPLIED_SERIES.into(),
                    color: None,
                    data: series.applied.clone(),
                },
                SeriesPayload {
                    name: PRECIPITATION_SERIES.into(),
                    color: Some(PRECIPITATION_COLOR.into()),
                    data: series.precipitation.clone(),
                },
            ],
        }
    }
}

/// Highcharts options for a grouped column chart of `payload`.
pub fn highcharts_options(payload: &ChartPayload, bar_width: u32) -> Value {
    json!({
        "chart": { "type": "column" },
        "title": { "text": payload.title },
        "subtitle": { "text": payload.subtitle },
        "credits": { "enabled": false },
        "xAxis": {
            "categories": payload.categories,
            "crosshair": true,
        },
        "yAxis": {
            "min": 0,
            "title": { "text": "mm" },
        },
        "tooltip": {
            "shared": true,
            "valueDecimals": 1,
            "valueSuffix": " mm",
        },
        "plotOptions": {
            "column": {
                "pointWidth": bar_width,
                "pointPadding": 0,
                "groupPadding": 0.1,
                "borderWidth": 0,
            },
        },
        "series": payload.series,
    })
}

/// Script drawing the chart into the element with id `element_id`.
///
/// A chart already drawn there is updated in place.
pub fn chart_script(element_id: &str, payload: &ChartPayload, bar_width: u32) -> String {
    let options = highcharts_options(payload, bar_width);
    format!(
        "{{\
        const element = document.getElementById({id});\
        const existing = Highcharts.charts.find((chart) => chart && chart.renderTo === element);\
        if (existing) {{ existing.update({options}, true, true); }}\
        else {{ Highcharts.chart(element, {options}); }}\
        }}",
        id = Value::from(element_id),
    )
}
