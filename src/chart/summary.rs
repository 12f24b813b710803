use super::{
    format::{format_number, NumberFormat},
    projection::Totals,
};
use crate::models::results::ResultSet;

/// Below this estimated total (mm) a percentage difference is meaningless.
pub const MIN_ESTIMATED_FOR_DIFF: f64 = 0.1;

pub fn applied_irrigation_sum(results: &ResultSet) -> f64 {
    results
        .timeseries
        .iter()
        .map(|entry| entry.metrics.applied_irrigation.unwrap_or_default())
        .sum()
}

pub fn estimated_irrigation_sum(results: &ResultSet) -> f64 {
    results
        .timeseries
        .iter()
        .filter_map(|entry| entry.metrics.ifinal_theoretical)
        .sum()
}

/// Difference of applied against estimated irrigation, in whole percent.
pub fn percentage_diff(applied: f64, estimated: f64) -> Option<f64> {
    if estimated < MIN_ESTIMATED_FOR_DIFF {
        return None;
    }
    Some(((applied - estimated) / estimated * 100.0).round())
}

#[derive(Clone, PartialEq, Debug)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

pub fn summary_lines(totals: &Totals, mode: NumberFormat) -> Vec<SummaryLine> {
    let mm = |value: f64| {
        format_number(value, 0, mode)
            .map(|value| format!("{value} mm"))
            .unwrap_or_else(|| "-".into())
    };
    let percent = totals
        .percentage_diff
        .and_then(|diff| format_number(diff, 0, mode))
        .map(|diff| format!("{diff} %"))
        .unwrap_or_else(|| "-".into());

    vec![
        SummaryLine {
            label: "Total effective precipitation",
            value: mm(totals.effective_precipitation),
        },
        SummaryLine {
            label: "Total estimated irrigation water amount",
            value: mm(totals.estimated_irrigation),
        },
        SummaryLine {
            label: "Total applied irrigation water amount",
            value: mm(totals.applied_irrigation),
        },
        SummaryLine {
            label: "Percentage difference",
            value: percent,
        },
    ]
}
