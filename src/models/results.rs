use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Output of one irrigation model run, one entry per day in ascending date order.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub timeseries: Vec<TimeseriesEntry>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesEntry {
    pub date: NaiveDate,
    pub metrics: Metrics,
}

/// Daily values in mm.
///
/// Every field is optional on the wire because the pipeline may store
/// incomplete rows. `effective_precipitation` and `ifinal_theoretical` are
/// required for display, `applied_irrigation` defaults to zero.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(default)]
    pub effective_precipitation: Option<f64>,
    #[serde(default)]
    pub ifinal_theoretical: Option<f64>,
    #[serde(default)]
    pub applied_irrigation: Option<f64>,
}

impl Metrics {
    pub fn new(
        effective_precipitation: f64,
        ifinal_theoretical: f64,
        applied_irrigation: Option<f64>,
    ) -> Self {
        Self {
            effective_precipitation: Some(effective_precipitation),
            ifinal_theoretical: Some(ifinal_theoretical),
            applied_irrigation,
        }
    }
}

impl TimeseriesEntry {
    pub fn new(date: NaiveDate, metrics: Metrics) -> Self {
        Self { date, metrics }
    }
}
