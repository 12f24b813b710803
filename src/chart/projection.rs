use chrono::NaiveDate;
use dioxus::logger::tracing::warn;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{
    error::{Malformed, RenderError},
    layout,
};
use crate::models::{
    agrifield::AgrifieldModel,
    results::{Metrics, ResultSet},
};

/// Date label format used on the chart's x axis.
pub const LABEL_FORMAT: &str = "%d-%m-%Y";

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub effective_precipitation: f64,
    pub estimated_irrigation: f64,
    pub applied_irrigation: f64,
    pub percentage_diff: Option<f64>,
}

/// Three bar series aligned on `labels`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub labels: Vec<String>,
    pub estimated: Vec<f64>,
    pub applied: Vec<f64>,
    pub precipitation: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub title: String,
    pub subtitle: String,

    pub is_processing: bool,
    pub show_summary: bool,

    pub totals: Totals,
    pub series: Series,

    pub download_url: String,
}

impl ViewModel {
    pub fn bar_width(&self, chart_width_px: f64) -> u32 {
        layout::bar_width(chart_width_px, self.series.len())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Projection {
    pub effective_precipitation: f64,
    pub estimated_irrigation: f64,
    pub series: Series,
}

/// Validates the field's timeseries and splits it into the chart series.
pub fn project(field: &AgrifieldModel) -> Result<Projection, RenderError> {
    let results = field.results.as_ref().ok_or(RenderError::MissingResults)?;

    let rows = validate(results)?;

    let (labels, estimated, applied, precipitation): (Vec<String>, Vec<f64>, Vec<f64>, Vec<f64>) =
        rows.into_iter().multiunzip();

    Ok(Projection {
        effective_precipitation: precipitation.iter().sum(),
        estimated_irrigation: estimated.iter().sum(),
        series: Series {
            labels,
            estimated,
            applied,
            precipitation,
        },
    })
}

/// Checks that the timeseries is chronological and every row is complete.
///
/// Returns the label and the estimated, applied and precipitation amounts of each day.
pub fn validate(results: &ResultSet) -> Result<Vec<(String, f64, f64, f64)>, Malformed> {
    if let Some((previous, next)) = results
        .timeseries
        .iter()
        .tuple_windows()
        .find(|(previous, next)| next.date <= previous.date)
    {
        return Err(Malformed::OutOfOrder {
            date: next.date,
            previous: previous.date,
        });
    }

    results
        .timeseries
        .iter()
        .map(|entry| {
            let (estimated, applied, precipitation) = row(entry.date, &entry.metrics)?;
            Ok((
                entry.date.format(LABEL_FORMAT).to_string(),
                estimated,
                applied,
                precipitation,
            ))
        })
        .collect()
}

fn row(date: NaiveDate, metrics: &Metrics) -> Result<(f64, f64, f64), Malformed> {
    let precipitation = required(date, "effective precipitation", metrics.effective_precipitation)?;
    let estimated = required(date, "estimated irrigation", metrics.ifinal_theoretical)?;
    let applied = amount(
        date,
        "applied irrigation",
        metrics.applied_irrigation.unwrap_or_default(),
    )?;
    Ok((estimated, applied, precipitation))
}

fn required(date: NaiveDate, field: &'static str, value: Option<f64>) -> Result<f64, Malformed> {
    let value = value.ok_or(Malformed::MissingField { date, field })?;
    amount(date, field, value)
}

fn amount(date: NaiveDate, field: &'static str, value: f64) -> Result<f64, Malformed> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Malformed::InvalidValue { date, field, value })
    }
}

fn scalar(name: &'static str, value: f64) -> Result<f64, Malformed> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Malformed::InvalidScalar { name, value })
    }
}

/// Builds the performance page's view model.
///
/// `applied_irrigation_sum` and `percentage_diff` are computed by the caller
/// and only displayed. Missing or malformed results never fail the page, they
/// produce a view model without summary and with empty series.
pub fn render(
    field: &AgrifieldModel,
    applied_irrigation_sum: f64,
    percentage_diff: Option<f64>,
) -> ViewModel {
    let projection = project(field).and_then(|projection| {
        scalar("applied irrigation sum", applied_irrigation_sum)?;
        percentage_diff
            .map(|diff| scalar("percentage difference", diff))
            .transpose()?;
        Ok(projection)
    });

    let (show_summary, totals, series) = match projection {
        Ok(projection) => (
            true,
            Totals {
                effective_precipitation: projection.effective_precipitation,
                estimated_irrigation: projection.estimated_irrigation,
                applied_irrigation: applied_irrigation_sum,
                percentage_diff,
            },
            projection.series,
        ),
        Err(RenderError::MissingResults) => (false, Totals::default(), Series::default()),
        Err(err) => {
            warn!("Unable to chart agrifield {}: {err}", field.id);
            (false, Totals::default(), Series::default())
        }
    };

    ViewModel {
        title: field.name.clone(),
        subtitle: format!("{}, {}", field.crop_type, field.irrigation_type),
        is_processing: !field.status.is_done(),
        show_summary,
        totals,
        series,
        download_url: format!(
            "/{}/fields/{}/performance/download/",
            field.owner,
            field.key()
        ),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use surrealdb::RecordId;

    use super::*;
    use crate::models::{
        agrifield::{FieldStatus, AGRIFIELD_TABLE},
        results::TimeseriesEntry,
    };

    pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub(crate) fn field(status: FieldStatus, results: Option<ResultSet>) -> AgrifieldModel {
        AgrifieldModel {
            id: RecordId::from_table_key(AGRIFIELD_TABLE, 7_i64),
            name: "North orchard".into(),
            owner: "bob".into(),
            crop_type: "Grass".into(),
            irrigation_type: "Drip".into(),
            status,
            results,
        }
    }

    pub(crate) fn two_days() -> ResultSet {
        ResultSet {
            timeseries: vec![
                TimeseriesEntry::new(date(2021, 1, 1), Metrics::new(10.0, 20.0, Some(15.0))),
                TimeseriesEntry::new(date(2021, 1, 2), Metrics::new(5.0, 10.0, None)),
            ],
        }
    }

    #[test]
    fn two_day_example() {
        let view = render(&field(FieldStatus::Done, Some(two_days())), 15.0, Some(-50.0));

        assert!(!view.is_processing);
        assert!(view.show_summary);
        assert_eq!(view.totals.effective_precipitation, 15.0);
        assert_eq!(view.totals.estimated_irrigation, 30.0);
        assert_eq!(view.totals.applied_irrigation, 15.0);
        assert_eq!(view.totals.percentage_diff, Some(-50.0));
        assert_eq!(
            view.series,
            Series {
                labels: vec!["01-01-2021".into(), "02-01-2021".into()],
                estimated: vec![20.0, 10.0],
                applied: vec![15.0, 0.0],
                precipitation: vec![10.0, 5.0],
            }
        );
    }

    #[test]
    fn not_done_is_processing() {
        for status in [FieldStatus::Pending, FieldStatus::Processing] {
            let view = render(&field(status, Some(two_days())), 0.0, None);
            assert!(view.is_processing);
            // Stale results are still charted.
            assert!(view.show_summary);
            assert_eq!(view.series.len(), 2);
        }
    }

    #[test]
    fn missing_results_hide_summary() {
        for status in [FieldStatus::Pending, FieldStatus::Done] {
            let view = render(&field(status, None), 0.0, None);
            assert!(!view.show_summary);
            assert!(view.series.estimated.is_empty());
            assert!(view.series.applied.is_empty());
            assert!(view.series.precipitation.is_empty());
            assert!(view.series.labels.is_empty());
        }
    }

    #[test]
    fn project_reports_missing_results() {
        assert_eq!(
            project(&field(FieldStatus::Done, None)),
            Err(RenderError::MissingResults)
        );
    }

    #[test]
    fn missing_applied_becomes_zero() {
        let results = ResultSet {
            timeseries: vec![
                TimeseriesEntry::new(date(2021, 6, 1), Metrics::new(0.0, 1.0, None)),
                TimeseriesEntry::new(date(2021, 6, 2), Metrics::new(0.0, 1.0, Some(5.0))),
                TimeseriesEntry::new(date(2021, 6, 3), Metrics::new(0.0, 1.0, None)),
            ],
        };
        let view = render(&field(FieldStatus::Done, Some(results)), 5.0, None);
        assert_eq!(view.series.applied, vec![0.0, 5.0, 0.0]);
    }

    #[test]
    fn series_are_aligned() {
        let timeseries = (1..=31)
            .map(|day| {
                TimeseriesEntry::new(date(2020, 7, day), Metrics::new(1.0, day as f64, None))
            })
            .collect();
        let view = render(
            &field(FieldStatus::Done, Some(ResultSet { timeseries })),
            0.0,
            None,
        );

        assert_eq!(view.series.len(), 31);
        assert_eq!(view.series.estimated.len(), 31);
        assert_eq!(view.series.applied.len(), 31);
        assert_eq!(view.series.precipitation.len(), 31);
        assert_eq!(view.series.labels[30], "31-07-2020");
        assert_eq!(view.totals.estimated_irrigation, 496.0);
    }

    #[test]
    fn missing_required_field_falls_back() {
        let mut results = two_days();
        results.timeseries[1].metrics.ifinal_theoretical = None;

        let field = field(FieldStatus::Done, Some(results));
        assert_eq!(
            project(&field),
            Err(RenderError::MalformedResults(Malformed::MissingField {
                date: date(2021, 1, 2),
                field: "estimated irrigation",
            }))
        );

        let view = render(&field, 15.0, None);
        assert!(!view.show_summary);
        assert!(view.series.is_empty());
        assert_eq!(view.totals, Totals::default());
    }

    #[test]
    fn non_numeric_value_falls_back() {
        let mut results = two_days();
        results.timeseries[0].metrics.effective_precipitation = Some(f64::NAN);

        let view = render(&field(FieldStatus::Done, Some(results)), 15.0, None);
        assert!(!view.show_summary);
        assert!(view.series.is_empty());
    }

    #[test]
    fn negative_amount_falls_back() {
        let mut results = two_days();
        results.timeseries[0].metrics.applied_irrigation = Some(-1.0);

        assert!(matches!(
            project(&field(FieldStatus::Done, Some(results))),
            Err(RenderError::MalformedResults(Malformed::InvalidValue {
                field: "applied irrigation",
                ..
            }))
        ));
    }

    #[test]
    fn unordered_dates_fall_back() {
        let mut results = two_days();
        results.timeseries.swap(0, 1);

        assert_eq!(
            project(&field(FieldStatus::Done, Some(results.clone()))),
            Err(RenderError::MalformedResults(Malformed::OutOfOrder {
                date: date(2021, 1, 1),
                previous: date(2021, 1, 2),
            }))
        );
        assert!(!render(&field(FieldStatus::Done, Some(results)), 0.0, None).show_summary);
    }

    #[test]
    fn non_numeric_scalar_falls_back() {
        let field = field(FieldStatus::Done, Some(two_days()));
        assert!(!render(&field, f64::NAN, None).show_summary);
        assert!(!render(&field, 15.0, Some(f64::INFINITY)).show_summary);
    }

    #[test]
    fn empty_timeseries_still_shows_summary() {
        let view = render(&field(FieldStatus::Done, Some(ResultSet::default())), 0.0, None);
        assert!(view.show_summary);
        assert!(view.series.is_empty());
        assert_eq!(view.bar_width(900.0), 1);
    }

    #[test]
    fn header_and_download_link() {
        let view = render(&field(FieldStatus::Done, Some(two_days())), 15.0, None);
        assert_eq!(view.title, "North orchard");
        assert_eq!(view.subtitle, "Grass, Drip");
        assert_eq!(view.download_url, "/bob/fields/7/performance/download/");
    }

    #[test]
    fn bar_width_follows_series_length() {
        let view = render(&field(FieldStatus::Done, Some(two_days())), 15.0, None);
        assert_eq!(view.bar_width(1000.0), 5);
        assert_eq!(view.bar_width(12.0), 2);
    }
}
