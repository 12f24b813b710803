use anyhow::{anyhow, Result};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::results::ResultSet;
use crate::chart::projection::validate;

pub const AGRIFIELD_TABLE: &str = "agrifield";

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AgrifieldModel {
    pub id: RecordId,

    pub name: String,
    pub owner: String,

    pub crop_type: String,
    pub irrigation_type: String,

    pub status: FieldStatus,
    pub results: Option<ResultSet>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub enum FieldStatus {
    #[default]
    Pending,
    Processing,
    Done,
}

impl FieldStatus {
    pub fn is_done(self) -> bool {
        self == FieldStatus::Done
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldStatus::Pending => "pending",
            FieldStatus::Processing => "processing",
            FieldStatus::Done => "done",
        }
    }
}

/// A field may only be `done` with a complete, well formed result set.
pub fn check_status(status: FieldStatus, results: Option<&ResultSet>) -> Result<()> {
    if !status.is_done() {
        return Ok(());
    }

    let results = results.ok_or_else(|| anyhow!("a done field needs results"))?;
    validate(results).map_err(|err| anyhow!("a done field needs complete results: {err}"))?;
    Ok(())
}

impl AgrifieldModel {
    pub fn key(&self) -> String {
        self.id.key().to_string()
    }

    pub fn days(&self) -> usize {
        self.results
            .as_ref()
            .map(|results| results.timeseries.len())
            .unwrap_or_default()
    }

    pub fn performance_url_element(&self) -> Element {
        let owner = &self.owner;
        let key = self.key();
        rsx! {
            a { href: "/{owner}/fields/{key}/performance", "{self.name}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::projection::tests::{date, two_days};
    use crate::models::results::{Metrics, TimeseriesEntry};

    #[test]
    fn done_without_results_is_rejected() {
        let err = check_status(FieldStatus::Done, None).unwrap_err();
        assert_eq!(err.to_string(), "a done field needs results");
    }

    #[test]
    fn done_with_incomplete_rows_is_rejected() {
        let results = ResultSet {
            timeseries: vec![TimeseriesEntry::new(
                date(2021, 1, 1),
                Metrics {
                    effective_precipitation: Some(3.0),
                    ifinal_theoretical: None,
                    applied_irrigation: None,
                },
            )],
        };

        let err = check_status(FieldStatus::Done, Some(&results)).unwrap_err();
        assert!(err.to_string().contains("missing estimated irrigation"), "{err}");
    }

    #[test]
    fn done_with_unordered_rows_is_rejected() {
        let mut results = two_days();
        results.timeseries.swap(0, 1);
        assert!(check_status(FieldStatus::Done, Some(&results)).is_err());
    }

    #[test]
    fn done_with_complete_results_is_accepted() {
        assert!(check_status(FieldStatus::Done, Some(&two_days())).is_ok());
    }

    #[test]
    fn unfinished_statuses_accept_anything() {
        let mut stale = two_days();
        stale.timeseries[0].metrics.ifinal_theoretical = None;

        for status in [FieldStatus::Pending, FieldStatus::Processing] {
            assert!(check_status(status, Some(&two_days())).is_ok());
            assert!(check_status(status, Some(&stale)).is_ok());
            assert!(check_status(status, None).is_ok());
        }
    }
}
