use anyhow::anyhow;
use axum::{extract::Path, Json};
use dioxus::logger::tracing::info;
use serde::{Deserialize, Serialize};

use crate::{
    models::{
        agrifield::{check_status, FieldStatus, AGRIFIELD_TABLE},
        results::ResultSet,
        Record,
    },
    DB,
};

/// Stores the output of an irrigation model run for one field.
pub async fn store_field(
    Path(field): Path<i64>,
    Json(agrifield): Json<StoreAgrifield>,
) -> Result<Json<Option<Record>>, crate::AppError> {
    check_status(agrifield.status, agrifield.results.as_ref())
        .map_err(|err| anyhow!("Agrifield {field} rejected: {err}"))?;

    let days = agrifield
        .results
        .as_ref()
        .map(|results| results.timeseries.len())
        .unwrap_or_default();

    let stored: Option<Record> = DB.upsert((AGRIFIELD_TABLE, field)).content(agrifield).await?;

    let Some(stored) = stored else {
        return Err(anyhow!("Agrifield {field} was not stored")).map_err(From::from);
    };

    info!("Stored {} with {days} days of results", stored.id);
    Ok(Json(Some(stored)))
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoreAgrifield {
    pub name: String,
    pub owner: String,

    pub crop_type: String,
    pub irrigation_type: String,

    #[serde(default)]
    pub status: FieldStatus,
    #[serde(default)]
    pub results: Option<ResultSet>,
}
