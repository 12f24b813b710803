use anyhow::anyhow;
use axum::{extract::Path, Json};
use dioxus::logger::tracing::info;
use serde::{Deserialize, Serialize};

use crate::{
    models::{
        agrifield::{check_status, AgrifieldModel, FieldStatus, AGRIFIELD_TABLE},
        Record,
    },
    DB,
};

/// Changes a field's status and keeps its cached results.
///
/// The pipeline flags a recomputation with `processing`, the page then treats
/// the cached results as stale.
pub async fn update_status(
    Path(field): Path<i64>,
    Json(update): Json<UpdateStatus>,
) -> Result<Json<Option<Record>>, crate::AppError> {
    let current: Option<AgrifieldModel> = DB.select((AGRIFIELD_TABLE, field)).await?;
    let Some(current) = current else {
        return Err(anyhow!("No agrifield {field}")).map_err(From::from);
    };

    check_status(update.status, current.results.as_ref())
        .map_err(|err| anyhow!("Agrifield {field} rejected: {err}"))?;

    let status = update.status;
    let updated: Option<Record> = if status.is_done() {
        // Results may have been replaced since the check, only flip the status
        // if the checked results are still the stored ones.
        let mut response = DB
            .query(
                r#"UPDATE type::thing("agrifield", $field)
                SET status = $status
                WHERE results != NONE AND results = $results
                "#,
            )
            .bind(("field", field))
            .bind(("status", status))
            .bind(("results", current.results.clone()))
            .await?;
        let updated: Option<Record> = response.take(0)?;
        if updated.is_none() {
            return Err(anyhow!("Agrifield {field} results changed while being marked done"))
                .map_err(From::from);
        }
        updated
    } else {
        DB.update((AGRIFIELD_TABLE, field)).merge(update).await?
    };

    info!(
        "{} went from {} to {}",
        current.id,
        current.status.label(),
        status.label()
    );
    Ok(Json(updated))
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub status: FieldStatus,
}
