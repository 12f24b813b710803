use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub mod agrifield;
pub mod results;

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Record {
    pub id: RecordId,
}
