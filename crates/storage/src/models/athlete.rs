use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A persisted athlete. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub training_center: String,
    pub category: String,
}
