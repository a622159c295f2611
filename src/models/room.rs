use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub id: i64,
    /// Overwritten with the building the room was fetched for.
    #[serde(default)]
    pub building_id: i64,
    pub name: String,
}
