use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A class section as listed by the NU API for one term and subject.
///
/// `term`, `subject`, `instructor` and `room` are names, not keys into the
/// other tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub catalog_num: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub meeting_days: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub seats: Option<i64>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub class_num: Option<i64>,
    #[serde(default)]
    pub course_id: Option<i64>,
}
