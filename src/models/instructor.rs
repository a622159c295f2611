use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub office_hours: Option<String>,
    /// Subject symbols the instructor teaches. Not a column; becomes
    /// `instructor_subjects` rows.
    #[serde(default)]
    #[sqlx(skip)]
    pub subjects: Vec<String>,
}
