use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SubjectsQuery<'a> {
    pub term: i64,
    pub school: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CoursesQuery<'a> {
    pub term: i64,
    pub subject: &'a str,
}

#[derive(Debug, Serialize)]
pub struct InstructorsQuery<'a> {
    pub subject: &'a str,
}

/// Optional filters for the buildings listing. The default lists every
/// building.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BuildingsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoomsQuery {
    pub building: i64,
}

/// Body the API sends instead of a result array when a request is rejected.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
