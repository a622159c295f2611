use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Subject as returned by the provider. The term and school it belongs to
/// are the scope of the fetch, not part of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub symbol: String,
    pub name: String,
}

/// Stored subject row, tagged with the (term, school) pair it was fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TermSubject {
    pub symbol: String,
    pub name: String,
    pub term_id: i64,
    pub school_symbol: String,
}

impl TermSubject {
    pub fn new(subject: Subject, term_id: i64, school_symbol: &str) -> Self {
        Self {
            symbol: subject.symbol,
            name: subject.name,
            term_id,
            school_symbol: school_symbol.to_string(),
        }
    }
}
