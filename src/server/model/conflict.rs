//! Domain models for translated query failures.

use crate::model::api::CascadeDto;

/// Row returned by the reference lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRow {
    pub id: String,
    pub name: String,
}

/// What could be learned about the row that still references the target of a failed write.
///
/// Built per request and discarded once the response is written. Only `id` and `name`
/// reach the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    pub table: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

impl ConflictReport {
    /// Report for a referencing row that was found.
    pub fn named(table: &str, row: ReferenceRow) -> Self {
        Self {
            table: Some(table.to_string()),
            id: Some(row.id),
            name: Some(row.name),
        }
    }

    /// Report for a referencing row whose lookup failed.
    pub fn id_only(table: &str, id: &str) -> Self {
        Self {
            table: Some(table.to_string()),
            id: Some(id.to_string()),
            name: None,
        }
    }

    pub fn into_dto(self) -> CascadeDto {
        CascadeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Client-facing outcome of a failed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// 409, the target is still referenced elsewhere.
    Conflict {
        message: String,
        cascade: Option<ConflictReport>,
    },
    /// 400, any other rejected query.
    BadRequest { message: String },
}
