use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for failures that are not database query failures (404, 500).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// 409 body produced when a write is rejected because another row still references the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictErrorDto {
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cascade: Option<CascadeDto>,
}

/// The referencing row, as far as it could be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CascadeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// 400 body produced for database query failures other than reference conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BadRequestDto {
    pub status_code: u16,
    pub message: String,
}
