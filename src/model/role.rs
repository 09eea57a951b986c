use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleDto {
    pub id: Uuid,
    pub name: String,
    pub group_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRoleDto {
    pub name: String,
    #[serde(default)]
    pub group_ids: Vec<Uuid>,
}

/// Partial update; omitted fields are left unchanged and `group_ids` replaces the role's groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    pub name: Option<String>,
    pub group_ids: Option<Vec<Uuid>>,
}
