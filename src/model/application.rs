use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateApplicationDto {
    pub name: String,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationDto {
    pub name: Option<String>,
    pub owner_id: Option<Uuid>,
}
