//! Role domain models and parameters.
//!
//! Roles are grouped the same way users are, through the `role_groups_group` join table.

use uuid::Uuid;

use crate::{
    model::role::{CreateRoleDto, RoleDto, UpdateRoleDto},
    server::model::user::dedup_ids,
};

/// Role with the IDs of the groups it is assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub group_ids: Vec<Uuid>,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model, group_ids: Vec<Uuid>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            group_ids,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
            group_ids: self.group_ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleParam {
    pub name: String,
    pub group_ids: Vec<Uuid>,
}

impl From<CreateRoleDto> for CreateRoleParam {
    fn from(dto: CreateRoleDto) -> Self {
        Self {
            name: dto.name,
            group_ids: dedup_ids(dto.group_ids),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoleParam {
    pub name: Option<String>,
    pub group_ids: Option<Vec<Uuid>>,
}

impl From<UpdateRoleDto> for UpdateRoleParam {
    fn from(dto: UpdateRoleDto) -> Self {
        Self {
            name: dto.name,
            group_ids: dto.group_ids.map(dedup_ids),
        }
    }
}
