//! Group domain models and parameters.

use uuid::Uuid;

use crate::model::group::{CreateGroupDto, GroupDto, UpdateGroupDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
}

impl Group {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
}

impl From<CreateGroupDto> for CreateGroupParam {
    fn from(dto: CreateGroupDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParam {
    pub name: Option<String>,
}

impl From<UpdateGroupDto> for UpdateGroupParam {
    fn from(dto: UpdateGroupDto) -> Self {
        Self { name: dto.name }
    }
}
