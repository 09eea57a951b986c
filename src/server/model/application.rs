//! Application domain models and parameters.
//!
//! Every application has exactly one owning user. The owner reference blocks deletion of
//! that user until the application is removed or handed to someone else.

use uuid::Uuid;

use crate::model::application::{ApplicationDto, CreateApplicationDto, UpdateApplicationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: Uuid,
    pub name: String,
    /// ID of the owning user.
    pub owner_id: Uuid,
}

impl Application {
    pub fn from_entity(entity: entity::application::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
        }
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateApplicationParam {
    pub name: String,
    pub owner_id: Uuid,
}

impl From<CreateApplicationDto> for CreateApplicationParam {
    fn from(dto: CreateApplicationDto) -> Self {
        Self {
            name: dto.name,
            owner_id: dto.owner_id,
        }
    }
}

/// Parameters for updating an application. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateApplicationParam {
    pub name: Option<String>,
    pub owner_id: Option<Uuid>,
}

impl From<UpdateApplicationDto> for UpdateApplicationParam {
    fn from(dto: UpdateApplicationDto) -> Self {
        Self {
            name: dto.name,
            owner_id: dto.owner_id,
        }
    }
}
