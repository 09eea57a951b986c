//! User domain models and parameters.
//!
//! Users belong to any number of groups. Group membership is stored in the
//! `user_groups_group` join table and carried on the domain model as a list of group IDs.

use uuid::Uuid;

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// User with the IDs of the groups it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub group_ids: Vec<Uuid>,
}

impl User {
    /// Converts an entity model and its group memberships into the domain model.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `group_ids` - IDs of the groups the user belongs to
    pub fn from_entity(entity: entity::user::Model, group_ids: Vec<Uuid>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            group_ids,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            group_ids: self.group_ids,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    /// Deduplicated group IDs.
    pub group_ids: Vec<Uuid>,
}

impl From<CreateUserDto> for CreateUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            group_ids: dedup_ids(dto.group_ids),
        }
    }
}

/// Parameters for updating an existing user.
///
/// `None` leaves a field unchanged. `Some` group IDs replace the user's memberships.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub group_ids: Option<Vec<Uuid>>,
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            group_ids: dto.group_ids.map(dedup_ids),
        }
    }
}

/// Sorts and removes duplicate IDs so membership inserts never collide on the join key.
pub fn dedup_ids(mut ids: Vec<Uuid>) -> Vec<Uuid> {
    ids.sort();
    ids.dedup();
    ids
}
