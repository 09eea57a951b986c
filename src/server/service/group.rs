//! Group service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::{
        group::{CreateGroupParam, Group, UpdateGroupParam},
        pagination::Page,
    },
};

/// Service providing business logic for group management.
pub struct GroupService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db).create(param).await?;

        Ok(group)
    }

    pub async fn get(&self, id: Uuid) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| group_not_found(id))
    }

    pub async fn list(&self, page: u64, per_page: u64) -> Result<Page<Group>, AppError> {
        let (groups, total) = GroupRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page::new(groups, total, page, per_page))
    }

    pub async fn update(&self, id: Uuid, param: UpdateGroupParam) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| group_not_found(id))
    }

    /// Deletes a group. Users and roles lose the membership.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = GroupRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(group_not_found(id));
        }

        Ok(())
    }
}

fn group_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Group {} not found", id))
}
