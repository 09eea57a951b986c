//! Role service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::role::RoleRepository,
    error::AppError,
    model::{
        pagination::Page,
        role::{CreateRoleParam, Role, UpdateRoleParam},
    },
    service::user::require_groups,
};

/// Service providing business logic for role management.
pub struct RoleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role after checking that its groups exist.
    pub async fn create(&self, param: CreateRoleParam) -> Result<Role, AppError> {
        require_groups(self.db, &param.group_ids).await?;

        let role = RoleRepository::new(self.db).create(param).await?;

        Ok(role)
    }

    pub async fn get(&self, id: Uuid) -> Result<Role, AppError> {
        RoleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| role_not_found(id))
    }

    pub async fn list(&self, page: u64, per_page: u64) -> Result<Page<Role>, AppError> {
        let (roles, total) = RoleRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page::new(roles, total, page, per_page))
    }

    /// Updates a role, replacing its groups when new group IDs are given.
    pub async fn update(&self, id: Uuid, param: UpdateRoleParam) -> Result<Role, AppError> {
        if let Some(group_ids) = &param.group_ids {
            require_groups(self.db, group_ids).await?;
        }

        RoleRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| role_not_found(id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = RoleRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(role_not_found(id));
        }

        Ok(())
    }
}

fn role_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Role {} not found", id))
}
