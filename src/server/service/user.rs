//! User service for business logic.
//!
//! This module provides the `UserService` for managing users and their group memberships.
//! It validates referenced groups before writing and maps missing rows to `NotFound`.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{group::GroupRepository, user::UserRepository},
    error::AppError,
    model::{
        pagination::Page,
        user::{CreateUserParam, UpdateUserParam, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - One of the group IDs does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        require_groups(self.db, &param.group_ids).await?;

        let user = UserRepository::new(self.db).create(param).await?;

        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Retrieves users ordered by name with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    pub async fn list(&self, page: u64, per_page: u64) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page::new(users, total, page, per_page))
    }

    /// Updates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - One of the new group IDs does not exist
    pub async fn update(&self, id: Uuid, param: UpdateUserParam) -> Result<User, AppError> {
        if let Some(group_ids) = &param.group_ids {
            require_groups(self.db, group_ids).await?;
        }

        UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Deletes a user.
    ///
    /// A user that still owns an application cannot be deleted. The database rejects the
    /// delete and the error surfaces as `AppError::DbErr`, which is answered with a
    /// localized 409.
    ///
    /// # Returns
    /// - `Ok(())` - The user was deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error, including a reference conflict
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

fn user_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

/// Fails with `BadRequest` listing every group ID that does not exist.
pub(super) async fn require_groups(
    db: &DatabaseConnection,
    group_ids: &[Uuid],
) -> Result<(), AppError> {
    let missing = GroupRepository::new(db).find_missing(group_ids).await?;

    if !missing.is_empty() {
        let ids: Vec<String> = missing.iter().map(Uuid::to_string).collect();
        return Err(AppError::BadRequest(format!(
            "Unknown group IDs: {}",
            ids.join(", ")
        )));
    }

    Ok(())
}
