//! Application service for business logic.
//!
//! Checks that the owning user exists before an application is created or handed over.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{application::ApplicationRepository, user::UserRepository},
    error::AppError,
    model::{
        application::{Application, CreateApplicationParam, UpdateApplicationParam},
        pagination::Page,
    },
};

/// Service providing business logic for application management.
pub struct ApplicationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an application.
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application
    /// - `Err(AppError::BadRequest)` - The owner does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateApplicationParam) -> Result<Application, AppError> {
        self.require_owner(param.owner_id).await?;

        let application = ApplicationRepository::new(self.db).create(param).await?;

        Ok(application)
    }

    pub async fn get(&self, id: Uuid) -> Result<Application, AppError> {
        ApplicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| application_not_found(id))
    }

    pub async fn list(&self, page: u64, per_page: u64) -> Result<Page<Application>, AppError> {
        let (applications, total) = ApplicationRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page::new(applications, total, page, per_page))
    }

    /// Updates an application's name and/or owner.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(AppError::NotFound)` - No application with that ID
    /// - `Err(AppError::BadRequest)` - The new owner does not exist
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateApplicationParam,
    ) -> Result<Application, AppError> {
        if let Some(owner_id) = param.owner_id {
            self.require_owner(owner_id).await?;
        }

        ApplicationRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| application_not_found(id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = ApplicationRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(application_not_found(id));
        }

        Ok(())
    }

    async fn require_owner(&self, owner_id: Uuid) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(owner_id).await? {
            return Err(AppError::BadRequest(format!(
                "Owner user {} not found",
                owner_id
            )));
        }

        Ok(())
    }
}

fn application_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Application {} not found", id))
}
