//! Application data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::application::{
    Application, CreateApplicationParam, UpdateApplicationParam,
};

/// Repository providing database operations for application management.
pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    /// Creates a new ApplicationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an application with a generated ID.
    ///
    /// # Arguments
    /// - `param` - Name and owner of the application; the owner must exist
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application
    /// - `Err(DbErr)` - Database error during insert, including an unknown owner
    pub async fn create(&self, param: CreateApplicationParam) -> Result<Application, DbErr> {
        let entity = entity::application::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            owner_id: ActiveValue::Set(param.owner_id),
        }
        .insert(self.db)
        .await?;

        Ok(Application::from_entity(entity))
    }

    /// Finds an application by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - Application found
    /// - `Ok(None)` - No application with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>, DbErr> {
        let entity = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Application::from_entity))
    }

    /// Gets applications ordered by name with pagination.
    ///
    /// # Returns
    /// - `Ok((Vec<Application>, u64))` - Applications for the page and the total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Application>, u64), DbErr> {
        let paginator = entity::prelude::Application::find()
            .order_by_asc(entity::application::Column::Name)
            .order_by_asc(entity::application::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let applications = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Application::from_entity)
            .collect();

        Ok((applications, total))
    }

    /// Updates an application's name and/or owner.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - The updated application
    /// - `Ok(None)` - No application with that ID
    /// - `Err(DbErr)` - Database error during update, including an unknown owner
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateApplicationParam,
    ) -> Result<Option<Application>, DbErr> {
        let Some(entity) = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.name.is_none() && param.owner_id.is_none() {
            return Ok(Some(Application::from_entity(entity)));
        }

        let mut active: entity::application::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(owner_id) = param.owner_id {
            active.owner_id = ActiveValue::Set(owner_id);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Application::from_entity(entity)))
    }

    /// Deletes an application by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 if the application did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
