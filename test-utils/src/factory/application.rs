//! Application factory for creating test application entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test applications owned by an existing user.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::application::ApplicationFactory;
///
/// let application = ApplicationFactory::new(&db, owner.id)
///     .name("Billing")
///     .build()
///     .await?;
/// ```
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
    owner_id: Uuid,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Application {n}"` where n is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user owning the application, must already exist
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Application {}", next_id()),
            owner_id,
        }
    }

    /// Sets the ID for the application.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the name for the application.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the application entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::application::Model)` - Created application entity
    /// - `Err(DbErr)` - Database error during insert, including a missing owner
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an application with default values owned by `owner_id`.
pub async fn create_application(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, owner_id).build().await
}
