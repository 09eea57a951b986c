//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test roles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::role::RoleFactory;
///
/// let role = RoleFactory::new(&db)
///     .name("Auditor")
///     .build()
///     .await?;
/// ```
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Role {n}"` where n is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Role {}", next_id()),
        }
    }

    /// Sets the ID for the role.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the name for the role.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values.
///
/// Shorthand for `RoleFactory::new(db).build().await`.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}
