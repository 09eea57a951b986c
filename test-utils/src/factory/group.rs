//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group::GroupFactory;
///
/// let group = GroupFactory::new(&db)
///     .name("Operators")
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Group {n}"` where n is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Group {}", next_id()),
        }
    }

    /// Sets the ID for the group.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the name for the group.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// Shorthand for `GroupFactory::new(db).build().await`.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
