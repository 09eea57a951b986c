//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Adds a user to a group through the `user_groups_group` join table.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `group_id` - ID of an existing group
///
/// # Returns
/// - `Ok(entity::user_group::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn add_user_to_group(
    db: &DatabaseConnection,
    user_id: Uuid,
    group_id: Uuid,
) -> Result<entity::user_group::Model, DbErr> {
    entity::user_group::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}

/// Adds a role to a group through the `role_groups_group` join table.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_id` - ID of an existing role
/// - `group_id` - ID of an existing group
///
/// # Returns
/// - `Ok(entity::role_group::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn add_role_to_group(
    db: &DatabaseConnection,
    role_id: Uuid,
    group_id: Uuid,
) -> Result<entity::role_group::Model, DbErr> {
    entity::role_group::ActiveModel {
        role_id: ActiveValue::Set(role_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}

/// Creates a user that owns one application.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, application))` - The owner and the owned application
/// - `Err(DbErr)` - Database error during insert
pub async fn create_owner_with_application(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::application::Model), DbErr> {
    let user = super::user::create_user(db).await?;
    let application = super::application::create_application(db, user.id).await?;

    Ok((user, application))
}
