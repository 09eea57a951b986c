//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their group
//! memberships with conversion between entity models and domain models at the
//! infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user with a generated ID and its group memberships.
    ///
    /// # Arguments
    /// - `param` - Name and group IDs of the new user; groups must exist
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including unknown group IDs
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
        }
        .insert(&txn)
        .await?;

        insert_memberships(&txn, entity.id, &param.group_ids).await?;

        txn.commit().await?;

        Ok(User::from_entity(entity, param.group_ids))
    }

    /// Finds a user by ID together with its group IDs.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let group_ids = self.group_ids_for(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(User::from_entity(entity, group_ids)))
    }

    /// Checks whether a user with the given ID exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets users ordered by name with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((Vec<User>, u64))` - Users for the page and the total number of users
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let mut memberships = self.group_ids_for(&ids).await?;

        let users = entities
            .into_iter()
            .map(|e| {
                let group_ids = memberships.remove(&e.id).unwrap_or_default();
                User::from_entity(e, group_ids)
            })
            .collect();

        Ok((users, total))
    }

    /// Updates a user's name and, when provided, replaces its group memberships.
    ///
    /// All writes happen in one transaction. A failed membership insert leaves the user unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::User::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let entity = match param.name {
            Some(name) => {
                let mut active: entity::user::ActiveModel = entity.into();
                active.name = ActiveValue::Set(name);
                active.update(&txn).await?
            }
            None => entity,
        };

        if let Some(group_ids) = param.group_ids {
            entity::prelude::UserGroup::delete_many()
                .filter(entity::user_group::Column::UserId.eq(id))
                .exec(&txn)
                .await?;
            insert_memberships(&txn, id, &group_ids).await?;
        }

        txn.commit().await?;

        let group_ids = self.group_ids_for(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(User::from_entity(entity, group_ids)))
    }

    /// Deletes a user by ID. Group memberships cascade.
    ///
    /// Fails with a foreign key violation while the user still owns an application.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 if the user did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Loads group IDs for the given users in one query, sorted per user.
    async fn group_ids_for(&self, user_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Uuid>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::user_group::Column::GroupId)
            .all(self.db)
            .await?;

        let mut map: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for membership in memberships {
            map.entry(membership.user_id)
                .or_default()
                .push(membership.group_id);
        }

        Ok(map)
    }
}

/// Inserts one join row per group. Runs inside the caller's transaction.
async fn insert_memberships<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    group_ids: &[Uuid],
) -> Result<(), DbErr> {
    for group_id in group_ids {
        entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(*group_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
