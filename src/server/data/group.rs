//! Group data repository for database operations.
//!
//! Deleting a group removes its user and role memberships through the join tables'
//! cascading foreign keys.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;
use uuid::Uuid;

use crate::server::model::group::{CreateGroupParam, Group, UpdateGroupParam};

/// Repository providing database operations for group management.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group with a generated ID.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Returns the IDs from `ids` that have no group row, preserving input order.
    ///
    /// # Returns
    /// - `Ok(Vec<Uuid>)` - Unknown group IDs (empty when all exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_missing(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: HashSet<Uuid> = entity::prelude::Group::find()
            .select_only()
            .column(entity::group::Column::Id)
            .filter(entity::group::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<Uuid>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(ids
            .iter()
            .filter(|id| !existing.contains(*id))
            .copied()
            .collect())
    }

    /// Gets groups ordered by name with pagination.
    ///
    /// # Returns
    /// - `Ok((Vec<Group>, u64))` - Groups for the page and the total number of groups
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Group>, u64), DbErr> {
        let paginator = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Name)
            .order_by_asc(entity::group::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let groups = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Group::from_entity)
            .collect();

        Ok((groups, total))
    }

    /// Updates a group's name.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The updated group
    /// - `Ok(None)` - No group with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, param: UpdateGroupParam) -> Result<Option<Group>, DbErr> {
        let Some(entity) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let entity = match param.name {
            Some(name) => {
                let mut active: entity::group::ActiveModel = entity.into();
                active.name = ActiveValue::Set(name);
                active.update(self.db).await?
            }
            None => entity,
        };

        Ok(Some(Group::from_entity(entity)))
    }

    /// Deletes a group by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 if the group did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
