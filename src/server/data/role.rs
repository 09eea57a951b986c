//! Role data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::role::{CreateRoleParam, Role, UpdateRoleParam};

/// Repository providing database operations for role management.
pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role with a generated ID and its group memberships.
    ///
    /// # Arguments
    /// - `param` - Name and group IDs of the new role; groups must exist
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(DbErr)` - Database error during insert, including unknown group IDs
    pub async fn create(&self, param: CreateRoleParam) -> Result<Role, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::role::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
        }
        .insert(&txn)
        .await?;

        insert_memberships(&txn, entity.id, &param.group_ids).await?;

        txn.commit().await?;

        Ok(Role::from_entity(entity, param.group_ids))
    }

    /// Finds a role by ID together with its group IDs.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Role found
    /// - `Ok(None)` - No role with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, DbErr> {
        let Some(entity) = entity::prelude::Role::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let group_ids = self.group_ids_for(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(Role::from_entity(entity, group_ids)))
    }

    /// Gets roles ordered by name with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of roles per page
    ///
    /// # Returns
    /// - `Ok((Vec<Role>, u64))` - Roles for the page and the total number of roles
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Role>, u64), DbErr> {
        let paginator = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Name)
            .order_by_asc(entity::role::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let mut memberships = self.group_ids_for(&ids).await?;

        let roles = entities
            .into_iter()
            .map(|e| {
                let group_ids = memberships.remove(&e.id).unwrap_or_default();
                Role::from_entity(e, group_ids)
            })
            .collect();

        Ok((roles, total))
    }

    /// Updates a role's name and, when provided, replaces its group memberships.
    ///
    /// All writes happen in one transaction. A failed membership insert leaves the role unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - The updated role
    /// - `Ok(None)` - No role with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, param: UpdateRoleParam) -> Result<Option<Role>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Role::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let entity = match param.name {
            Some(name) => {
                let mut active: entity::role::ActiveModel = entity.into();
                active.name = ActiveValue::Set(name);
                active.update(&txn).await?
            }
            None => entity,
        };

        if let Some(group_ids) = param.group_ids {
            entity::prelude::RoleGroup::delete_many()
                .filter(entity::role_group::Column::RoleId.eq(id))
                .exec(&txn)
                .await?;
            insert_memberships(&txn, id, &group_ids).await?;
        }

        txn.commit().await?;

        let group_ids = self.group_ids_for(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(Role::from_entity(entity, group_ids)))
    }

    /// Deletes a role by ID. Group memberships cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 if the role did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Role::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Loads group IDs for the given roles in one query, sorted per role.
    async fn group_ids_for(&self, role_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Uuid>>, DbErr> {
        if role_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::RoleGroup::find()
            .filter(entity::role_group::Column::RoleId.is_in(role_ids.iter().copied()))
            .order_by_asc(entity::role_group::Column::GroupId)
            .all(self.db)
            .await?;

        let mut map: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for membership in memberships {
            map.entry(membership.role_id)
                .or_default()
                .push(membership.group_id);
        }

        Ok(map)
    }
}

/// Inserts one join row per group. Runs inside the caller's transaction.
async fn insert_memberships<C: ConnectionTrait>(
    conn: &C,
    role_id: Uuid,
    group_ids: &[Uuid],
) -> Result<(), DbErr> {
    for group_id in group_ids {
        entity::role_group::ActiveModel {
            role_id: ActiveValue::Set(role_id),
            group_id: ActiveValue::Set(*group_id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
