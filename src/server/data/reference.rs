//! Reference lookup backed by the directory tables.
//!
//! Resolves the `id` and `name` of a row that blocked a write, given the table name the
//! database reported. Only the named directory tables are known; join tables and any other
//! name are lookup errors.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    error::lookup::ReferenceLookupError, model::conflict::ReferenceRow,
    service::conflict::ReferenceLookup,
};

pub struct ReferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selects only the id and name columns of the row with `id`.
    async fn find_named<E>(
        &self,
        id: Uuid,
        id_column: E::Column,
        name_column: E::Column,
    ) -> Result<Option<ReferenceRow>, DbErr>
    where
        E: EntityTrait,
    {
        let row = E::find()
            .select_only()
            .column(id_column)
            .column(name_column)
            .filter(id_column.eq(id))
            .into_tuple::<(Uuid, String)>()
            .one(self.db)
            .await?;

        Ok(row.map(|(id, name)| ReferenceRow {
            id: id.to_string(),
            name,
        }))
    }
}

#[async_trait]
impl ReferenceLookup for ReferenceRepository<'_> {
    async fn find_reference(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<ReferenceRow>, ReferenceLookupError> {
        use entity::prelude::{Application, Group, Role, User};

        let parse_id = || {
            Uuid::parse_str(id).map_err(|source| ReferenceLookupError::InvalidId {
                value: id.to_string(),
                source,
            })
        };

        let row = if table == User.table_name() {
            self.find_named::<User>(parse_id()?, entity::user::Column::Id, entity::user::Column::Name)
                .await?
        } else if table == Role.table_name() {
            self.find_named::<Role>(parse_id()?, entity::role::Column::Id, entity::role::Column::Name)
                .await?
        } else if table == Group.table_name() {
            self.find_named::<Group>(
                parse_id()?,
                entity::group::Column::Id,
                entity::group::Column::Name,
            )
            .await?
        } else if table == Application.table_name() {
            self.find_named::<Application>(
                parse_id()?,
                entity::application::Column::Id,
                entity::application::Column::Name,
            )
            .await?
        } else {
            return Err(ReferenceLookupError::UnknownTable(table.to_string()));
        };

        Ok(row)
    }
}
