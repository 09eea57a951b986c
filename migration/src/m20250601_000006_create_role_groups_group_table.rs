use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_group_table::Group, m20250601_000003_create_role_table::Role,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleGroupsGroup::Table)
                    .if_not_exists()
                    .col(uuid(RoleGroupsGroup::RoleId))
                    .col(uuid(RoleGroupsGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(RoleGroupsGroup::RoleId)
                            .col(RoleGroupsGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_groups_group_role_id")
                            .from(RoleGroupsGroup::Table, RoleGroupsGroup::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_groups_group_group_id")
                            .from(RoleGroupsGroup::Table, RoleGroupsGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleGroupsGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleGroupsGroup {
    Table,
    RoleId,
    GroupId,
}
