use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_user_table::User, m20250601_000002_create_group_table::Group,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGroupsGroup::Table)
                    .if_not_exists()
                    .col(uuid(UserGroupsGroup::UserId))
                    .col(uuid(UserGroupsGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(UserGroupsGroup::UserId)
                            .col(UserGroupsGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_groups_group_user_id")
                            .from(UserGroupsGroup::Table, UserGroupsGroup::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_groups_group_group_id")
                            .from(UserGroupsGroup::Table, UserGroupsGroup::GroupId)
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
            .drop_table(Table::drop().table(UserGroupsGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserGroupsGroup {
    Table,
    UserId,
    GroupId,
}
