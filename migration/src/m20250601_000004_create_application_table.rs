use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_uuid(Application::Id))
                    .col(string(Application::Name))
                    .col(uuid(Application::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_owner_id")
                            .from(Application::Table, Application::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    Name,
    OwnerId,
}
