pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_group_table;
mod m20250601_000003_create_role_table;
mod m20250601_000004_create_application_table;
mod m20250601_000005_create_user_groups_group_table;
mod m20250601_000006_create_role_groups_group_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_group_table::Migration),
            Box::new(m20250601_000003_create_role_table::Migration),
            Box::new(m20250601_000004_create_application_table::Migration),
            Box::new(m20250601_000005_create_user_groups_group_table::Migration),
            Box::new(m20250601_000006_create_role_groups_group_table::Migration),
        ]
    }
}
