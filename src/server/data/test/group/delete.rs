use super::*;
use crate::server::data::{role::RoleRepository, user::UserRepository};

/// Tests deleting a group with user and role members.
///
/// Expected: one row deleted, members kept without the membership
#[tokio::test]
async fn deletes_group_and_cascades_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let user = factory::create_user(db).await?;
    let role = factory::create_role(db).await?;
    factory::helpers::add_user_to_group(db, user.id, group.id).await?;
    factory::helpers::add_role_to_group(db, role.id, group.id).await?;

    assert_eq!(GroupRepository::new(db).delete(group.id).await?, 1);

    let user = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    let role = RoleRepository::new(db).find_by_id(role.id).await?.unwrap();
    assert!(user.group_ids.is_empty());
    assert!(role.group_ids.is_empty());

    Ok(())
}

#[tokio::test]
async fn returns_zero_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(GroupRepository::new(db).delete(Uuid::new_v4()).await?, 0);

    Ok(())
}
