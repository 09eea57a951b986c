use super::*;

/// Tests finding a user with its memberships.
///
/// Expected: Ok(Some) with group IDs
#[tokio::test]
async fn finds_user_with_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_user_to_group(db, user.id, group.id).await?;

    let found = UserRepository::new(db).find_by_id(user.id).await?;

    let found = found.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.name, user.name);
    assert_eq!(found.group_ids, vec![group.id]);

    Ok(())
}

/// Tests looking up an ID with no user row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_id(Uuid::new_v4()).await?;

    assert!(found.is_none());

    Ok(())
}
