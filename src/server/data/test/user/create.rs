use super::*;

/// Tests creating a user without groups.
///
/// Expected: Ok with a generated ID and no group IDs
#[tokio::test]
async fn creates_user_without_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
            group_ids: Vec::new(),
        })
        .await?;

    assert_eq!(user.name, "Alice");
    assert!(user.group_ids.is_empty());
    assert!(repo.exists(user.id).await?);

    Ok(())
}

/// Tests creating a user that joins existing groups.
///
/// Expected: Ok with the memberships persisted
#[tokio::test]
async fn creates_user_with_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;
    let mut group_ids = vec![first.id, second.id];
    group_ids.sort();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
            group_ids: group_ids.clone(),
        })
        .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.group_ids, group_ids);

    Ok(())
}

/// Tests that joining an unknown group is rejected by the join table's foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_group() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Alice".to_string(),
            group_ids: vec![Uuid::new_v4()],
        })
        .await;

    assert!(result.is_err());
}

/// Tests that a rejected membership insert leaves no user row behind.
///
/// Expected: Err(DbErr) and an empty user table
#[tokio::test]
async fn failed_membership_insert_rolls_back_create() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
            group_ids: vec![group.id, Uuid::new_v4()],
        })
        .await;

    assert!(result.is_err());

    let (users, total) = repo.get_all_paginated(0, 10).await?;
    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
