use super::*;

/// Tests renaming a user without touching memberships.
///
/// Expected: name changed, group IDs unchanged
#[tokio::test]
async fn renames_user_and_keeps_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_user_to_group(db, user.id, group.id).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                group_ids: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.group_ids, vec![group.id]);

    Ok(())
}

/// Tests that provided group IDs replace the existing memberships.
#[tokio::test]
async fn replaces_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let old_group = factory::create_group(db).await?;
    let new_group = factory::create_group(db).await?;
    factory::helpers::add_user_to_group(db, user.id, old_group.id).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                name: None,
                group_ids: Some(vec![new_group.id]),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, user.name);
    assert_eq!(updated.group_ids, vec![new_group.id]);
    assert_eq!(
        repo.find_by_id(user.id).await?.unwrap().group_ids,
        vec![new_group.id]
    );

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update(Uuid::new_v4(), UpdateUserParam::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that a failed membership insert rolls back the whole update.
///
/// The second group ID has no group row, so its join insert is rejected after the
/// rename, the membership delete and the first insert have run.
///
/// Expected: Err(DbErr), name and memberships unchanged
#[tokio::test]
async fn failed_membership_insert_rolls_back_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let old_group = factory::create_group(db).await?;
    let new_group = factory::create_group(db).await?;
    factory::helpers::add_user_to_group(db, user.id, old_group.id).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                group_ids: Some(vec![new_group.id, Uuid::new_v4()]),
            },
        )
        .await;

    assert!(result.is_err());

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.name, user.name);
    assert_eq!(stored.group_ids, vec![old_group.id]);

    Ok(())
}
