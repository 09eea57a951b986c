use super::*;

/// Tests handing an application over to another user.
///
/// Expected: owner changed, name unchanged
#[tokio::test]
async fn transfers_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, application) = factory::helpers::create_owner_with_application(db).await?;
    let new_owner = factory::create_user(db).await?;

    let updated = ApplicationRepository::new(db)
        .update(
            application.id,
            UpdateApplicationParam {
                name: None,
                owner_id: Some(new_owner.id),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.owner_id, new_owner.id);
    assert_eq!(updated.name, application.name);

    Ok(())
}

/// Expected: Ok(Some) unchanged for an empty update
#[tokio::test]
async fn empty_update_returns_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, application) = factory::helpers::create_owner_with_application(db).await?;

    let updated = ApplicationRepository::new(db)
        .update(application.id, UpdateApplicationParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, application.name);
    assert_eq!(updated.owner_id, owner.id);

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, application) = factory::helpers::create_owner_with_application(db).await?;

    let result = ApplicationRepository::new(db)
        .update(
            application.id,
            UpdateApplicationParam {
                name: None,
                owner_id: Some(Uuid::new_v4()),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
