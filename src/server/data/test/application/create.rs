use super::*;

#[tokio::test]
async fn creates_application_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let application = ApplicationRepository::new(db)
        .create(CreateApplicationParam {
            name: "Billing".to_string(),
            owner_id: owner.id,
        })
        .await?;

    assert_eq!(application.name, "Billing");
    assert_eq!(application.owner_id, owner.id);

    Ok(())
}

/// Tests creating an application for an owner with no user row.
///
/// Expected: Err(DbErr) from the owner foreign key
#[tokio::test]
async fn fails_for_unknown_owner() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ApplicationRepository::new(db)
        .create(CreateApplicationParam {
            name: "Billing".to_string(),
            owner_id: Uuid::new_v4(),
        })
        .await;

    assert!(result.is_err());
}
