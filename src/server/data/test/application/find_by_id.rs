use super::*;

#[tokio::test]
async fn finds_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, application) = factory::helpers::create_owner_with_application(db).await?;

    let found = ApplicationRepository::new(db)
        .find_by_id(application.id)
        .await?
        .unwrap();

    assert_eq!(found.name, application.name);
    assert_eq!(found.owner_id, owner.id);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ApplicationRepository::new(db)
        .find_by_id(Uuid::new_v4())
        .await?
        .is_none());

    Ok(())
}
