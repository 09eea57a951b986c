use super::*;

#[tokio::test]
async fn finds_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let found = GroupRepository::new(db).find_by_id(group.id).await?.unwrap();

    assert_eq!(found.id, group.id);
    assert_eq!(found.name, group.name);

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

    assert!(GroupRepository::new(db)
        .find_by_id(Uuid::new_v4())
        .await?
        .is_none());

    Ok(())
}
