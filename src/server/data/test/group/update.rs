use super::*;

#[tokio::test]
async fn renames_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let updated = GroupRepository::new(db)
        .update(
            group.id,
            UpdateGroupParam {
                name: Some("Renamed".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, group.id);
    assert_eq!(updated.name, "Renamed");

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

    let updated = GroupRepository::new(db)
        .update(
            Uuid::new_v4(),
            UpdateGroupParam {
                name: Some("Renamed".to_string()),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
