use super::*;

/// Tests reporting the IDs with no group row.
///
/// Expected: only the unknown IDs, in input order
#[tokio::test]
async fn returns_unknown_ids_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let first_unknown = Uuid::new_v4();
    let second_unknown = Uuid::new_v4();

    let missing = GroupRepository::new(db)
        .find_missing(&[first_unknown, group.id, second_unknown])
        .await?;

    assert_eq!(missing, vec![first_unknown, second_unknown]);

    Ok(())
}

/// Expected: Ok(empty) for all-known and empty input
#[tokio::test]
async fn returns_empty_when_all_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let repo = GroupRepository::new(db);

    assert!(repo.find_missing(&[group.id]).await?.is_empty());
    assert!(repo.find_missing(&[]).await?.is_empty());

    Ok(())
}
