use super::*;

#[tokio::test]
async fn creates_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "Operators".to_string(),
        })
        .await?;

    assert_eq!(group.name, "Operators");
    assert_eq!(repo.find_by_id(group.id).await?, Some(group));

    Ok(())
}
