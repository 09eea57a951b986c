use super::*;

#[tokio::test]
async fn finds_role_with_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_role_to_group(db, role.id, group.id).await?;

    let found = RoleRepository::new(db).find_by_id(role.id).await?.unwrap();

    assert_eq!(found.name, role.name);
    assert_eq!(found.group_ids, vec![group.id]);

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

    assert!(RoleRepository::new(db)
        .find_by_id(Uuid::new_v4())
        .await?
        .is_none());

    Ok(())
}
