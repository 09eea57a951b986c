use super::*;

/// Tests creating a role assigned to a group.
///
/// Expected: Ok with the membership persisted
#[tokio::test]
async fn creates_role_with_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = RoleRepository::new(db);
    let role = repo
        .create(CreateRoleParam {
            name: "Auditor".to_string(),
            group_ids: vec![group.id],
        })
        .await?;

    assert_eq!(role.name, "Auditor");
    assert_eq!(role.group_ids, vec![group.id]);
    assert_eq!(
        repo.find_by_id(role.id).await?.unwrap().group_ids,
        vec![group.id]
    );

    Ok(())
}

/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_group() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoleRepository::new(db)
        .create(CreateRoleParam {
            name: "Auditor".to_string(),
            group_ids: vec![Uuid::new_v4()],
        })
        .await;

    assert!(result.is_err());
}

/// Expected: Err(DbErr) and no role row left behind
#[tokio::test]
async fn failed_membership_insert_rolls_back_create() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = RoleRepository::new(db);
    let result = repo
        .create(CreateRoleParam {
            name: "Auditor".to_string(),
            group_ids: vec![group.id, Uuid::new_v4()],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(repo.get_all_paginated(0, 10).await?.1, 0);

    Ok(())
}
