use super::*;
use test_utils::factory::group::GroupFactory;

#[tokio::test]
async fn pages_groups_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GroupFactory::new(db).name("Support").build().await?;
    GroupFactory::new(db).name("Operators").build().await?;
    GroupFactory::new(db).name("Admins").build().await?;

    let (groups, total) = GroupRepository::new(db).get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        groups.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
        vec!["Admins", "Operators"]
    );

    Ok(())
}

/// Tests reading past the last page.
///
/// Expected: no groups, total still reported
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_group(db).await?;

    let (groups, total) = GroupRepository::new(db).get_all_paginated(5, 10).await?;

    assert!(groups.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
