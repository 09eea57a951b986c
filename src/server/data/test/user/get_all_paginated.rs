use super::*;
use test_utils::factory::user::UserFactory;

/// Tests paging through users ordered by name.
///
/// Creates three users and reads them two at a time.
///
/// Expected: first page holds the first two names, second page the last, total is 3
#[tokio::test]
async fn pages_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Carol").build().await?;
    UserFactory::new(db).name("Alice").build().await?;
    UserFactory::new(db).name("Bob").build().await?;

    let repo = UserRepository::new(db);

    let (first, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Alice", "Bob"]
    );

    let (second, total) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Carol");

    Ok(())
}

/// Tests that each user on a page carries only its own group IDs.
#[tokio::test]
async fn attaches_memberships_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = UserFactory::new(db).name("Alice").build().await?;
    UserFactory::new(db).name("Bob").build().await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_user_to_group(db, alice.id, group.id).await?;

    let (users, _) = UserRepository::new(db).get_all_paginated(0, 10).await?;

    assert_eq!(users[0].group_ids, vec![group.id]);
    assert!(users[1].group_ids.is_empty());

    Ok(())
}

/// Tests paging an empty table.
///
/// Expected: Ok with no users and a total of 0
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db).get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
