use super::*;
use crate::server::error::query::{QueryFailure, SQLITE_FOREIGN_KEY_VIOLATION};

/// Tests deleting a user that belongs to groups.
///
/// Expected: one row deleted, memberships removed by cascade
#[tokio::test]
async fn deletes_user_and_memberships() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::helpers::add_user_to_group(db, user.id, group.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert_eq!(deleted, 1);
    assert!(!repo.exists(user.id).await?);
    assert_eq!(entity::prelude::UserGroup::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(Uuid::new_v4()).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests deleting a user that still owns an application.
///
/// The application's owner foreign key rejects the delete, and the error carries the
/// driver's foreign key violation code.
///
/// Expected: Err(DbErr) classified as a foreign key violation
#[tokio::test]
async fn fails_while_user_owns_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _application) = factory::helpers::create_owner_with_application(db).await?;

    let repo = UserRepository::new(db);
    let err = repo.delete(owner.id).await.unwrap_err();

    let failure = QueryFailure::from_db_err(&err).unwrap();
    assert_eq!(failure.code.as_deref(), Some(SQLITE_FOREIGN_KEY_VIOLATION));
    assert!(failure.is_foreign_key_violation());
    assert!(failure.detail.is_none());
    assert!(repo.exists(owner.id).await?);

    Ok(())
}
