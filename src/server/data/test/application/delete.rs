use super::*;
use crate::server::data::user::UserRepository;

/// Tests that deleting the application releases its owner.
///
/// Expected: application deleted, owner then deletable
#[tokio::test]
async fn deletes_application_and_releases_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, application) = factory::helpers::create_owner_with_application(db).await?;

    assert_eq!(
        ApplicationRepository::new(db).delete(application.id).await?,
        1
    );
    assert_eq!(UserRepository::new(db).delete(owner.id).await?, 1);

    Ok(())
}

#[tokio::test]
async fn returns_zero_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(
        ApplicationRepository::new(db).delete(Uuid::new_v4()).await?,
        0
    );

    Ok(())
}
