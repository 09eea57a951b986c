use super::*;
use test_utils::factory::{group::GroupFactory, role::RoleFactory, user::UserFactory};

/// Tests resolving rows of every directory table by table name.
///
/// Expected: Ok(Some) with the row's id and name
#[tokio::test]
async fn resolves_rows_by_table_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).name("Alice").build().await?;
    let role = RoleFactory::new(db).name("Auditor").build().await?;
    let group = GroupFactory::new(db).name("Operators").build().await?;
    let application = factory::create_application(db, user.id).await?;

    let lookup = ReferenceRepository::new(db);

    for (table, id, name) in [
        ("user", user.id, "Alice".to_string()),
        ("role", role.id, "Auditor".to_string()),
        ("group", group.id, "Operators".to_string()),
        ("application", application.id, application.name.clone()),
    ] {
        let row = lookup
            .find_reference(table, &id.to_string())
            .await
            .unwrap();

        assert_eq!(
            row,
            Some(ReferenceRow {
                id: id.to_string(),
                name,
            }),
            "table {table}"
        );
    }

    Ok(())
}

/// Expected: Ok(None) for a known table without the row
#[tokio::test]
async fn returns_none_for_missing_row() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = ReferenceRepository::new(db)
        .find_reference("application", &Uuid::new_v4().to_string())
        .await
        .unwrap();

    assert!(row.is_none());
}

/// Tests that join tables and unknown names are not resolvable.
///
/// Expected: Err(UnknownTable)
#[tokio::test]
async fn rejects_unknown_table() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lookup = ReferenceRepository::new(db);
    let id = Uuid::new_v4().to_string();

    for table in ["user_groups_group", "ticket"] {
        let result = lookup.find_reference(table, &id).await;

        assert!(
            matches!(result, Err(ReferenceLookupError::UnknownTable(ref name)) if name == table),
            "table {table}"
        );
    }
}

/// Expected: Err(InvalidId) for an id that is not a UUID
#[tokio::test]
async fn rejects_malformed_id() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReferenceRepository::new(db)
        .find_reference("user", "id123")
        .await;

    assert!(matches!(
        result,
        Err(ReferenceLookupError::InvalidId { ref value, .. }) if value == "id123"
    ));
}
