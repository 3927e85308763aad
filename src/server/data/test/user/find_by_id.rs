use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(user.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "Bob");

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
