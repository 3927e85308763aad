use super::*;

/// Tests partially updating a user's age.
///
/// Verifies that only the patched field changes.
///
/// Expected: Ok with age updated and other fields unchanged
#[tokio::test]
async fn updates_only_age() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Alice")
        .email("alice@example.com")
        .age(22)
        .student_id("S7654321")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            PatchUserParam {
                age: Some(30),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.age, 30);
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.email, "alice@example.com");
    assert_eq!(updated.student_id, "S7654321");

    Ok(())
}

/// Tests an update with no fields present.
///
/// Expected: Ok with the stored user returned unchanged
#[tokio::test]
async fn empty_patch_returns_unchanged_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.update(user.id, PatchUserParam::default()).await?;

    assert_eq!(updated.name, user.name);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.age, user.age);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            7,
            PatchUserParam {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
