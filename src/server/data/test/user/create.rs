use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository stores every field and returns the
/// generated ID.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "John".to_string(),
            email: "john@example.com".to_string(),
            age: 25,
            student_id: "S1234567".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.id > 0);
    assert_eq!(user.name, "John");
    assert_eq!(user.email, "john@example.com");
    assert_eq!(user.age, 25);
    assert_eq!(user.student_id, "S1234567");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that separate creations receive distinct IDs.
///
/// Expected: Ok with two different IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        age: 22,
        student_id: "S7654321".to_string(),
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
