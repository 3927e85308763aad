use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.delete(123).await?);

    Ok(())
}

/// Tests that deleting a user removes the projects it owns.
///
/// Expected: Ok with the owned project deleted and the other owner's project kept
#[tokio::test]
async fn cascades_to_owned_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, project) = factory::helpers::create_project_with_owner(db).await?;
    let (_, other_project) = factory::helpers::create_project_with_owner(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(owner.id).await?);

    assert!(entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Project::find_by_id(other_project.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
