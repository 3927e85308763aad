use super::*;

/// Tests deleting a project.
///
/// Verifies the project row is removed while its owner is kept.
///
/// Expected: Ok(true) with owner still present
#[tokio::test]
async fn deletes_project_and_keeps_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, project) = factory::helpers::create_project_with_owner(db).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.delete(project.id).await?);
    assert!(repo.find_by_id(project.id).await?.is_none());
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a project that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    assert!(!repo.delete(1).await?);

    Ok(())
}
