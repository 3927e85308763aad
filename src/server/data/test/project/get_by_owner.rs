use super::*;

/// Tests listing the projects of a single owner.
///
/// Expected: Ok with only the owner's projects, in ID order
#[tokio::test]
async fn returns_only_owned_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let first = factory::create_project(db, owner.id).await?;
    let second = factory::create_project(db, owner.id).await?;
    factory::create_project(db, other.id).await?;

    let repo = ProjectRepository::new(db);
    let projects = repo.get_by_owner(owner.id).await?;

    assert_eq!(
        projects.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests listing projects for a user without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_owner_without_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.get_by_owner(owner.id).await?.is_empty());

    Ok(())
}
