use super::*;

/// Tests paginating projects across owners.
///
/// Expected: Ok with total of 3 and a single project on the last page
#[tokio::test]
async fn paginates_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::helpers::create_project_with_owner(db).await?;
    factory::create_project(db, owner.id).await?;
    let (_, last) = factory::helpers::create_project_with_owner(db).await?;

    let repo = ProjectRepository::new(db);
    let (page, total) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, last.id);

    Ok(())
}
