use super::*;

/// Tests creating a project for an existing user.
///
/// Expected: Ok with project created and owner recorded
#[tokio::test]
async fn creates_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let result = repo
        .create(CreateProjectParam {
            name: "Proj1".to_string(),
            description: Some("Desc1".to_string()),
            owner_id: user.id,
        })
        .await;

    assert!(result.is_ok());
    let project = result.unwrap();
    assert!(project.id > 0);
    assert_eq!(project.name, "Proj1");
    assert_eq!(project.description, Some("Desc1".to_string()));
    assert_eq!(project.owner_id, user.id);

    Ok(())
}

/// Tests creating a project without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_project_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(CreateProjectParam {
            name: "Bare".to_string(),
            description: None,
            owner_id: user.id,
        })
        .await?;

    let stored = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description, None);

    Ok(())
}
