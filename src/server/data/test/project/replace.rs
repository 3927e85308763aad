use super::*;

/// Tests replacing every field of a project.
///
/// Expected: Ok with name and description overwritten
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, project) = factory::helpers::create_project_with_owner(db).await?;

    let repo = ProjectRepository::new(db);
    let replaced = repo
        .replace(
            project.id,
            UpdateProjectParam {
                name: "Proj2".to_string(),
                description: Some("Updated".to_string()),
                owner_id: user.id,
            },
        )
        .await?;

    assert_eq!(replaced.id, project.id);
    assert_eq!(replaced.name, "Proj2");
    assert_eq!(replaced.description, Some("Updated".to_string()));
    assert_eq!(replaced.owner_id, user.id);

    Ok(())
}

/// Tests that a replacement without description clears it.
///
/// Expected: Ok with description set to None
#[tokio::test]
async fn clears_omitted_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, project) = factory::helpers::create_project_with_owner(db).await?;
    assert!(project.description.is_some());

    let repo = ProjectRepository::new(db);
    let replaced = repo
        .replace(
            project.id,
            UpdateProjectParam {
                name: project.name.clone(),
                description: None,
                owner_id: user.id,
            },
        )
        .await?;

    assert_eq!(replaced.description, None);

    Ok(())
}

/// Tests moving a project to another owner.
///
/// Expected: Ok with owner_id updated
#[tokio::test]
async fn transfers_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_owner(db).await?;
    let new_owner = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let replaced = repo
        .replace(
            project.id,
            UpdateProjectParam {
                name: project.name.clone(),
                description: project.description.clone(),
                owner_id: new_owner.id,
            },
        )
        .await?;

    assert_eq!(replaced.owner_id, new_owner.id);

    Ok(())
}

/// Tests replacing a project that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated) and no row inserted
#[tokio::test]
async fn fails_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ProjectRepository::new(db)
        .replace(
            77,
            UpdateProjectParam {
                name: "Ghost".to_string(),
                description: None,
                owner_id: user.id,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_))
    ));
    assert!(entity::prelude::Project::find_by_id(77).one(db).await?.is_none());

    Ok(())
}
