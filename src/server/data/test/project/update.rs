use super::*;

/// Tests partially updating a project's description.
///
/// Expected: Ok with description changed and name untouched
#[tokio::test]
async fn updates_only_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let project = factory::project::ProjectFactory::new(db, user.id)
        .name("ProjA")
        .description(Some("Initial".to_string()))
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.id,
            PatchProjectParam {
                description: Some(Some("Changed".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.description, Some("Changed".to_string()));
    assert_eq!(updated.name, "ProjA");
    assert_eq!(updated.owner_id, user.id);

    Ok(())
}

/// Tests clearing a description through an explicit null.
///
/// Expected: Ok with description set to None
#[tokio::test]
async fn clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_owner(db).await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.id,
            PatchProjectParam {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.description, None);
    assert_eq!(updated.name, project.name);

    Ok(())
}

/// Tests updating a project that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(
            404,
            PatchProjectParam {
                name: Some("Nope".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
