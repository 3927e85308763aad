use super::*;

/// Tests paginating users.
///
/// Verifies that pages are ordered by ID and that the total reflects the number of
/// users rather than the number of pages.
///
/// Expected: Ok with 2 users on the first page, 1 on the second, total of 3
#[tokio::test]
async fn paginates_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let (page_0, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        page_0.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let (page_1, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(page_1.len(), 1);
    assert_eq!(page_1[0].id, third.id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with empty page and unchanged total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(5, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
