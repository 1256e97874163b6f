use super::*;

/// Tests incrementing the impressions counter twice.
///
/// Expected: Ok(true) each time and a counter of 2
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = PostRepository::new(db);
    assert!(repo.increment_impressions(post.id).await?);
    assert!(repo.increment_impressions(post.id).await?);

    let stored = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(stored.impressions, 2);

    Ok(())
}

/// Tests incrementing impressions of a post that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PostRepository::new(db)
        .increment_impressions(Uuid::new_v4())
        .await?;

    assert!(!found);

    Ok(())
}
