use super::*;

/// Tests resolving a post target.
///
/// Expected: Ok(Some) with the post's author
#[tokio::test]
async fn resolves_post_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let resolved = TargetRepository::new(db)
        .find_author(Target::Post(post.id))
        .await?
        .unwrap();

    assert_eq!(resolved.author_id, author.id);
    assert_eq!(resolved.target, Target::Post(post.id));

    Ok(())
}

/// Tests resolving a comment target.
///
/// Verifies the comment's author is returned rather than the post's.
///
/// Expected: Ok(Some) with the commenter
#[tokio::test]
async fn resolves_comment_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post_author, commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let resolved = TargetRepository::new(db)
        .find_author(Target::Comment(comment.id))
        .await?
        .unwrap();

    assert_eq!(resolved.author_id, commenter.id);

    Ok(())
}

/// Tests resolving ids that do not exist under the given type.
///
/// A comment id tagged as a post must not resolve.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn returns_none_for_missing_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post_author, _commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = TargetRepository::new(db);

    let missing = repo.find_author(Target::Post(Uuid::new_v4())).await?;
    assert!(missing.is_none());
    assert!(repo.find_author(Target::Post(comment.id)).await?.is_none());

    Ok(())
}
