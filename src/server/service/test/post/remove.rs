use super::*;

/// Tests an admin deleting a post with comments, votes and awards.
///
/// Verifies engagement on the post and on its comments is purged with it, while
/// engagement on other posts survives.
///
/// Expected: Ok with only the unrelated post's vote remaining
#[tokio::test]
async fn admin_removes_post_and_engagement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post_author, commenter, post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let (_other_author, _other_soma, other_post) =
        factory::helpers::create_post_with_dependencies(db).await?;
    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;

    factory::create_vote(db, commenter.id, TargetType::Post, post.id, 1).await?;
    factory::create_vote(db, post_author.id, TargetType::Comment, comment.id, 1).await?;
    factory::create_award(db, commenter.id, TargetType::Post, post.id).await?;
    factory::create_award(db, post_author.id, TargetType::Comment, comment.id).await?;
    factory::create_vote(db, commenter.id, TargetType::Post, other_post.id, 1).await?;

    let actor = Actor {
        id: admin.id,
        role: UserRole::Admin,
    };
    PostService::new(db).remove(&actor, post.id).await?;

    let stored = entity::prelude::Post::find_by_id(post.id).one(db).await?;
    assert!(stored.is_none());
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Award::find().count(db).await?, 0);
    let votes = entity::prelude::Vote::find().all(db).await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].target_id, other_post.id);

    Ok(())
}

/// Tests a viewer deleting someone else's post.
///
/// Expected: Err(AppError::AuthErr(AccessDenied)) and the post kept
#[tokio::test]
async fn forbids_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let actor = Actor {
        id: stranger.id,
        role: UserRole::Viewer,
    };

    let result = PostService::new(db).remove(&actor, post.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(entity::prelude::Post::find().count(db).await?, 1);

    Ok(())
}
