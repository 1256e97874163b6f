use super::*;

/// Tests that an author can delete their comment even when it has replies.
///
/// Verifies the replies go with it and that votes and awards on the whole subtree
/// are purged, while engagement on the post itself stays.
///
/// Expected: Ok with no comments, no comment votes or awards, and the post vote kept
#[tokio::test]
async fn author_deletes_comment_with_replies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post_author, commenter, post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let reply = factory::comment::CommentFactory::new(db, post.id, post_author.id)
        .parent(comment.id)
        .build()
        .await?;

    factory::create_vote(db, post_author.id, TargetType::Comment, comment.id, 1).await?;
    factory::create_vote(db, commenter.id, TargetType::Comment, reply.id, -1).await?;
    factory::create_vote(db, commenter.id, TargetType::Post, post.id, 1).await?;
    factory::create_award(db, commenter.id, TargetType::Comment, reply.id).await?;

    let actor = Actor {
        id: commenter.id,
        role: UserRole::Viewer,
    };
    CommentService::new(db).remove(&actor, comment.id).await?;

    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Award::find().count(db).await?, 0);
    let votes = entity::prelude::Vote::find().all(db).await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].target_id, post.id);

    Ok(())
}

/// Tests deleting someone else's comment as a regular user.
///
/// Expected: Err(AppError::AuthErr(AccessDenied)) and the comment kept
#[tokio::test]
async fn forbids_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post_author, _commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let actor = Actor {
        id: stranger.id,
        role: UserRole::Creator,
    };

    let result = CommentService::new(db).remove(&actor, comment.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 1);

    Ok(())
}

/// Tests an admin deleting another user's comment.
///
/// Verifies moderation removes the comment along with the votes on it.
///
/// Expected: Ok with no comments or comment votes left
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post_author, _commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    factory::create_vote(db, post_author.id, TargetType::Comment, comment.id, 1).await?;
    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let actor = Actor {
        id: admin.id,
        role: UserRole::Admin,
    };

    CommentService::new(db).remove(&actor, comment.id).await?;

    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 0);

    Ok(())
}
