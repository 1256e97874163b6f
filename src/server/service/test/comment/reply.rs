use super::*;

/// Tests replying to a comment.
///
/// Verifies the reply inherits the parent's post and that replies do not notify
/// the post author.
///
/// Expected: Ok with the parent's post id and no notification
#[tokio::test]
async fn reply_inherits_post_from_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post_author, _commenter, post, parent) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let replier = factory::create_user(db).await?;

    let reply = CommentService::new(db)
        .reply(replier.id, parent.id, "Agreed".to_string())
        .await?;

    assert_eq!(reply.post_id, post.id);
    assert_eq!(reply.parent_comment_id, Some(parent.id));
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);

    let thread = CommentService::new(db).list_by_post(post.id).await?;
    assert_eq!(
        thread.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![parent.id, reply.id]
    );

    Ok(())
}

/// Tests replying to a comment that does not exist.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_missing_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let replier = factory::create_user(db).await?;

    let result = CommentService::new(db)
        .reply(replier.id, Uuid::new_v4(), "Hello?".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
