use super::*;

/// Tests commenting on someone else's post.
///
/// Expected: Ok with a COMMENT notification for the post author
#[tokio::test]
async fn notifies_post_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let commenter = factory::create_user(db).await?;

    let comment = CommentService::new(db)
        .create(commenter.id, post.id, "Nice post".to_string())
        .await?;

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.parent_comment_id, None);

    let notifications = NotificationRepository::new(db)
        .get_by_user(author.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, KIND_COMMENT);
    assert_eq!(notifications[0].target, Some(Target::Post(post.id)));

    Ok(())
}

/// Tests commenting on one's own post.
///
/// Expected: Ok with no notification
#[tokio::test]
async fn does_not_notify_self_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;

    CommentService::new(db)
        .create(author.id, post.id, "Adding context".to_string())
        .await?;

    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failing notification sink does not fail the comment.
///
/// Expected: Ok with the comment stored and the sink's partial write rolled back
#[tokio::test]
async fn comment_survives_failing_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let commenter = factory::create_user(db).await?;

    let result = CommentService::with_sink(db, FailingSink)
        .create(commenter.id, post.id, "Nice post".to_string())
        .await;

    assert!(result.is_ok());
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);

    Ok(())
}

/// Tests commenting on a post that does not exist.
///
/// Expected: Err(AppError::BadRequest) and no comment stored
#[tokio::test]
async fn rejects_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let commenter = factory::create_user(db).await?;

    let result = CommentService::new(db)
        .create(commenter.id, Uuid::new_v4(), "Hello".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests commenting with only whitespace.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let result = CommentService::new(db)
        .create(author.id, post.id, " \n".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
