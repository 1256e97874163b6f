use super::*;

/// Tests the recipient marking a notification read, then marking it again.
///
/// Expected: Ok both times with `read_at` set and never moving backwards
#[tokio::test]
async fn recipient_marks_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let service = NotificationService::new(db);
    let param = CreateNotificationParam::comment_on_post(author.id, post.id, &post.title);
    let notification = NotificationRepository::new(db).create(param).await?;
    assert!(notification.read_at.is_none());

    let first = service.mark_read(author.id, notification.id).await?;
    let second = service.mark_read(author.id, notification.id).await?;

    let first_read = first.read_at.unwrap();
    let second_read = second.read_at.unwrap();
    assert!(second_read >= first_read);

    let listed = service.list_for_user(author.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].read_at, Some(second_read));

    Ok(())
}

/// Tests marking another user's notification read.
///
/// Expected: Err(AppError::AuthErr(AccessDenied)) and the notification still unread
#[tokio::test]
async fn forbids_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let snoop = factory::create_user(db).await?;

    let service = NotificationService::new(db);
    let param = CreateNotificationParam::comment_on_post(author.id, post.id, &post.title);
    let notification = NotificationRepository::new(db).create(param).await?;

    let result = service.mark_read(snoop.id, notification.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == snoop.id
    ));
    let listed = service.list_for_user(author.id).await?;
    assert!(listed[0].read_at.is_none());

    Ok(())
}

/// Tests marking a notification that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_notification_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = NotificationService::new(db)
        .mark_read(user.id, Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
