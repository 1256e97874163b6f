use super::*;

/// Tests stamping a notification read twice.
///
/// Verifies the second call overwrites the first timestamp.
///
/// Expected: Ok with `read_at` equal to the latest stamp
#[tokio::test]
async fn overwrites_previous_read_stamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = NotificationRepository::new(db);
    let param = CreateNotificationParam::comment_on_post(author.id, post.id, &post.title);
    let notification = repo.create(param).await?;

    let later = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let earlier = later - Duration::hours(1);

    let first = repo.mark_read(notification.id, earlier).await?;
    let second = repo.mark_read(notification.id, later).await?;

    assert_eq!(first.read_at, Some(earlier));
    assert_eq!(second.read_at, Some(later));

    Ok(())
}

/// Tests stamping a notification that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NotificationRepository::new(db)
        .mark_read(Uuid::new_v4(), Utc::now())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
