use super::*;

/// Tests listing a user's notifications.
///
/// Verifies newest first ordering and that other users' notifications are excluded.
///
/// Expected: Ok with the recipient's two notifications, newest first
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let bystander = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let comment = CreateNotificationParam::comment_on_post(author.id, post.id, &post.title);
    let first = repo.create(comment).await?;
    let award = CreateNotificationParam::award(author.id, Target::Post(post.id), "Gold");
    let second = repo.create(award).await?;
    let unrelated = CreateNotificationParam::comment_on_post(bystander.id, post.id, &post.title);
    repo.create(unrelated).await?;

    let listed = repo.get_by_user(author.id).await?;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert!(listed.iter().all(|n| n.read_at.is_none()));

    Ok(())
}
