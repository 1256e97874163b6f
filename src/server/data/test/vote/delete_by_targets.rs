use super::*;

/// Tests bulk deletion across a post and one of its comments.
///
/// Verifies that votes on the listed targets are removed while a vote on an
/// unrelated post survives.
///
/// Expected: Ok(3) with only the unrelated vote remaining
#[tokio::test]
async fn deletes_votes_on_listed_targets_only() -> Result<(), DbErr> {
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

    factory::create_vote(db, commenter.id, TargetType::Post, post.id, 1).await?;
    factory::create_vote(db, post_author.id, TargetType::Post, post.id, 1).await?;
    factory::create_vote(db, post_author.id, TargetType::Comment, comment.id, -1).await?;
    factory::create_vote(db, commenter.id, TargetType::Post, other_post.id, 1).await?;

    let removed = VoteRepository::new(db)
        .delete_by_targets(&[Target::Post(post.id), Target::Comment(comment.id)])
        .await?;

    assert_eq!(removed, 3);
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 1);

    Ok(())
}

/// Tests bulk deletion with no targets.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_target_list_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    factory::create_vote(db, author.id, TargetType::Post, post.id, 1).await?;

    let removed = VoteRepository::new(db).delete_by_targets(&[]).await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 1);

    Ok(())
}
