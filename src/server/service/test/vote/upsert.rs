use super::*;

/// Tests that a user's last vote wins.
///
/// Casts +1 and then -1 on the same post through the service.
///
/// Expected: Ok with exactly one row whose value is -1
#[tokio::test]
async fn last_vote_wins_with_single_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let voter = factory::create_user(db).await?;
    let target = Target::Post(post.id);

    let service = VoteService::new(db);
    service
        .upsert(UpsertVoteParam {
            user_id: voter.id,
            target,
            value: VoteValue::Up,
        })
        .await?;
    let vote = service
        .upsert(UpsertVoteParam {
            user_id: voter.id,
            target,
            value: VoteValue::Down,
        })
        .await?;

    assert_eq!(vote.value, -1);

    let stored = entity::prelude::Vote::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].value, -1);

    Ok(())
}

/// Tests voting on a comment.
///
/// Expected: Ok with the vote stored against the comment
#[tokio::test]
async fn votes_on_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post_author, _commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let vote = VoteService::new(db)
        .upsert(UpsertVoteParam {
            user_id: post_author.id,
            target: Target::Comment(comment.id),
            value: VoteValue::Up,
        })
        .await?;

    assert_eq!(vote.target, Target::Comment(comment.id));
    assert_eq!(vote.value, 1);

    Ok(())
}

/// Tests voting on a post that does not exist.
///
/// Expected: Err(AppError::TargetErr(PostNotFound)) and no vote written
#[tokio::test]
async fn rejects_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;
    let missing = Uuid::new_v4();

    let result = VoteService::new(db)
        .upsert(UpsertVoteParam {
            user_id: voter.id,
            target: Target::Post(missing),
            value: VoteValue::Up,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::TargetErr(TargetError::PostNotFound(id))) if id == missing
    ));
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 0);

    Ok(())
}
