use super::*;

/// Tests casting a first vote on a post.
///
/// Expected: Ok with one row holding the cast value
#[tokio::test]
async fn inserts_new_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let voter = factory::create_user(db).await?;

    let repo = VoteRepository::new(db);
    let vote = repo
        .upsert(UpsertVoteParam {
            user_id: voter.id,
            target: Target::Post(post.id),
            value: VoteValue::Up,
        })
        .await?;

    assert_eq!(vote.user_id, voter.id);
    assert_eq!(vote.target, Target::Post(post.id));
    assert_eq!(vote.value, 1);
    assert_eq!(vote.created_at, vote.updated_at);
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 1);

    Ok(())
}

/// Tests voting again on the same target with the opposite value.
///
/// Verifies the second write replaces the value in place instead of inserting a
/// second row, and that the original creation time survives.
///
/// Expected: Ok with a single row holding -1
#[tokio::test]
async fn replaces_existing_vote_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let voter = factory::create_user(db).await?;
    let target = Target::Post(post.id);

    let repo = VoteRepository::new(db);
    let first = repo
        .upsert(UpsertVoteParam {
            user_id: voter.id,
            target,
            value: VoteValue::Up,
        })
        .await?;
    let second = repo
        .upsert(UpsertVoteParam {
            user_id: voter.id,
            target,
            value: VoteValue::Down,
        })
        .await?;

    assert_eq!(second.value, -1);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
    assert_eq!(count_votes(db, target).await?, 1);

    let stored = find_vote(db, voter.id, target).await?.unwrap();
    assert_eq!(stored.value, -1);

    Ok(())
}

/// Tests that votes on a post and a comment sharing nothing but the voter stay apart.
///
/// Expected: Ok with one row per target
#[tokio::test]
async fn keeps_votes_on_different_targets_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post_author, commenter, post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = VoteRepository::new(db);
    repo.upsert(UpsertVoteParam {
        user_id: commenter.id,
        target: Target::Post(post.id),
        value: VoteValue::Up,
    })
    .await?;
    repo.upsert(UpsertVoteParam {
        user_id: commenter.id,
        target: Target::Comment(comment.id),
        value: VoteValue::Down,
    })
    .await?;

    assert_eq!(count_votes(db, Target::Post(post.id)).await?, 1);
    assert_eq!(count_votes(db, Target::Comment(comment.id)).await?, 1);

    let stored = find_vote(db, commenter.id, Target::Comment(comment.id)).await?;
    assert_eq!(stored.unwrap().value, -1);

    Ok(())
}
