use super::*;

/// Tests deleting a user's existing vote.
///
/// Expected: Ok(1) and no vote left on the target
#[tokio::test]
async fn deletes_existing_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let voter = factory::create_user(db).await?;
    factory::create_vote(db, voter.id, TargetType::Post, post.id, 1).await?;

    let repo = VoteRepository::new(db);
    let removed = repo.delete(voter.id, Target::Post(post.id)).await?;

    assert_eq!(removed, 1);
    let remaining = find_vote(db, voter.id, Target::Post(post.id)).await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting a vote that was never cast.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_no_vote_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let voter = factory::create_user(db).await?;

    let removed = VoteRepository::new(db)
        .delete(voter.id, Target::Post(post.id))
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests that deleting one user's vote leaves other users' votes alone.
///
/// Expected: Ok with the other vote still present
#[tokio::test]
async fn only_deletes_own_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let voter = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_vote(db, voter.id, TargetType::Post, post.id, 1).await?;
    factory::create_vote(db, other.id, TargetType::Post, post.id, -1).await?;

    let repo = VoteRepository::new(db);
    repo.delete(voter.id, Target::Post(post.id)).await?;

    assert_eq!(count_votes(db, Target::Post(post.id)).await?, 1);

    let kept = find_vote(db, other.id, Target::Post(post.id)).await?;
    assert!(kept.is_some());

    Ok(())
}
