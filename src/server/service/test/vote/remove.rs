use super::*;

/// Tests that removing a vote twice succeeds both times.
///
/// Expected: Ok for both calls and no vote left
#[tokio::test]
async fn remove_is_idempotent() -> Result<(), AppError> {
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

    service.remove(voter.id, target).await?;
    service.remove(voter.id, target).await?;

    assert_eq!(entity::prelude::Vote::find().count(db).await?, 0);

    Ok(())
}

/// Tests removing a vote on a target that never existed.
///
/// Expected: Ok
#[tokio::test]
async fn remove_on_unknown_target_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;

    let result = VoteService::new(db)
        .remove(voter.id, Target::Comment(Uuid::new_v4()))
        .await;

    assert!(result.is_ok());

    Ok(())
}
