use super::*;

/// Tests the author renaming their post.
///
/// Expected: Ok with the new title
#[tokio::test]
async fn author_updates_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let actor = Actor {
        id: author.id,
        role: UserRole::Creator,
    };

    let updated = PostService::new(db)
        .update(
            &actor,
            post.id,
            UpdatePostParam {
                title: Some("Renamed".to_string()),
                body: None,
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");

    Ok(())
}

/// Tests a non-author editing a post.
///
/// Expected: Err(AppError::AuthErr(AccessDenied))
#[tokio::test]
async fn forbids_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let stranger = factory::user::create_user_with_role(db, UserRole::Creator).await?;
    let actor = Actor {
        id: stranger.id,
        role: UserRole::Creator,
    };

    let result = PostService::new(db)
        .update(
            &actor,
            post.id,
            UpdatePostParam {
                title: Some("Hijacked".to_string()),
                body: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
