use super::*;

/// Tests editing another user's comment as a regular user.
///
/// Expected: Err(AppError::AuthErr(AccessDenied)) and the content unchanged
#[tokio::test]
async fn forbids_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (post_author, _commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let actor = Actor {
        id: post_author.id,
        role: UserRole::Viewer,
    };

    let result = CommentService::new(db)
        .update(&actor, comment.id, "Edited".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == post_author.id
    ));

    let stored = CommentRepository::new(db)
        .find_by_id(comment.id)
        .await?
        .unwrap();
    assert_eq!(stored.content, comment.content);

    Ok(())
}

/// Tests editing another user's comment as an admin.
///
/// Expected: Ok with the new content
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_post_author, _commenter, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    let actor = Actor {
        id: admin.id,
        role: UserRole::Admin,
    };

    let updated = CommentService::new(db)
        .update(&actor, comment.id, "Moderated".to_string())
        .await?;

    assert_eq!(updated.content, "Moderated");

    Ok(())
}

/// Tests editing a comment that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_comment_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let actor = Actor {
        id: user.id,
        role: UserRole::Viewer,
    };

    let result = CommentService::new(db)
        .update(&actor, Uuid::new_v4(), "Edited".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
