use super::*;

/// Tests creating a post in an existing soma.
///
/// Expected: Ok with zero impressions
#[tokio::test]
async fn creates_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, UserRole::Creator).await?;
    let soma = factory::create_soma(db).await?;

    let post = PostService::new(db)
        .create(CreatePostParam {
            author_id: author.id,
            soma_id: soma.id,
            title: "First light".to_string(),
            body: Some("Hello".to_string()),
        })
        .await?;

    assert_eq!(post.title, "First light");
    assert_eq!(post.soma_id, soma.id);
    assert_eq!(post.impressions, 0);

    Ok(())
}

/// Tests creating a post in a soma that does not exist, or with a blank title.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn rejects_unknown_soma_and_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_role(db, UserRole::Creator).await?;
    let soma = factory::create_soma(db).await?;
    let service = PostService::new(db);

    let unknown_soma = service
        .create(CreatePostParam {
            author_id: author.id,
            soma_id: Uuid::new_v4(),
            title: "Lost".to_string(),
            body: None,
        })
        .await;
    let blank_title = service
        .create(CreatePostParam {
            author_id: author.id,
            soma_id: soma.id,
            title: "  ".to_string(),
            body: None,
        })
        .await;

    assert!(matches!(unknown_soma, Err(AppError::BadRequest(_))));
    assert!(matches!(blank_title, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::Post::find().count(db).await?, 0);

    Ok(())
}
