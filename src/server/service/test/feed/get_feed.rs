use super::*;

/// Tests walking the global feed with cursors.
///
/// Expected: two full pages then a short final page with no `next_cursor`
#[tokio::test]
async fn cursor_walks_every_post_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let soma = factory::create_soma(db).await?;
    let now = Utc::now();

    let mut expected = Vec::new();
    for i in 0..5 {
        let post = factory::post::PostFactory::new(db, author.id, soma.id)
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
        expected.push(post.id);
    }

    let feed = FeedService::new(db);
    let mut seen = Vec::new();
    let mut cursor = None;
    let mut pages = 0;
    loop {
        let page = feed
            .feed(FeedQuery {
                soma_id: None,
                limit: 2,
                cursor,
            })
            .await?;
        pages += 1;
        seen.extend(page.items.iter().map(|item| item.id));
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    assert_eq!(pages, 3);
    assert_eq!(seen, expected);

    Ok(())
}

/// Tests the per-item aggregates on a feed page.
///
/// Expected: signed vote sum, award count, media list, author and soma summaries
#[tokio::test]
async fn items_carry_aggregates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let fan = factory::create_user(db).await?;
    let critic = factory::create_user(db).await?;

    factory::create_vote(db, fan.id, TargetType::Post, post.id, 1).await?;
    factory::create_vote(db, critic.id, TargetType::Post, post.id, -1).await?;
    factory::create_vote(db, author.id, TargetType::Post, post.id, 1).await?;
    factory::create_award(db, fan.id, TargetType::Post, post.id).await?;

    let media = MediaRepository::new(db);
    let collection = media.get_or_create_collection(post.id).await?;
    media
        .add_items(
            collection.id,
            vec![NewMediaItem {
                media_type: MediaType::Audio,
                original_url: "https://cdn.example.com/clip.mp3".to_string(),
                metadata: None,
            }],
        )
        .await?;

    let page = FeedService::new(db)
        .feed(FeedQuery {
            soma_id: None,
            limit: 20,
            cursor: None,
        })
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next_cursor, None);

    let item = &page.items[0];
    assert_eq!(item.vote_count, 1);
    assert_eq!(item.award_count, 1);
    assert_eq!(item.author.id, author.id);
    assert_eq!(item.soma.slug, soma.slug);
    let media = item.media.as_ref().unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].media_type, "AUDIO");

    Ok(())
}

/// Tests a post without votes, awards or media.
///
/// Expected: zero counts and no media list
#[tokio::test]
async fn bare_post_has_zero_aggregates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_post_with_dependencies(db).await?;

    let page = FeedService::new(db)
        .feed(FeedQuery {
            soma_id: None,
            limit: 20,
            cursor: None,
        })
        .await?;

    let item = &page.items[0];
    assert_eq!(item.vote_count, 0);
    assert_eq!(item.award_count, 0);
    assert!(item.media.is_none());

    Ok(())
}

/// Tests the soma-scoped feed.
///
/// Expected: only the scoped soma's posts
#[tokio::test]
async fn scoped_feed_excludes_other_somas() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    factory::helpers::create_post_with_dependencies(db).await?;

    let page = FeedService::new(db)
        .feed(FeedQuery {
            soma_id: Some(soma.id),
            limit: 20,
            cursor: None,
        })
        .await?;

    assert_eq!(
        page.items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![post.id]
    );

    Ok(())
}

/// Tests a cursor naming no post, and limits outside the allowed range.
///
/// Expected: Err(AppError::BadRequest) for each
#[tokio::test]
async fn rejects_invalid_cursor_and_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = FeedService::new(db);

    for query in [
        FeedQuery {
            soma_id: None,
            limit: 20,
            cursor: Some(Uuid::new_v4()),
        },
        FeedQuery {
            soma_id: None,
            limit: 0,
            cursor: None,
        },
        FeedQuery {
            soma_id: None,
            limit: 101,
            cursor: None,
        },
    ] {
        assert!(matches!(
            feed.feed(query).await,
            Err(AppError::BadRequest(_))
        ));
    }

    Ok(())
}
