use super::*;

/// Tests the first page of the global feed.
///
/// Verifies posts come back newest first and that `limit` caps the page.
///
/// Expected: Ok with the two newest posts in descending order
#[tokio::test]
async fn returns_newest_posts_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let soma = factory::create_soma(db).await?;
    let now = Utc::now();

    let oldest = factory::post::PostFactory::new(db, author.id, soma.id)
        .created_at(now - Duration::minutes(3))
        .build()
        .await?;
    let middle = factory::post::PostFactory::new(db, author.id, soma.id)
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    let newest = factory::post::PostFactory::new(db, author.id, soma.id)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;

    let page = FeedRepository::new(db).get_page(None, None, 2).await?;

    assert_eq!(
        page.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );
    assert!(!page.iter().any(|p| p.id == oldest.id));

    Ok(())
}

/// Tests continuing after a cursor post.
///
/// Verifies only posts strictly after the cursor in feed order are returned.
///
/// Expected: Ok with just the oldest post
#[tokio::test]
async fn continues_strictly_after_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let soma = factory::create_soma(db).await?;
    let now = Utc::now();

    let oldest = factory::post::PostFactory::new(db, author.id, soma.id)
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    let cursor = factory::post::PostFactory::new(db, author.id, soma.id)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;

    let cursor = PostRepository::new(db)
        .find_by_id(cursor.id)
        .await?
        .unwrap();
    let page = FeedRepository::new(db)
        .get_page(None, Some(&cursor), 10)
        .await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, oldest.id);

    Ok(())
}

/// Tests paging through posts that share a creation time.
///
/// Verifies the id tie-break keeps pages disjoint so nothing is skipped or repeated.
///
/// Expected: Ok with every post seen exactly once across pages of one
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let soma = factory::create_soma(db).await?;
    let created_at = Utc::now();

    let mut expected = Vec::new();
    for _ in 0..3 {
        let post = factory::post::PostFactory::new(db, author.id, soma.id)
            .created_at(created_at)
            .build()
            .await?;
        expected.push(post.id);
    }
    expected.sort();
    expected.reverse();

    let repo = FeedRepository::new(db);
    let mut seen = Vec::new();
    let mut cursor = None;
    loop {
        let page = repo.get_page(None, cursor.as_ref(), 1).await?;
        let Some(post) = page.into_iter().next() else {
            break;
        };
        seen.push(post.id);
        cursor = Some(post);
    }

    assert_eq!(seen, expected);

    Ok(())
}

/// Tests restricting the feed to one soma.
///
/// Expected: Ok with only the scoped soma's post
#[tokio::test]
async fn filters_by_soma() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, soma, post) = factory::helpers::create_post_with_dependencies(db).await?;
    factory::helpers::create_post_with_dependencies(db).await?;

    let page = FeedRepository::new(db)
        .get_page(Some(soma.id), None, 10)
        .await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, post.id);

    Ok(())
}
