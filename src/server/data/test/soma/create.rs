use super::*;

/// Tests creating a soma.
///
/// Expected: Ok with the stored slug reported by `slug_exists`
#[tokio::test]
async fn creates_soma() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SomaRepository::new(db);
    let soma = repo
        .create(CreateSomaParam::new(
            "Rust".to_string(),
            "rust",
            Some("Systems programming".to_string()),
        ))
        .await?;

    assert_eq!(soma.slug, "rust");
    assert_eq!(soma.name, "Rust");
    assert!(repo.slug_exists("rust").await?);
    assert!(!repo.slug_exists("go").await?);

    Ok(())
}

/// Tests inserting a second soma with a slug that is already taken.
///
/// Expected: Err from the unique index on slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::soma::SomaFactory::new(db)
        .slug("rust")
        .build()
        .await?;

    let result = SomaRepository::new(db)
        .create(CreateSomaParam::new("Rust again".to_string(), "rust", None))
        .await;

    assert!(result.is_err());

    Ok(())
}
