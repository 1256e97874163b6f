//! Ranking and feed engine.
//!
//! `top_posts` ranks the whole post set by raw vote sum before slicing a page, because a
//! post's rank depends on scores outside any single page. Offset pages over a moving
//! ranking can repeat or skip a post between requests; callers accept that.
//!
//! `feed` pages by cursor in `(created_at DESC, id DESC)` order and enriches each item
//! with batched aggregates.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::server::{
    data::{feed::FeedRepository, post::PostRepository},
    error::AppError,
    model::{
        feed::{FeedItem, FeedPage, FeedQuery, MAX_FEED_LIMIT},
        post::ScoredPost,
    },
};

pub struct FeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of posts ranked by score.
    ///
    /// Order is score descending, then creation time descending, then id descending.
    ///
    /// # Arguments
    /// - `page` - 1-based page number
    /// - `page_size` - Posts per page
    ///
    /// # Returns
    /// - `Ok(Vec<ScoredPost>)` - Posts on the page, possibly empty past the end
    /// - `Err(AppError::BadRequest)` - `page` or `page_size` is zero
    pub async fn top_posts(&self, page: u64, page_size: u64) -> Result<Vec<ScoredPost>, AppError> {
        if page == 0 || page_size == 0 {
            return Err(AppError::BadRequest(
                "page and limit must both be at least 1".to_string(),
            ));
        }

        let repo = FeedRepository::new(self.db);

        let scores = repo.post_scores().await?;
        let timestamps = repo.post_timestamps().await?;

        let ranked = rank(timestamps, &scores);

        let offset = (page - 1).saturating_mul(page_size);
        let page_ids: Vec<(Uuid, i64)> = ranked
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .collect();

        let mut posts: HashMap<Uuid, _> = PostRepository::new(self.db)
            .find_by_ids(page_ids.iter().map(|(id, _)| *id).collect())
            .await?
            .into_iter()
            .map(|post| (post.id, post))
            .collect();

        // A post deleted between the ranking and the fetch is dropped from the page.
        Ok(page_ids
            .into_iter()
            .filter_map(|(id, score)| posts.remove(&id).map(|post| ScoredPost { post, score }))
            .collect())
    }

    /// Gets a page of the newest posts, globally or within one soma.
    ///
    /// # Returns
    /// - `Ok(FeedPage)` - Items strictly after the cursor with vote and award aggregates
    /// - `Err(AppError::BadRequest)` - Limit outside `1..=100` or cursor names no post
    pub async fn feed(&self, query: FeedQuery) -> Result<FeedPage, AppError> {
        if query.limit == 0 || query.limit > MAX_FEED_LIMIT {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_FEED_LIMIT
            )));
        }

        let cursor = match query.cursor {
            Some(cursor_id) => Some(
                PostRepository::new(self.db)
                    .find_by_id(cursor_id)
                    .await?
                    .ok_or_else(|| AppError::BadRequest("Invalid cursor".to_string()))?,
            ),
            None => None,
        };

        let repo = FeedRepository::new(self.db);

        let posts = repo
            .get_page(query.soma_id, cursor.as_ref(), query.limit)
            .await?;

        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let author_ids: HashSet<Uuid> = posts.iter().map(|p| p.author_id).collect();
        let soma_ids: HashSet<Uuid> = posts.iter().map(|p| p.soma_id).collect();

        let authors = repo.authors(author_ids.into_iter().collect()).await?;
        let somas = repo.somas(soma_ids.into_iter().collect()).await?;
        let mut media = repo.media(&post_ids).await?;
        let vote_sums = repo.vote_sums(&post_ids).await?;
        let award_counts = repo.award_counts(&post_ids).await?;

        let mut items = Vec::with_capacity(posts.len());
        for post in posts {
            let author = authors.get(&post.author_id).cloned();
            let author = author.ok_or_else(|| {
                AppError::InternalError(format!(
                    "Author {} of post {} not found",
                    post.author_id, post.id
                ))
            })?;
            let soma = somas.get(&post.soma_id).cloned();
            let soma = soma.ok_or_else(|| {
                AppError::InternalError(format!(
                    "Soma {} of post {} not found",
                    post.soma_id, post.id
                ))
            })?;

            items.push(FeedItem {
                id: post.id,
                title: post.title,
                body: post.body,
                impressions: post.impressions,
                created_at: post.created_at,
                author,
                soma,
                media: media.remove(&post.id),
                vote_count: vote_sums.get(&post.id).copied().unwrap_or(0),
                award_count: award_counts.get(&post.id).copied().unwrap_or(0),
            });
        }

        Ok(FeedPage::new(items, query.limit))
    }
}

/// Orders posts by `(score DESC, created_at DESC, id DESC)`; unvoted posts score zero.
fn rank(timestamps: Vec<(Uuid, DateTime<Utc>)>, scores: &HashMap<Uuid, i64>) -> Vec<(Uuid, i64)> {
    let mut ranked: Vec<(Uuid, DateTime<Utc>, i64)> = timestamps
        .into_iter()
        .map(|(id, created_at)| (id, created_at, scores.get(&id).copied().unwrap_or(0)))
        .collect();

    ranked.sort_by(|a, b| {
        b.2.cmp(&a.2)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| b.0.cmp(&a.0))
    });

    ranked
        .into_iter()
        .map(|(id, _, score)| (id, score))
        .collect()
}
