use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::soma::SomaRepository,
    error::AppError,
    model::soma::{CreateSomaParam, Soma},
};

pub struct SomaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SomaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a soma with a unique lowercase slug.
    ///
    /// # Returns
    /// - `Ok(Soma)` - Created soma
    /// - `Err(AppError::BadRequest)` - Empty name or slug that is not URL-safe
    /// - `Err(AppError::Conflict)` - Slug already taken
    pub async fn create(&self, param: CreateSomaParam) -> Result<Soma, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Soma name must not be empty".to_string(),
            ));
        }
        if !is_url_safe_slug(&param.slug) {
            return Err(AppError::BadRequest(format!(
                "Slug '{}' may only contain lowercase letters, digits, '-' and '_'",
                param.slug
            )));
        }

        let repo = SomaRepository::new(self.db);

        if repo.slug_exists(&param.slug).await? {
            return Err(slug_conflict(&param.slug));
        }

        let slug = param.slug.clone();
        match repo.create(param).await {
            Ok(soma) => Ok(soma),
            // Lost a race with a concurrent create of the same slug.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(slug_conflict(&slug))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Gets every soma, newest first.
    pub async fn list(&self) -> Result<Vec<Soma>, AppError> {
        Ok(SomaRepository::new(self.db).get_all().await?)
    }

    /// Gets a soma by slug, case-insensitively.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Soma, AppError> {
        let slug = slug.trim().to_lowercase();

        SomaRepository::new(self.db)
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Soma with slug '{}' not found", slug)))
    }
}

fn slug_conflict(slug: &str) -> AppError {
    AppError::Conflict(format!("Soma with slug '{}' already exists", slug))
}

fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
