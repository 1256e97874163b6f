//! Soma (community) domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::soma::{CreateSomaDto, SomaDto, SomaSummaryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Soma {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Soma {
    pub fn from_entity(entity: entity::soma::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SomaDto {
        SomaDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SomaSummary {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

impl SomaSummary {
    pub fn from_entity(entity: entity::soma::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SomaSummaryDto {
        SomaSummaryDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
        }
    }
}

/// Parameters for creating a soma.
///
/// The slug is normalized to lowercase on construction.
#[derive(Debug, Clone)]
pub struct CreateSomaParam {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl CreateSomaParam {
    pub fn new(name: String, slug: &str, description: Option<String>) -> Self {
        Self {
            name,
            slug: slug.trim().to_lowercase(),
            description,
        }
    }

    pub fn from_dto(dto: CreateSomaDto) -> Self {
        Self::new(dto.name, &dto.slug, dto.description)
    }
}
