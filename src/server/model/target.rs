//! Polymorphic vote and award targets.

use entity::sea_orm_active_enums::TargetType;
use sea_orm::ActiveEnum;
use uuid::Uuid;

use crate::server::error::target::TargetError;

/// A reference to either a post or a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Post(Uuid),
    Comment(Uuid),
}

impl Target {
    pub fn new(target_type: TargetType, id: Uuid) -> Self {
        match target_type {
            TargetType::Post => Self::Post(id),
            TargetType::Comment => Self::Comment(id),
        }
    }

    /// Parses the wire form `("POST" | "COMMENT", id)`.
    ///
    /// # Returns
    /// - `Ok(Target)` - Known target type
    /// - `Err(TargetError::InvalidType)` - Any other type string
    pub fn parse(target_type: &str, id: Uuid) -> Result<Self, TargetError> {
        let target_type = TargetType::try_from_value(&target_type.to_string())
            .map_err(|_| TargetError::InvalidType(target_type.to_string()))?;

        Ok(Self::new(target_type, id))
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Post(_) => TargetType::Post,
            Self::Comment(_) => TargetType::Comment,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Post(id) | Self::Comment(id) => *id,
        }
    }

    /// Error reported when this target does not resolve.
    pub fn not_found(&self) -> TargetError {
        match self {
            Self::Post(id) => TargetError::PostNotFound(*id),
            Self::Comment(id) => TargetError::CommentNotFound(*id),
        }
    }

    /// Lowercase noun used in notification messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Post(_) => "post",
            Self::Comment(_) => "comment",
        }
    }

    /// Wire form of the target type.
    pub fn type_str(&self) -> String {
        self.target_type().to_value()
    }
}

/// A target that exists, together with its current author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub target: Target,
    pub author_id: Uuid,
}
