use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned for every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
