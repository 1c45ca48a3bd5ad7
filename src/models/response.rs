// src/models/response.rs

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement returned by create/update/delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 12)]
    pub id: Option<i64>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true, id: None }
    }

    pub fn created(id: i64) -> Self {
        Self { success: true, id: Some(id) }
    }
}
