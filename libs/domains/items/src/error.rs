use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::ItemId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Invalid item ID: '{0}'")]
    InvalidId(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for the shared plain-text error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => {
                tracing::debug!(item_id = id, "Item lookup missed");
                AppError::NotFound("Item not found".to_string())
            }
            ItemError::InvalidId(raw) => {
                tracing::debug!(raw_id = %raw, "Rejected item id");
                AppError::InvalidId("Invalid item ID".to_string())
            }
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
