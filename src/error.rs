use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    gateway::GatewayError,
    response::{ErrorResponse, MessageResponse},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Payment(#[from] GatewayError),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn item_not_found() -> Self {
        AppError::NotFound("Item not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Payment(_) => StatusCode::FORBIDDEN,
            AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Payment(err) => {
                tracing::warn!(error = %err, "payment gateway refused checkout");
                let body = ErrorResponse {
                    error: err.to_string(),
                };
                (status, Json(body)).into_response()
            }
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "database failure");
                (status, Json(MessageResponse::new("Internal Server Error"))).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "unhandled failure");
                (status, Json(MessageResponse::new(self.to_string()))).into_response()
            }
            _ => (status, Json(MessageResponse::new(self.to_string()))).into_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
