use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid params - {0}")]
    InvalidParams(String),

    #[error("Validation failed - {message}")]
    Validation { message: String, errors: Value },

    #[error("Internal server error - {0}")]
    InternalServerError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("IP asset not found")]
    IpAssetNotFound,

    #[error("Royalty payment not found")]
    RoyaltyPaymentNotFound,

    #[error("File exceeds {max_bytes} bytes")]
    FileTooLarge { max_bytes: usize },

    #[error("Unsupported file type - {0}")]
    UnsupportedFileType(String),

    #[error("Multipart error - {0}")]
    MultipartError(#[from] MultipartError),

    #[error("Serialization error - {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error - {0}")]
    IoError(#[from] std::io::Error),

    #[error("TryInitError - {0}")]
    TryInitError(#[from] tracing_subscriber::util::TryInitError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParams(_) | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::IpAssetNotFound | Self::RoyaltyPaymentNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MultipartError(error) => error.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_safe_format(&self) -> ErrorResponse {
        match self {
            Self::InvalidParams(msg) => ErrorResponse {
                message: msg.clone(),
                errors: None,
            },
            Self::Validation { message, errors } => ErrorResponse {
                message: message.clone(),
                errors: Some(errors.clone()),
            },
            Self::InternalServerError(error) => {
                tracing::error!(error = %error, "Internal server error");

                ErrorResponse {
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            Self::MultipartError(error) => {
                tracing::warn!(error = %error, "Multipart error");

                ErrorResponse {
                    message: "Invalid upload. Please check the file and try again.".to_string(),
                    errors: None,
                }
            }
            Self::SerializationError(error) => {
                tracing::error!(error = %error, "Serialization error");

                ErrorResponse {
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            Self::IoError(error) => {
                tracing::error!(error = %error, "IO error");

                ErrorResponse {
                    message: "Service temporarily unavailable. Please try again later.".to_string(),
                    errors: None,
                }
            }
            Self::TryInitError(error) => {
                tracing::error!(error = %error, "TryInitError");

                ErrorResponse {
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            Self::FileTooLarge { max_bytes } => ErrorResponse {
                message: format!(
                    "File is too large. Maximum size is {} MB.",
                    max_bytes / (1024 * 1024)
                ),
                errors: None,
            },
            Self::UnsupportedFileType(mime) => ErrorResponse {
                message: format!("Invalid file type '{mime}'"),
                errors: None,
            },
            _ => ErrorResponse {
                message: self.to_string(),
                errors: None,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = serde_json::to_string(&self.user_safe_format())
            .unwrap_or_else(|_| r#"{"message":"Internal server error"}"#.to_string());

        (status, [("content-type", "application/json")], body).into_response()
    }
}
