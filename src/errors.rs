use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required setting {0} is not set")]
    Missing(String),

    #[error("Required setting {key} is not a valid integer: {value:?}")]
    Invalid { key: String, value: String },
}

impl ConfigError {
    pub fn key(&self) -> &str {
        match self {
            Self::Missing(key) => key,
            Self::Invalid { key, .. } => key,
        }
    }
}

#[derive(Error, Debug)]
pub enum ScienceServerError {
    #[error("Service configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl ResponseError for ScienceServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let response_body = json!({
            "error": self.to_string()
        });

        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(response_body)
    }
}
