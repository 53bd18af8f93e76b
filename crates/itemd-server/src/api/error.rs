//! HTTP mapping for `ItemdError` and framework rejections.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use itemd_core::error::{ClientCode, ItemdError};

#[derive(Debug)]
pub enum ApiError {
    Domain(ItemdError),
    /// Body could not be turned into the expected type; keeps axum's status.
    Rejected(JsonRejection),
    /// Nothing lives at this path: unknown route or an id that is not a number.
    NotFound(String),
}

impl From<ItemdError> for ApiError {
    fn from(e: ItemdError) -> Self {
        ApiError::Domain(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        ApiError::Rejected(r)
    }
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ClientCode::BadConfig | ClientCode::UnsupportedVersion | ClientCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(e) => status_for(e.client_code()),
            ApiError::Rejected(r) => r.status(),
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Domain(e) => e.client_code().as_str(),
            ApiError::Rejected(_) => ClientCode::Validation.as_str(),
            ApiError::NotFound(_) => ClientCode::NotFound.as_str(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Domain(e) => e.to_string(),
            ApiError::Rejected(r) => r.body_text(),
            ApiError::NotFound(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.code(),
            "message": self.message(),
        }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_statuses() {
        assert_eq!(ApiError::from(ItemdError::NotFound(1)).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(ItemdError::Internal("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }
}
