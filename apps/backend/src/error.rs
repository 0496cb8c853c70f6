use actix_web::http::StatusCode;
use thiserror::Error;

/// Application error taxonomy, resolved into a status code and a
/// `{"error": <message>}` JSON body at the top-level responder.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Unauthenticated: {detail}")]
    Unauthenticated { detail: String },
    #[error("Auth failed: {detail}")]
    AuthFailed { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// The HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            AppError::AuthFailed { .. } => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message placed in the error body
    pub fn detail(&self) -> &str {
        match self {
            AppError::NotFound { detail }
            | AppError::Unauthenticated { detail }
            | AppError::AuthFailed { detail }
            | AppError::BadRequest { detail }
            | AppError::Db { detail }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail,
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound { detail: detail.into() }
    }

    /// Missing or malformed bearer credential
    pub fn no_token() -> Self {
        Self::Unauthenticated { detail: "no token".to_string() }
    }

    /// Credential present but the codec rejected it
    pub fn invalid_token() -> Self {
        Self::Unauthenticated { detail: "invalid token".to_string() }
    }

    pub fn auth_failed(detail: impl Into<String>) -> Self {
        Self::AuthFailed { detail: detail.into() }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest { detail: detail.into() }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db { detail: detail.into() }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config { detail: detail.into() }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal { detail: detail.into() }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::internal(format!("serialization error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::not_found("Not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::no_token().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::invalid_token().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::auth_failed("bad password").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::bad_request("bad id").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::db("boom".to_string()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_token_error_details_match_wire_contract() {
        assert_eq!(AppError::no_token().detail(), "no token");
        assert_eq!(AppError::invalid_token().detail(), "invalid token");
    }
}
