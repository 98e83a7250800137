use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Failures of store operations and the session gate
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("잘못된 사용자명 또는 비밀번호입니다.")]
    InvalidCredentials,

    #[error("Invalid or expired session")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidInput(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        StoreError::NotFound { entity, id }
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::InvalidCredentials | StoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            StoreError::Forbidden(_) => StatusCode::FORBIDDEN,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Conflict(_) => StatusCode::CONFLICT,
            StoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(StoreError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(StoreError::not_found("followup", 9).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(StoreError::Conflict("dup".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(StoreError::Forbidden("no".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(StoreError::InvalidInput("bad".into()).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_messages() {
        assert_eq!(StoreError::not_found("schedule", 4).to_string(), "schedule 4 not found");
        assert_eq!(
            StoreError::InvalidCredentials.to_string(),
            "잘못된 사용자명 또는 비밀번호입니다."
        );
    }
}
