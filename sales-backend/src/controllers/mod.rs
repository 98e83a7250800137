pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod followups;
pub mod health;
pub mod schedules;

use actix_web::{web, HttpRequest};

use crate::error::{StoreError, StoreResult};
use crate::models::User;
use crate::AppState;

/// Body, query and path parse failures answer 400 with the usual `{"error"}` body.
pub fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| StoreError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| StoreError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| StoreError::InvalidInput(err.to_string()).into()),
    );
}

/// Bearer token from the Authorization header, if any
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the logged-in user for a request, refreshing the session.
pub(crate) fn current_user(state: &AppState, req: &HttpRequest) -> StoreResult<User> {
    let token = bearer_token(req).ok_or(StoreError::Unauthorized)?;
    let session = state.sessions.validate(token).ok_or_else(|| {
        log::warn!("[AUTH] Rejected request to {} with unknown or expired token", req.path());
        StoreError::Unauthorized
    })?;

    // The user can vanish if the store was reset under a live session
    state
        .store
        .read(|data| data.user(session.user_id).cloned())
        .ok_or(StoreError::Unauthorized)
}


#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_parsing() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc-123"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc-123"));

        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic abc"))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_current_user_requires_live_session() {
        let state = test_support::seeded_state();
        let req = TestRequest::default().to_http_request();
        assert!(matches!(current_user(&state, &req), Err(StoreError::Unauthorized)));

        let header = test_support::bearer_for(&state, 2);
        let req = TestRequest::default().insert_header(header).to_http_request();
        assert_eq!(current_user(&state, &req).unwrap().username, "sales2");

        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer stale"))
            .to_http_request();
        assert!(matches!(current_user(&state, &req), Err(StoreError::Unauthorized)));
    }
}
