//! Login, logout and the current-user endpoint.

use actix_web::{web, HttpRequest, HttpResponse};

use super::{bearer_token, current_user};
use crate::error::StoreError;
use crate::models::{LoginRequest, SessionResponse};
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/me", web::get().to(me)),
    );
}

async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, StoreError> {
    let username = body.username.as_str();
    let user = state
        .store
        .read(|data| data.authenticate(username, &body.password).cloned())
        .inspect_err(|_| log::warn!("[AUTH] Failed login for '{}'", username))?;

    let session = state.sessions.create(user.id);
    log::info!(
        "[AUTH] {} ({}) logged in as {}",
        user.username,
        user.id,
        user.role.as_ref()
    );

    Ok(HttpResponse::Ok().json(SessionResponse::new(&user, Some(session.token))))
}

async fn logout(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, StoreError> {
    let token = bearer_token(&req).ok_or(StoreError::Unauthorized)?;
    if state.sessions.remove(token) {
        log::info!("[AUTH] Session ended");
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

async fn me(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, StoreError> {
    let user = current_user(&state, &req)?;
    Ok(HttpResponse::Ok().json(SessionResponse::new(&user, None)))
}
