use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Local;

use super::current_user;
use crate::error::StoreError;
use crate::models::{CreateFollowupRequest, CreateHistoryRequest, History, UpdateFollowupRequest};
use crate::views::followup_board;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/followups")
            .route("", web::get().to(list_followups))
            .route("", web::post().to(create_followup))
            .route("/{id}", web::put().to(update_followup))
            .route("/{id}", web::delete().to(delete_followup))
            .route("/{id}/histories", web::get().to(list_histories))
            .route("/{id}/histories", web::post().to(create_history)),
    );
}

/// Followups in scope, each with its contact history
async fn list_followups(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let board = state.store.read(|data| followup_board(data, viewer));
    Ok(HttpResponse::Ok().json(board))
}

async fn create_followup(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateFollowupRequest>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let today = Local::now().date_naive();
    let followup = state
        .store
        .write(|data| data.create_followup(viewer, body.into_inner(), today))?;
    Ok(HttpResponse::Created().json(followup))
}

async fn update_followup(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<u64>,
    body: web::Json<UpdateFollowupRequest>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let id = path.into_inner();
    let followup = state
        .store
        .write(|data| data.update_followup(viewer, id, body.into_inner()))?;
    Ok(HttpResponse::Ok().json(followup))
}

/// Deleting an id that is already gone reports `deleted: false`.
async fn delete_followup(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<u64>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let id = path.into_inner();
    let deleted = state.store.write(|data| data.delete_followup(viewer, id))?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id, "deleted": deleted })))
}

async fn list_histories(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<u64>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let id = path.into_inner();
    let histories = state.store.read(|data| {
        match data.followup(id) {
            Some(f) if viewer.can_see(f.user_id) => Ok(data
                .histories_for_followup(id)
                .into_iter()
                .cloned()
                .collect::<Vec<History>>()),
            // Rows outside the viewer's scope look the same as missing ones
            _ => Err(StoreError::not_found("followup", id)),
        }
    })?;
    Ok(HttpResponse::Ok().json(histories))
}

async fn create_history(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<u64>,
    body: web::Json<CreateHistoryRequest>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let id = path.into_inner();
    let now = Local::now().naive_local();
    let history = state
        .store
        .write(|data| data.create_history(viewer, id, body.into_inner(), now))?;
    Ok(HttpResponse::Created().json(history))
}
