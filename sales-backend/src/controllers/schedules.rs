use actix_web::{web, HttpRequest, HttpResponse};

use super::current_user;
use crate::error::StoreError;
use crate::models::{CreateResearchRequest, CreateScheduleRequest, Schedule, UpdateScheduleRequest};
use crate::views::upcoming_visits;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/schedules")
            .route("", web::get().to(list_schedules))
            .route("", web::post().to(create_schedule))
            .route("/upcoming", web::get().to(list_upcoming))
            .route("/{id}", web::put().to(update_schedule))
            .route("/{id}", web::delete().to(delete_schedule))
            .route("/{id}/research", web::post().to(create_research)),
    );
}

async fn list_schedules(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let schedules: Vec<Schedule> = state
        .store
        .read(|data| data.schedules_in_scope(viewer).into_iter().cloned().collect());
    Ok(HttpResponse::Ok().json(schedules))
}

/// Scheduled visits only, soonest first
async fn list_upcoming(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let visits = state.store.read(|data| upcoming_visits(data, viewer));
    Ok(HttpResponse::Ok().json(visits))
}

async fn create_schedule(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateScheduleRequest>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let schedule = state
        .store
        .write(|data| data.create_schedule(viewer, body.into_inner()))?;
    Ok(HttpResponse::Created().json(schedule))
}

async fn update_schedule(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<u64>,
    body: web::Json<UpdateScheduleRequest>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let id = path.into_inner();
    let schedule = state
        .store
        .write(|data| data.update_schedule(viewer, id, body.into_inner()))?;
    Ok(HttpResponse::Ok().json(schedule))
}

async fn delete_schedule(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<u64>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let id = path.into_inner();
    let deleted = state.store.write(|data| data.delete_schedule(viewer, id))?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": id, "deleted": deleted })))
}

async fn create_research(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<u64>,
    body: web::Json<CreateResearchRequest>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let id = path.into_inner();
    let research = state
        .store
        .write(|data| data.create_research(viewer, id, body.into_inner()))?;
    Ok(HttpResponse::Created().json(research))
}
