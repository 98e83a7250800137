use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::current_user;
use crate::dashboard::{dashboard, team_report};
use crate::error::StoreError;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/dashboard").route(web::get().to(get_dashboard)));
    cfg.service(web::resource("/api/reports/team").route(web::get().to(get_team_report)));
}

#[derive(Debug, Deserialize)]
struct TeamReportQuery {
    sales_user_id: Option<u64>,
}

async fn get_dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, StoreError> {
    let user = current_user(&state, &req)?;
    let summary = state.store.read(|data| dashboard(data, &user));
    Ok(HttpResponse::Ok().json(summary))
}

async fn get_team_report(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<TeamReportQuery>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let report = state
        .store
        .read(|data| team_report(data, viewer, query.sales_user_id))?;
    Ok(HttpResponse::Ok().json(report))
}
