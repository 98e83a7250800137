use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Datelike, Local};
use serde::Deserialize;

use super::current_user;
use crate::calendar::{month_grid, MonthRef};
use crate::error::StoreError;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/calendar").route(web::get().to(get_calendar)));
}

#[derive(Debug, Deserialize)]
struct CalendarQuery {
    year: Option<i32>,
    month: Option<u32>,
}

/// Month grid of the viewer's visits. Missing parts default to the current month.
async fn get_calendar(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<CalendarQuery>,
) -> Result<HttpResponse, StoreError> {
    let viewer = current_user(&state, &req)?.viewer();
    let today = Local::now().date_naive();
    let month = match (query.year, query.month) {
        (None, None) => MonthRef::containing(today),
        (year, month) => MonthRef::new(
            year.unwrap_or_else(|| today.year()),
            month.unwrap_or_else(|| today.month()),
        )?,
    };

    let grid = state
        .store
        .read(|data| month_grid(month, today, &data.schedules_in_scope(viewer)));
    Ok(HttpResponse::Ok().json(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::{bearer_for, seeded_state};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_month_grid_endpoint() {
        let state = seeded_state();
        let app = test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let auth = bearer_for(&state, 1);

        let req = test::TestRequest::get()
            .uri("/api/calendar?year=2025&month=6")
            .insert_header(auth.clone())
            .to_request();
        let grid: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(grid["title"], "2025년 6월");
        assert_eq!(grid["cells"].as_array().unwrap().len(), 42);
        assert_eq!(grid["weekdays"][0], "일");
        assert_eq!(grid["prev"]["month"], 5);
        let marked: Vec<&str> = grid["cells"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|c| c["has_event"] == true)
            .map(|c| c["date"].as_str().unwrap())
            .collect();
        assert_eq!(marked, vec!["2025-06-20", "2025-06-22"]);

        let req = test::TestRequest::get()
            .uri("/api/calendar?year=2025&month=13")
            .insert_header(auth)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_non_numeric_month_is_json_error() {
        let state = seeded_state();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::controllers::extractor_config)
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/calendar?year=2025&month=abc")
            .insert_header(bearer_for(&state, 1))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
    }

    #[actix_web::test]
    async fn test_defaults_to_current_month() {
        let state = seeded_state();
        let app = test::init_service(App::new().app_data(state.clone()).configure(config)).await;

        let req = test::TestRequest::get()
            .uri("/api/calendar")
            .insert_header(bearer_for(&state, 2))
            .to_request();
        let grid: Value = test::call_and_read_body_json(&app, req).await;
        let today = Local::now().date_naive();
        assert_eq!(grid["year"], today.year());
        assert_eq!(grid["month"], today.month());
        let todays: Vec<&Value> = grid["cells"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|c| c["is_today"] == true)
            .collect();
        assert_eq!(todays.len(), 1);
    }
}
