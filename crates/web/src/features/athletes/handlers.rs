use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::{
        athlete::{AthleteFilter, CreateAthleteRequest},
        common::{DEFAULT_PAGE_SIZE, PaginatedResponse, PaginationParams},
    },
    models::Athlete,
};
use utoipa::IntoParams;
use validator::Validate;

use crate::error::WebError;

use super::services;

/// Query string accepted by `GET /athletes`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AthleteListQuery {
    /// Exact athlete name
    pub name: Option<String>,
    /// Exact national ID
    pub national_id: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size, between 1 and 100
    #[serde(alias = "page_size")]
    pub size: Option<i64>,
}

impl AthleteListQuery {
    fn into_parts(self) -> (AthleteFilter, PaginationParams) {
        let filter = AthleteFilter {
            name: self.name,
            national_id: self.national_id,
        };
        let pagination = PaginationParams::new(
            self.page.unwrap_or(1),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        (filter, pagination)
    }
}

#[utoipa::path(
    get,
    path = "/athletes",
    params(AthleteListQuery),
    responses(
        (status = 200, description = "Page of athletes matching the filters", body = PaginatedResponse<Athlete>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    query: Result<Query<AthleteListQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;
    let (filter, pagination) = query.into_parts();

    let page = services::list_athletes(db.pool(), &filter, &pagination).await?;

    Ok(Json(page).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/{id}",
    params(
        ("id" = i64, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Athlete found", body = Athlete),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id.map_err(|e| WebError::BadRequest(e.body_text()))?;

    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    post,
    path = "/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete registered successfully", body = Athlete),
        (status = 400, description = "Validation error"),
        (status = 409, description = "An athlete with this national ID already exists"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    payload: Result<Json<CreateAthleteRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;

    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}
