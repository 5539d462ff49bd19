use sqlx::SqlitePool;
use storage::{
    dto::{
        athlete::{AthleteFilter, CreateAthleteRequest},
        common::{PaginatedResponse, PaginationParams},
    },
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
};

/// List one page of athletes matching the filter
pub async fn list_athletes(
    pool: &SqlitePool,
    filter: &AthleteFilter,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<Athlete>> {
    let repo = AthleteRepository::new(pool);
    repo.list(filter, pagination).await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &SqlitePool, id: i64) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a new athlete
pub async fn create_athlete(pool: &SqlitePool, request: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.create(request).await?;

    tracing::info!(athlete_id = athlete.id, "Registered athlete");

    Ok(athlete)
}
