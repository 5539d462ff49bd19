use axum::Router;
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::athletes;

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::common::PaginationMeta,
            storage::models::Athlete,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registration endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the application router around an already connected database.
pub fn create_app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/athletes", athletes::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
