pub mod config;
pub mod domain;
pub mod state;
pub mod utils;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::student::handler::get_students,
        domain::student::handler::search_students,
        domain::student::handler::register_student,
        domain::student::handler::get_student,
        domain::student::handler::update_seat,
        domain::student::handler::delete_student,
        domain::seating::handler::get_seating_chart,
        domain::seating::handler::shuffle_seating_chart,
        domain::seating::handler::get_seating_config,
        domain::seating::handler::update_seating_config,
        domain::snapshot::handler::save_snapshot,
        domain::snapshot::handler::list_snapshots,
        domain::snapshot::handler::get_snapshot,
        domain::snapshot::handler::restore_snapshot,
        domain::snapshot::handler::delete_snapshot,
    ),
    components(
        schemas(
            domain::student::dto::CreateStudentRequest,
            domain::student::dto::UpdateSeatRequest,
            domain::student::dto::StudentResponse,
            domain::seating::dto::ShuffleRequest,
            domain::seating::dto::SeatingChartResponse,
            domain::seating::dto::ShuffleResponse,
            domain::seating::dto::UpdateSeatingConfigRequest,
            domain::seating::dto::SeatingConfigResponse,
            domain::snapshot::dto::SaveSnapshotRequest,
            domain::snapshot::dto::SnapshotResponse,
            domain::snapshot::dto::SnapshotDetailResponse,
            domain::snapshot::dto::SnapshotWithDetailsResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Student", description = "生徒管理 API"),
        (name = "Seating", description = "座席表 API"),
        (name = "Snapshot", description = "座席表スナップショット API")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api/v1/students",
            get(domain::student::handler::get_students)
                .post(domain::student::handler::register_student),
        )
        .route(
            "/api/v1/students/search",
            get(domain::student::handler::search_students),
        )
        .route(
            "/api/v1/students/:id",
            get(domain::student::handler::get_student)
                .delete(domain::student::handler::delete_student),
        )
        .route(
            "/api/v1/students/:id/seat",
            put(domain::student::handler::update_seat),
        )
        .route(
            "/api/v1/seating/chart",
            get(domain::seating::handler::get_seating_chart),
        )
        .route(
            "/api/v1/seating/shuffle",
            post(domain::seating::handler::shuffle_seating_chart),
        )
        .route(
            "/api/v1/seating/config",
            get(domain::seating::handler::get_seating_config)
                .put(domain::seating::handler::update_seating_config),
        )
        .route(
            "/api/v1/seating/snapshots",
            get(domain::snapshot::handler::list_snapshots)
                .post(domain::snapshot::handler::save_snapshot),
        )
        .route(
            "/api/v1/seating/snapshots/:id",
            get(domain::snapshot::handler::get_snapshot)
                .delete(domain::snapshot::handler::delete_snapshot),
        )
        .route(
            "/api/v1/seating/snapshots/:id/restore",
            post(domain::snapshot::handler::restore_snapshot),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
