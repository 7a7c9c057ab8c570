pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::state::AppState;

/// Builds the application router with every route mounted.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route(
            "/hotelroom/{room_id}",
            get(routes::room::get_room)
                .post(routes::room::create_room)
                .put(routes::room::update_room)
                .delete(routes::room::delete_room),
        )
        .route("/hotelroomlist", get(routes::room::list_rooms))
        .route(
            "/guest/{guest_id}",
            get(routes::guest::get_guest)
                .post(routes::guest::create_guest)
                .put(routes::guest::update_guest)
                .delete(routes::guest::delete_guest),
        )
        .route("/guestlist", get(routes::guest::list_guests))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
