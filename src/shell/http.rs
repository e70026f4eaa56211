use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::assignments::use_cases::create_assignment::inbound::http as create_http;
use crate::modules::assignments::use_cases::delete_assignment::inbound::http as delete_http;
use crate::modules::assignments::use_cases::get_assignment::inbound::http as get_http;
use crate::modules::assignments::use_cases::list_assignments::inbound::http as list_http;
use crate::modules::assignments::use_cases::update_assignment::inbound::http as update_http;
use crate::shell::graphql::{self, GRAPHQL_PATH, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(
            "/api/v1/assignment",
            post(create_http::handle).get(list_http::handle),
        )
        .route(
            "/api/v1/assignment/{assignment_id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .route(
            GRAPHQL_PATH,
            get(graphql::graphiql).post(graphql::graphql),
        )
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
