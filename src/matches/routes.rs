use axum::{
    Router,
    routing::{get, post},
};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_matches))
        .route("/", post(handler::create_match))
        .route("/:id", get(handler::get_match))
}
