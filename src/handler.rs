use std::sync::Arc;

use axum::{
    Json,
    Router,
    response::IntoResponse,
    routing::get,
};

use tracing::info;

use crate::api::ApiResponse;
use crate::db::Database;
use crate::{commentary, matches};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(ApiResponse { data: "ok" })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(healthcheck))
        .nest("/matches", matches::routes())
        .nest("/matches/:id/commentary", commentary::routes())
        .with_state(state)
}
