//! HTTP handlers for the match registry.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::store::MatchStore;
use super::validation;
use crate::api;
use crate::handler::AppState;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListMatchesQuery {
    pub limit: Option<i64>,
}

pub async fn create_match(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Response {
    let input = match validation::parse_create_match(&body) {
        Ok(input) => input,
        Err(issues) => return api::invalid("Invalid match data.", issues),
    };

    let store = MatchStore::new(state.db.connection());
    match store.create(input).await {
        Ok(m) => api::created(m),
        Err(e) => {
            tracing::error!("Failed to create match: {}", e);
            api::internal_error("Failed to create match.")
        }
    }
}

pub async fn get_match(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match validation::parse_match_id(&id) {
        Ok(id) => id,
        Err(issues) => return api::invalid("Invalid match ID parameter.", issues),
    };

    let store = MatchStore::new(state.db.connection());
    match store.get(id).await {
        Ok(Some(m)) => api::success(m),
        Ok(None) => api::not_found("Match not found."),
        Err(e) => {
            tracing::error!("Failed to get match: {}", e);
            api::internal_error("Failed to get match.")
        }
    }
}

pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<ListMatchesQuery>,
) -> Response {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let store = MatchStore::new(state.db.connection());
    match store.list(limit).await {
        Ok(matches) => api::success(matches),
        Err(e) => {
            tracing::error!("Failed to list matches: {}", e);
            api::internal_error("Failed to list matches.")
        }
    }
}
