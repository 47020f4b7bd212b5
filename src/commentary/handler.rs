//! HTTP handlers for the commentary API.
//!
//! Both handlers validate before touching the store: the match-id path
//! segment first, then the query or body. Any schema violation short
//! circuits with a 400 and an issue list.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::store::CommentaryStore;
use super::validation;
use crate::api;
use crate::error::StoreError;
use crate::handler::AppState;
use crate::matches::validation::parse_match_id;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// `limit` arrives as a raw string so malformed values reach our
/// validator instead of being bounced by the deserializer.
#[derive(Debug, Deserialize)]
pub struct ListCommentaryQuery {
    pub limit: Option<String>,
}

/// Requested limits are honored up to the hard cap; absent means 10.
fn effective_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
}

pub async fn list_commentary(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Query(params): Query<ListCommentaryQuery>,
) -> Response {
    let match_id = match parse_match_id(&match_id) {
        Ok(id) => id,
        Err(issues) => return api::invalid("Invalid match ID parameter.", issues),
    };

    let limit = match validation::parse_limit(params.limit.as_deref()) {
        Ok(limit) => effective_limit(limit),
        Err(issues) => return api::invalid("Invalid query.", issues),
    };

    let store = CommentaryStore::new(state.db.connection());
    match store.list_by_match(match_id, limit).await {
        Ok(entries) => api::success(entries),
        Err(e) => {
            tracing::error!("Failed to fetch commentary: {}", e);
            api::internal_error("Failed to list commentary.")
        }
    }
}

pub async fn create_commentary(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(body): Json<JsonValue>,
) -> Response {
    let match_id = match parse_match_id(&match_id) {
        Ok(id) => id,
        Err(issues) => return api::invalid("Invalid match ID parameter.", issues),
    };

    let input = match validation::parse_create_commentary(&body) {
        Ok(input) => input,
        Err(issues) => return api::invalid("Invalid commentary data.", issues),
    };

    let store = CommentaryStore::new(state.db.connection());
    match store.create(match_id, input).await {
        Ok(entry) => api::created(entry),
        Err(StoreError::ForeignKeyViolation) => {
            tracing::error!("Referenced match does not exist.");
            api::bad_request("Referenced match does not exist.")
        }
        Err(e) => {
            tracing::error!("Failed to create commentary: {}", crate::unpack_error(&e));
            api::internal_error("Failed to create commentary.")
        }
    }
}
