//! Pure validation for match inputs. Nothing here touches the store.

use serde_json::Value as JsonValue;

use super::store::CreateMatch;
use crate::api::ValidationIssue;

/// Validates a raw `:id` path segment as a match identifier.
///
/// Identifiers are positive integers; anything else is rejected with a
/// structured issue rather than handed to the store.
pub fn parse_match_id(raw: &str) -> Result<i64, Vec<ValidationIssue>> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(vec![ValidationIssue::new(
            "id",
            "Match ID must be a positive integer",
        )]),
    }
}

pub fn parse_create_match(body: &JsonValue) -> Result<CreateMatch, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let home_team = required_team(body, "homeTeam", &mut issues);
    let away_team = required_team(body, "awayTeam", &mut issues);

    let kickoff_at = match body.get("kickoffAt") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(_) => {
            issues.push(ValidationIssue::new(
                "kickoffAt",
                "kickoffAt must be a non-empty string",
            ));
            None
        }
    };

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(CreateMatch {
        home_team: home_team.unwrap_or_default(),
        away_team: away_team.unwrap_or_default(),
        kickoff_at,
    })
}

fn required_team(
    body: &JsonValue,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match body.get(field) {
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(JsonValue::String(_)) => {
            issues.push(ValidationIssue::new(field, "must not be empty"));
            None
        }
        Some(_) => {
            issues.push(ValidationIssue::new(field, "must be a string"));
            None
        }
        None => {
            issues.push(ValidationIssue::new(field, "is required"));
            None
        }
    }
}
