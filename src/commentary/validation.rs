//! Pure validation for commentary inputs. Nothing here touches the store.
//!
//! The creation schema is the external contract for commentary payloads;
//! this module is the single place that defines it.

use serde_json::Value as JsonValue;

use super::store::CreateCommentary;
use crate::api::ValidationIssue;

const MAX_TEXT_LEN: usize = 2000;

/// Validates the optional `limit` query parameter. Accepted as a raw
/// string so malformed values produce our issue list instead of a
/// deserializer rejection.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<i64>, Vec<ValidationIssue>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match raw.parse::<i64>() {
        Ok(limit) if limit >= 1 => Ok(Some(limit)),
        _ => Err(vec![ValidationIssue::new(
            "limit",
            "limit must be a positive integer",
        )]),
    }
}

pub fn parse_create_commentary(
    body: &JsonValue,
) -> Result<CreateCommentary, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let text = match body.get("text") {
        Some(JsonValue::String(s)) if s.trim().is_empty() => {
            issues.push(ValidationIssue::new("text", "must not be empty"));
            None
        }
        Some(JsonValue::String(s)) if s.chars().count() > MAX_TEXT_LEN => {
            issues.push(ValidationIssue::new("text", "must be at most 2000 characters"));
            None
        }
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(ValidationIssue::new("text", "must be a string"));
            None
        }
        None => {
            issues.push(ValidationIssue::new("text", "is required"));
            None
        }
    };

    let minute = match body.get("minute") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Number(n)) => match n.as_i64() {
            Some(m) if m >= 0 => Some(m),
            _ => {
                issues.push(ValidationIssue::new(
                    "minute",
                    "must be a non-negative integer",
                ));
                None
            }
        },
        Some(_) => {
            issues.push(ValidationIssue::new(
                "minute",
                "must be a non-negative integer",
            ));
            None
        }
    };

    let author = match body.get("author") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(_) => {
            issues.push(ValidationIssue::new("author", "must be a non-empty string"));
            None
        }
    };

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(CreateCommentary {
        text: text.unwrap_or_default(),
        minute,
        author,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_limit_is_none() {
        assert_eq!(parse_limit(None).unwrap(), None);
    }

    #[test]
    fn numeric_limit_passes_through() {
        assert_eq!(parse_limit(Some("25")).unwrap(), Some(25));
    }

    #[test]
    fn non_numeric_and_non_positive_limits_are_rejected() {
        for raw in ["abc", "", "2.5", "0", "-10"] {
            let issues = parse_limit(Some(raw)).unwrap_err();
            assert_eq!(issues[0].path, "limit");
        }
    }

    #[test]
    fn accepts_minimal_payload() {
        let parsed = parse_create_commentary(&json!({ "text": "Goal!" })).unwrap();
        assert_eq!(parsed.text, "Goal!");
        assert_eq!(parsed.minute, None);
        assert_eq!(parsed.author, None);
    }

    #[test]
    fn accepts_full_payload() {
        let body = json!({ "text": "Corner cleared", "minute": 78, "author": "Tunde" });
        let parsed = parse_create_commentary(&body).unwrap();
        assert_eq!(parsed.minute, Some(78));
        assert_eq!(parsed.author.as_deref(), Some("Tunde"));
    }

    #[test]
    fn missing_text_is_an_issue() {
        let issues = parse_create_commentary(&json!({})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "text");
        assert_eq!(issues[0].message, "is required");
    }

    #[test]
    fn empty_text_is_an_issue() {
        let issues = parse_create_commentary(&json!({ "text": "   " })).unwrap_err();
        assert_eq!(issues[0].path, "text");
    }

    #[test]
    fn oversized_text_is_an_issue() {
        let body = json!({ "text": "x".repeat(2001) });
        let issues = parse_create_commentary(&body).unwrap_err();
        assert_eq!(issues[0].path, "text");
    }

    #[test]
    fn negative_minute_is_an_issue() {
        let body = json!({ "text": "Kickoff", "minute": -1 });
        let issues = parse_create_commentary(&body).unwrap_err();
        assert_eq!(issues[0].path, "minute");
    }

    #[test]
    fn collects_multiple_issues() {
        let body = json!({ "minute": "soon", "author": 3 });
        let issues = parse_create_commentary(&body).unwrap_err();
        let paths: Vec<_> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["text", "minute", "author"]);
    }
}
