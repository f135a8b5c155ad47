use actix_web::{web, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};
use log::{debug, error, info, warn};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{ChatError, Result};
use crate::github;
use crate::model::GenerationError;
use crate::prompt;
use crate::router;
use crate::web::models::{ChatRequest, ChatResponse};
use crate::AppState;

const FALLBACK_MODEL: &str = "fallback";

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn method_not_allowed() -> Result<HttpResponse> {
    Err(ChatError::MethodNotAllowed)
}

/// Returns the query text if it is a non-blank string within `max_len` characters.
fn validate_query(query: Option<&Value>, max_len: usize) -> Result<&str> {
    let query = query
        .and_then(Value::as_str)
        .filter(|q| !q.trim().is_empty())
        .ok_or(ChatError::MissingQuery)?;

    if query.chars().count() > max_len {
        return Err(ChatError::QueryTooLong(max_len));
    }
    Ok(query)
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// Chat API endpoint
pub async fn chat(data: web::Data<AppState>, req: web::Json<ChatRequest>) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4();
    let query = validate_query(req.query.as_ref(), data.config.max_query_length)?;

    let model = data.model.as_ref().ok_or_else(|| {
        error!("Chat request {} rejected: GEMINI_API_KEY is not configured", request_id);
        ChatError::MissingApiKey
    })?;

    let route = router::route(query);
    info!(
        "Chat request {}: {} chars, {} history entries, route {:?}",
        request_id,
        query.chars().count(),
        req.conversation_history.len(),
        route
    );

    let profile_context = if route.fetch_profile {
        data.github
            .fetch_snapshot()
            .await
            .map(|snapshot| github::format_for_context(&snapshot))
    } else {
        None
    };
    if route.fetch_profile && profile_context.is_none() {
        warn!("Chat request {}: continuing without GitHub data", request_id);
    }

    let full_prompt = prompt::build_prompt(
        &req.conversation_history,
        data.config.history_limit,
        route.company,
        profile_context.as_deref(),
        query,
    );
    debug!("Chat request {} prompt is {} bytes", request_id, full_prompt.len());

    match model.generate(&full_prompt).await {
        Ok(raw) => {
            let response = prompt::tidy_response(&raw).ok_or(GenerationError::EmptyReply)?;
            info!(
                "Chat request {} answered: {} chars",
                request_id,
                response.chars().count()
            );
            Ok(HttpResponse::Ok().json(ChatResponse {
                response,
                model: model.model_name().to_string(),
                timestamp: timestamp(),
                fallback: false,
            }))
        }
        Err(GenerationError::RateLimited) => {
            warn!(
                "Chat request {} rate limited upstream, answering with {} fallback",
                request_id,
                route.fallback.name()
            );
            Ok(HttpResponse::Ok().json(ChatResponse {
                response: route.fallback.reply().to_string(),
                model: FALLBACK_MODEL.to_string(),
                timestamp: timestamp(),
                fallback: true,
            }))
        }
        Err(e) => {
            error!("Chat request {} failed: {}", request_id, e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_non_string_queries_are_rejected() {
        assert!(matches!(validate_query(None, 500), Err(ChatError::MissingQuery)));
        assert!(matches!(
            validate_query(Some(&json!("   ")), 500),
            Err(ChatError::MissingQuery)
        ));
        assert!(matches!(
            validate_query(Some(&json!(42)), 500),
            Err(ChatError::MissingQuery)
        ));
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = json!("é".repeat(10));
        assert!(validate_query(Some(&at_limit), 10).is_ok());

        let over = json!("a".repeat(11));
        assert!(matches!(
            validate_query(Some(&over), 10),
            Err(ChatError::QueryTooLong(10))
        ));
    }

    #[test]
    fn timestamp_is_utc_with_millis() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2025-01-01T00:00:00.000Z".len());
    }
}
