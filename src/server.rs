//! HTTP wrapper around [`emotion::analyze`].
//!
//! `POST /analyze` is the only route. Bodies that fail to decode are analyzed
//! as empty text instead of being rejected.

use std::net::SocketAddr;

use axum::{
    Router,
    body::Bytes,
    http::{Method, StatusCode, header},
    response::Json,
    routing::post,
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::emotion::{self, EmotionPayload};
use crate::error::ServerError;

pub const ANALYZE_PATH: &str = "/analyze";

pub fn router() -> Router {
    Router::new()
        .route(ANALYZE_PATH, post(analyze_handler))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE]),
            ),
        )
}

async fn analyze_handler(body: Bytes) -> Json<EmotionPayload> {
    Json(analyze_body(&body))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Decodes a request body and classifies its `text` field.
pub fn analyze_body(body: &[u8]) -> EmotionPayload {
    let text = extract_text(body);
    let result = emotion::analyze(&text);
    debug!(
        emotion = result.emotion.as_str(),
        intensity = result.intensity,
        energy = result.energy,
        "classified text"
    );
    result.to_payload()
}

fn extract_text(body: &[u8]) -> String {
    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "undecodable body, analyzing empty text");
            return String::new();
        }
    };

    let Value::Object(mut map) = payload else {
        debug!("body is not a JSON object, analyzing empty text");
        return String::new();
    };

    match map.remove("text") {
        Some(Value::String(text)) => text,
        Some(other) => display_value(&other),
        None => String::new(),
    }
}

/// Renders a non-string `text` value the way a Python `str()` call would, so
/// list items stay separate words.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), display_value(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(delim);
    for ch in s.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delim => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delim);
    quoted
}

pub async fn serve(cfg: &Config) -> Result<(), ServerError> {
    let addr_str = cfg.listen_addr();
    let addr: SocketAddr = addr_str
        .parse()
        .map_err(|source| ServerError::InvalidAddress {
            addr: addr_str.clone(),
            source,
        })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr_str.clone(),
            source,
        })?;

    info!("Emotion server running on http://{}", addr_str);
    axum::serve(listener, router())
        .await
        .map_err(ServerError::Serve)
}
