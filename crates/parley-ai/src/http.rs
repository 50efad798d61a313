//! Shared HTTP plumbing: client construction, posting JSON, and mapping
//! transport and status failures into [`AiError`].

use std::time::Duration;

use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use crate::{AiError, Message, Reply, Role, TokenUsage};

/// Longest slice of an error body kept for diagnostics.
const MAX_ERROR_BODY: usize = 500;

/// HTTP client with a connect timeout only. Requests themselves are not
/// time-limited; a slow provider is cut short by the user interrupting.
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|e| {
            warn!("falling back to default HTTP client: {e}");
            reqwest::Client::new()
        })
}

/// POST a JSON body and return the decoded JSON response.
pub(crate) async fn post_json(
    http: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
    body: &serde_json::Value,
) -> Result<serde_json::Value, AiError> {
    let response = http
        .post(url)
        .headers(headers)
        .json(body)
        .send()
        .await
        .map_err(classify_transport)?;

    let status = response.status().as_u16();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            // The status line arrived, so it still decides the failure kind.
            debug!(status, "failed to read response body: {e}");
            classify_status(status, &e.to_string())?;
            return Err(AiError::MalformedResponse(format!(
                "response body could not be read: {e}"
            )));
        }
    };
    debug!(status, bytes = text.len(), "provider response");

    classify_status(status, &text)?;

    serde_json::from_str(&text)
        .map_err(|e| AiError::MalformedResponse(format!("response body is not JSON: {e}")))
}

/// Map a non-success HTTP status into the failure taxonomy.
pub(crate) fn classify_status(status: u16, body: &str) -> Result<(), AiError> {
    match status {
        200..=299 => Ok(()),
        429 => Err(AiError::RateLimited(error_message(body))),
        _ => Err(AiError::ServerStatus {
            status: Some(status),
            body: truncate(body),
        }),
    }
}

/// Map a reqwest error raised before a status could be inspected.
pub(crate) fn classify_transport(err: reqwest::Error) -> AiError {
    if err.is_connect() || err.is_timeout() {
        return AiError::Connection(err.to_string());
    }
    if err.is_decode() {
        return AiError::MalformedResponse(err.to_string());
    }
    AiError::ServerStatus {
        status: err.status().map(|s| s.as_u16()),
        body: err.to_string(),
    }
}

/// Best-effort human message from a provider error body.
///
/// OpenAI, Mistral and Anthropic all nest it under `error.message`;
/// Mistral sometimes puts it at the top level.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json["error"]["message"]
                .as_str()
                .or_else(|| json["message"].as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| truncate(body))
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}

/// Encode messages as `{role, content}` objects, the shape shared by the
/// OpenAI and Mistral chat-completions endpoints.
pub(crate) fn role_content_messages<'a>(
    messages: impl IntoIterator<Item = &'a Message>,
) -> Vec<serde_json::Value> {
    messages
        .into_iter()
        .map(|msg| {
            serde_json::json!({
                "role": msg.role.as_str(),
                "content": msg.content,
            })
        })
        .collect()
}

/// Parse a chat-completions response: text of `choices[0].message.content`.
pub(crate) fn parse_chat_completion(json: &serde_json::Value) -> Result<Reply, AiError> {
    let choice = json["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .ok_or_else(|| AiError::MalformedResponse("no choices in response".into()))?;

    let text = choice["message"]["content"]
        .as_str()
        .ok_or_else(|| AiError::MalformedResponse("choice has no text content".into()))?;

    let usage = TokenUsage {
        input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
        output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
    };

    Ok(Reply {
        text: text.to_string(),
        usage,
    })
}

/// `Authorization: Bearer <key>` header map.
pub(crate) fn bearer_headers(api_key: &str) -> Result<HeaderMap, AiError> {
    let mut headers = HeaderMap::new();
    let value = format!("Bearer {api_key}")
        .parse()
        .map_err(|_| AiError::InvalidRequest("API key is not a valid header value".into()))?;
    headers.insert(reqwest::header::AUTHORIZATION, value);
    Ok(headers)
}

/// Drop every system-role message.
pub(crate) fn without_system(messages: &[Message]) -> impl Iterator<Item = &Message> {
    messages.iter().filter(|m| m.role != Role::System)
}
