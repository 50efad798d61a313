//! Tests for Mistral request shaping and response parsing.

use parley_common::{ModelDescriptor, ProviderKind};

use super::client::MISTRAL_API_URL;
use super::*;
use crate::{AiError, Message, ProviderAdapter, RemoteTurnResult, Role, SessionConfig};

fn adapter() -> MistralAdapter {
    MistralAdapter::new(ModelDescriptor {
        api_key: "mistral-key".into(),
        provider: ProviderKind::Mistral,
        model_name: "mistral-large-latest".into(),
        max_tokens: 4096,
        input_price_per_1k: 0.002,
        output_price_per_1k: 0.006,
        base_url: None,
    })
}

#[test]
fn system_messages_are_filtered_out() {
    let messages = vec![
        Message::system("You are terse."),
        Message::user("one"),
        Message::assistant("two"),
        Message::user("three"),
    ];
    let body = adapter()
        .build_request_body(&messages, &SessionConfig::default())
        .unwrap();

    let sent = body["messages"].as_array().unwrap();
    assert_eq!(sent.len(), 3);
    assert!(sent.iter().all(|m| m["role"] != Role::System.as_str()));
    assert_eq!(sent[0]["content"], "one");
    assert_eq!(sent[2]["content"], "three");
}

#[test]
fn interleaved_system_messages_are_all_dropped() {
    let messages = vec![
        Message::system("a"),
        Message::user("q"),
        Message::system("b"),
        Message::assistant("r"),
    ];
    let body = adapter()
        .build_request_body(&messages, &SessionConfig::default())
        .unwrap();
    let roles: Vec<_> = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["role"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(roles, ["user", "assistant"]);
}

#[test]
fn temperature_is_halved() {
    let body = adapter()
        .build_request_body(&[Message::user("x")], &SessionConfig { temperature: 1.4 })
        .unwrap();
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["model"], "mistral-large-latest");
}

#[test]
fn only_system_messages_is_rejected() {
    let err = adapter()
        .build_request_body(&[Message::system("x")], &SessionConfig::default())
        .unwrap_err();
    assert!(matches!(err, AiError::InvalidRequest(_)));
}

#[tokio::test]
async fn send_without_user_messages_fails_without_network() {
    let result = adapter()
        .send(&[Message::system("only")], &SessionConfig::default())
        .await;
    assert!(matches!(
        result,
        RemoteTurnResult::Failure(AiError::InvalidRequest(_))
    ));
}

#[test]
fn parses_completion_text() {
    let json = serde_json::json!({
        "object": "chat.completion",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": "Bonjour"}, "finish_reason": "stop"}],
        "usage": {"prompt_tokens": 5, "completion_tokens": 2}
    });
    let reply = adapter().parse_response(&json).unwrap();
    assert_eq!(reply.text, "Bonjour");
    assert_eq!(reply.usage.output_tokens, 2);
}

#[test]
fn uses_public_endpoint_by_default() {
    assert_eq!(adapter().api_url(), MISTRAL_API_URL);
    assert_eq!(adapter().provider(), ProviderKind::Mistral);
}
