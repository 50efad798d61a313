//! Tests for Anthropic instruction extraction, request shaping, and parsing.

use parley_common::{ModelDescriptor, ProviderKind};

use super::client::{ANTHROPIC_API_URL, ANTHROPIC_VERSION};
use super::*;
use crate::{AiError, Message, ProviderAdapter, SessionConfig};

fn model() -> ModelDescriptor {
    ModelDescriptor {
        api_key: "sk-ant-test".into(),
        provider: ProviderKind::Anthropic,
        model_name: "claude-sonnet-4-20250514".into(),
        max_tokens: 2048,
        input_price_per_1k: 0.003,
        output_price_per_1k: 0.015,
        base_url: None,
    }
}

#[test]
fn first_entry_becomes_instruction_and_leaves_transcript() {
    let (adapter, rest) = AnthropicAdapter::from_transcript(
        model(),
        vec![Message::system("You are a pirate."), Message::user("ahoy")],
    );
    assert_eq!(adapter.instruction(), Some("You are a pirate."));
    assert_eq!(rest, vec![Message::user("ahoy")]);
}

#[test]
fn empty_transcript_has_no_instruction() {
    let (adapter, rest) = AnthropicAdapter::from_transcript(model(), Vec::new());
    assert_eq!(adapter.instruction(), None);
    assert!(rest.is_empty());

    let body = adapter
        .build_request_body(&[Message::user("hi")], &SessionConfig::default())
        .unwrap();
    assert!(body.get("system").is_none());
}

#[test]
fn instruction_is_sent_separately_and_never_in_messages() {
    let opening = vec![Message::system("You are a pirate.")];
    let (adapter, mut transcript) = AnthropicAdapter::from_transcript(model(), opening.clone());
    transcript.push(Message::user("hello"));
    transcript.push(Message::assistant("arr"));
    transcript.push(Message::user("where is the treasure?"));

    let body = adapter
        .build_request_body(&transcript, &SessionConfig::default())
        .unwrap();

    assert_eq!(body["system"], opening[0].content.as_str());
    let sent = body["messages"].as_array().unwrap();
    assert_eq!(sent.len(), 3);
    assert!(sent.iter().all(|m| m["content"] != opening[0].content.as_str()));
    assert_eq!(sent[0]["role"], "user");
    assert_eq!(sent[1]["role"], "assistant");
}

#[test]
fn temperature_is_halved_and_max_tokens_sent() {
    let adapter = AnthropicAdapter::new(model(), None);
    let body = adapter
        .build_request_body(&[Message::user("x")], &SessionConfig { temperature: 1.0 })
        .unwrap();
    assert_eq!(body["temperature"], 0.5);
    assert_eq!(body["max_tokens"], 2048);
    assert_eq!(body["model"], "claude-sonnet-4-20250514");
}

#[test]
fn empty_message_list_is_rejected() {
    let adapter = AnthropicAdapter::new(model(), Some("sys".into()));
    let err = adapter
        .build_request_body(&[], &SessionConfig::default())
        .unwrap_err();
    assert!(matches!(err, AiError::InvalidRequest(_)));
}

#[test]
fn parses_first_content_block() {
    let adapter = AnthropicAdapter::new(model(), None);
    let json = serde_json::json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [
            {"type": "text", "text": "hi there"},
            {"type": "text", "text": "ignored"}
        ],
        "usage": {"input_tokens": 14, "output_tokens": 4}
    });
    let reply = adapter.parse_response(&json).unwrap();
    assert_eq!(reply.text, "hi there");
    assert_eq!(reply.usage.input_tokens, 14);
    assert_eq!(reply.usage.output_tokens, 4);
}

#[test]
fn missing_or_non_text_first_block_is_malformed() {
    let adapter = AnthropicAdapter::new(model(), None);

    let json = serde_json::json!({"content": []});
    assert!(matches!(
        adapter.parse_response(&json),
        Err(AiError::MalformedResponse(_))
    ));

    let json = serde_json::json!({"content": [{"type": "tool_use", "id": "t1", "name": "x", "input": {}}]});
    match adapter.parse_response(&json) {
        Err(AiError::MalformedResponse(detail)) => assert!(detail.contains("tool_use")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn auth_headers_use_api_key_and_version() {
    let adapter = AnthropicAdapter::new(model(), None);
    let headers = adapter.auth_headers().unwrap();
    assert_eq!(headers["x-api-key"], "sk-ant-test");
    assert_eq!(headers["anthropic-version"], ANTHROPIC_VERSION);
    assert_eq!(adapter.api_url(), ANTHROPIC_API_URL);
    assert_eq!(adapter.provider(), ProviderKind::Anthropic);
}
