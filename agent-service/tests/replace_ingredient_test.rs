//! Tests for `/replace-ingredient`: the agent's validated reply is relayed
//! unchanged, and schema violations surface as client errors.

mod common;

use agent_service::services::providers::mock::MockTextProvider;
use agent_service::services::providers::ProviderError;
use agent_service::startup::build_router;
use axum::http::StatusCode;
use common::{post_json, read_json, test_state, TEST_AGENT_TOKEN};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

const UNREACHABLE_SEARCH_URL: &str = "http://127.0.0.1:9/search";

#[tokio::test]
async fn empty_alternative_list_passes_through_unchanged() {
    let provider = Arc::new(MockTextProvider::new());
    provider.push_text(r#"{"alternatives": []}"#);
    let app = build_router(test_state(provider, UNREACHABLE_SEARCH_URL));

    let response = app
        .oneshot(post_json(
            "/replace-ingredient",
            Some(TEST_AGENT_TOKEN),
            r#"{"text": "زرشک"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, json!({"alternatives": []}));
}

#[tokio::test]
async fn populated_alternatives_pass_through_unchanged() {
    let reply = json!({
        "alternatives": [
            {
                "name": "پنیر فتا",
                "general_description": "پنیر نرم و شور",
                "taste": "ملایم‌تر",
                "cost": "تقریباً مشابه",
                "availability": "به راحتی در دسترس"
            },
            {
                "name": "پنیر لیقوان",
                "general_description": "پنیر سفت و پرنمک",
                "taste": "قوی‌تر",
                "cost": "کمی گران‌تر",
                "availability": "نسبتاً در دسترس"
            }
        ]
    });

    let provider = Arc::new(MockTextProvider::new());
    provider.push_text(reply.to_string());
    let app = build_router(test_state(provider, UNREACHABLE_SEARCH_URL));

    let response = app
        .oneshot(post_json(
            "/replace-ingredient",
            Some(TEST_AGENT_TOKEN),
            r#"{"text": "پنیر"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, reply);
}

#[tokio::test]
async fn more_than_six_alternatives_is_a_client_error() {
    let alternatives: Vec<_> = (0..7)
        .map(|i| {
            json!({
                "name": format!("جایگزین {}", i),
                "general_description": "بافت مشابه",
                "taste": "ملایم‌تر",
                "cost": "ارزان‌تر",
                "availability": "به راحتی در دسترس"
            })
        })
        .collect();

    let provider = Arc::new(MockTextProvider::new());
    provider.push_text(json!({ "alternatives": alternatives }).to_string());
    let app = build_router(test_state(provider, UNREACHABLE_SEARCH_URL));

    let response = app
        .oneshot(post_json(
            "/replace-ingredient",
            Some(TEST_AGENT_TOKEN),
            r#"{"text": "پنیر"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("LLM failed"));
}

#[tokio::test]
async fn provider_failure_returns_400() {
    let provider = Arc::new(MockTextProvider::new());
    provider.push_error(ProviderError::RateLimited);
    let app = build_router(test_state(provider, UNREACHABLE_SEARCH_URL));

    let response = app
        .oneshot(post_json(
            "/replace-ingredient",
            Some(TEST_AGENT_TOKEN),
            r#"{"text": "پنیر"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_request_text_is_rejected() {
    let provider = Arc::new(MockTextProvider::new());
    let app = build_router(test_state(provider.clone(), UNREACHABLE_SEARCH_URL));

    let response = app
        .oneshot(post_json(
            "/replace-ingredient",
            Some(TEST_AGENT_TOKEN),
            r#"{"text": ""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.call_count(), 0);
}
