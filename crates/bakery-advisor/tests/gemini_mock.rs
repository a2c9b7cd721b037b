//! Live advisor against a local mock of the generateContent endpoint

use bakery_advisor::{
    advisor_from_config, Advice, Advisor, AdvisorConfig, AdvisorError, AdvisorySession,
    AdvisoryState, GeminiAdvisor, Trend, FAILURE_MESSAGE,
};
use bakery_catalog::sample;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;

#[derive(Debug, Clone)]
struct Captured {
    model: String,
    key: Option<String>,
    body: Value,
}

/// Start a mock answering every call with `status` and `reply`
fn mock_server(status: u16, reply: Value) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    let status = StatusCode::from_u16(status).unwrap();

    let route = warp::post()
        .and(warp::path!("v1beta" / "models" / String))
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::body::json())
        .map(move |model: String, query: HashMap<String, String>, body: Value| {
            sink.lock().push(Captured {
                model,
                key: query.get("key").cloned(),
                body,
            });
            warp::reply::with_status(warp::reply::json(&reply), status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (format!("http://{addr}"), captured)
}

fn candidate_text(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    })
}

fn advisor_for(base_url: &str) -> GeminiAdvisor {
    GeminiAdvisor::new(
        AdvisorConfig::new()
            .with_api_key("test-key")
            .with_base_url(base_url),
    )
    .unwrap()
}

fn sample_advice() -> Advice {
    Advice {
        analysis: "Butter dominates".to_string(),
        suggestion: "Blend in margarine".to_string(),
        potential_savings: "8%".to_string(),
    }
}

#[tokio::test]
async fn parses_advice_from_first_candidate() {
    let text = serde_json::to_string(&sample_advice()).unwrap();
    let (base, _) = mock_server(200, candidate_text(&text));

    let advice = advisor_for(&base)
        .optimize_recipe(&sample::recipes()[0], sample::ingredients())
        .await
        .unwrap();

    assert_eq!(advice, sample_advice());
}

#[tokio::test]
async fn request_carries_key_prompt_and_schema() {
    let text = serde_json::to_string(&sample_advice()).unwrap();
    let (base, captured) = mock_server(200, candidate_text(&text));

    advisor_for(&base)
        .optimize_recipe(&sample::recipes()[0], sample::ingredients())
        .await
        .unwrap();

    let calls = captured.lock().clone();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.model, "gemini-2.5-flash:generateContent");
    assert_eq!(call.key.as_deref(), Some("test-key"));

    let prompt = call.body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Recipe: Artisan Croissant (Yield: 50)"));
    assert!(prompt.contains("Unsalted Butter (Cost: $8.5/KG)"));

    let config = &call.body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(config["responseSchema"]["type"], "OBJECT");
    assert_eq!(config["responseSchema"]["properties"]["analysis"]["type"], "STRING");
}

#[tokio::test]
async fn missing_field_is_malformed_not_partial() {
    let (base, _) = mock_server(
        200,
        candidate_text(r#"{"analysis":"a","suggestion":"b"}"#),
    );

    let err = advisor_for(&base)
        .optimize_recipe(&sample::recipes()[0], sample::ingredients())
        .await
        .unwrap_err();

    assert!(matches!(err, AdvisorError::MalformedReply(_)), "{err:?}");
}

#[tokio::test]
async fn prose_reply_is_malformed() {
    let (base, _) = mock_server(200, candidate_text("I would use less butter."));

    let err = advisor_for(&base)
        .optimize_recipe(&sample::recipes()[1], sample::ingredients())
        .await
        .unwrap_err();

    assert!(matches!(err, AdvisorError::MalformedReply(_)), "{err:?}");
}

#[tokio::test]
async fn no_candidates_is_empty_reply() {
    let (base, _) = mock_server(200, json!({ "candidates": [] }));

    let err = advisor_for(&base)
        .optimize_recipe(&sample::recipes()[0], sample::ingredients())
        .await
        .unwrap_err();

    assert!(matches!(err, AdvisorError::EmptyReply), "{err:?}");
}

#[tokio::test]
async fn server_error_is_status() {
    let (base, _) = mock_server(500, json!({ "error": { "message": "overloaded" } }));

    let err = advisor_for(&base)
        .optimize_recipe(&sample::recipes()[0], sample::ingredients())
        .await
        .unwrap_err();

    match &err {
        AdvisorError::Status { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.contains("overloaded"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn forecast_parses_trend() {
    let text = json!({
        "forecast": [
            { "day": "Sat", "predictedQty": 520, "reasoning": "weekend" },
            { "day": "Sun", "predictedQty": 480, "reasoning": "brunch" },
            { "day": "Mon", "predictedQty": 400, "reasoning": "baseline" }
        ],
        "trend": "DOWN"
    })
    .to_string();
    let (base, captured) = mock_server(200, candidate_text(&text));

    let forecast = advisor_for(&base)
        .forecast_demand(sample::weekly_output())
        .await
        .unwrap();

    assert_eq!(forecast.trend, Trend::Down);
    assert_eq!(forecast.total_predicted(), 1400);
    let calls = captured.lock().clone();
    assert!(calls[0].body["generationConfig"].get("responseSchema").is_none());
}

#[tokio::test]
async fn session_reports_fixed_message_on_failure() {
    let (base, _) = mock_server(503, json!({}));
    let advisor = advisor_for(&base);
    let session = AdvisorySession::new();

    let state = session
        .request(&advisor, &sample::recipes()[0], sample::ingredients())
        .await
        .unwrap();

    assert_eq!(
        state,
        AdvisoryState::Failed {
            recipe: sample::recipes()[0].id.clone(),
            message: FAILURE_MESSAGE.to_string(),
        }
    );
}

#[tokio::test]
async fn session_reaches_ready_with_live_advice() {
    let text = serde_json::to_string(&sample_advice()).unwrap();
    let (base, _) = mock_server(200, candidate_text(&text));
    let advisor = advisor_for(&base);
    let session = AdvisorySession::new();

    session
        .request(&advisor, &sample::recipes()[0], sample::ingredients())
        .await
        .unwrap();

    assert_eq!(session.advice(), Some(sample_advice()));
    session.reset().unwrap();
    assert_eq!(session.state(), AdvisoryState::Idle);
}

#[tokio::test]
async fn no_credential_never_reaches_the_server() {
    let (base, captured) = mock_server(200, json!({}));
    let advisor = advisor_from_config(
        &AdvisorConfig::new()
            .with_base_url(&base)
            .with_simulated_delay(std::time::Duration::from_millis(1)),
    )
    .unwrap();

    let advice = advisor
        .optimize_recipe(&sample::recipes()[0], sample::ingredients())
        .await
        .unwrap();

    assert_eq!(advisor.name(), "canned");
    assert_eq!(advice, bakery_advisor::canned_advice());
    assert!(captured.lock().is_empty());
}
