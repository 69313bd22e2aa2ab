//! End-to-end tests over a real listener with the in-memory store.

use std::sync::Arc;

use cardinal::{
    app,
    auth::USER_ID_HEADER,
    config::Config,
    state::State,
    store::MemoryStore,
    testing::sample_submission,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let config = Config {
        port: 0,
        redis_url: String::new(),
        scan_limit: 1000,
    };
    let state = State::with_store(config, Arc::new(MemoryStore::default()));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.expect("serve");
    });

    format!("http://{address}")
}

async fn submit(base: &str, user: &str) -> Value {
    let response = reqwest::Client::new()
        .post(format!("{base}/survey"))
        .header(USER_ID_HEADER, user)
        .json(&Value::Object(sample_submission()))
        .send()
        .await
        .expect("submit");
    assert_eq!(response.status(), 201);

    response.json().await.expect("submit body")
}

#[tokio::test]
async fn test_submit_requires_identity() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("{base}/survey"))
        .json(&Value::Object(sample_submission()))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_submit_then_fetch_own_survey() {
    let base = spawn_server().await;

    let created = submit(&base, "user-1").await;
    let survey_id = created["surveyId"].as_str().expect("surveyId");

    let response = reqwest::Client::new()
        .get(format!("{base}/survey"))
        .header(USER_ID_HEADER, "user-1")
        .send()
        .await
        .expect("fetch");
    assert_eq!(response.status(), 200);

    let record: Value = response.json().await.expect("record");
    assert_eq!(record["surveyId"], survey_id);
    assert_eq!(record["userId"], "user-1");
    assert_eq!(record["gender"], "Male");
    assert!(record["completedAt"].as_str().is_some());
}

#[tokio::test]
async fn test_fetch_returns_latest_submission() {
    let base = spawn_server().await;

    let first = submit(&base, "user-1").await;
    let second = submit(&base, "user-1").await;
    assert_ne!(first["surveyId"], second["surveyId"]);

    let record: Value = reqwest::Client::new()
        .get(format!("{base}/survey"))
        .header(USER_ID_HEADER, "user-1")
        .send()
        .await
        .expect("fetch")
        .json()
        .await
        .expect("record");

    assert_eq!(record["surveyId"], second["surveyId"]);
}

#[tokio::test]
async fn test_fetch_missing_survey_is_404() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .get(format!("{base}/survey"))
        .header(USER_ID_HEADER, "user-1")
        .send()
        .await
        .expect("fetch");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("body");
    assert_eq!(body["message"], "No survey found for this user");
}

#[tokio::test]
async fn test_invalid_submission_names_fields() {
    let base = spawn_server().await;

    let mut payload = sample_submission();
    payload.remove("gender");
    payload.insert("religion".to_string(), json!(""));

    let response = reqwest::Client::new()
        .post(format!("{base}/survey"))
        .header(USER_ID_HEADER, "user-1")
        .json(&Value::Object(payload))
        .send()
        .await
        .expect("submit");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("body");
    assert_eq!(body["message"], "Invalid survey data");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors")
        .iter()
        .map(|error| error["field"].as_str().expect("field"))
        .collect();
    assert_eq!(fields, ["gender", "religion"]);
}

#[tokio::test]
async fn test_stats_on_empty_store() {
    let base = spawn_server().await;

    let stats: Value = reqwest::Client::new()
        .get(format!("{base}/survey/stats"))
        .send()
        .await
        .expect("stats")
        .json()
        .await
        .expect("body");

    assert_eq!(stats["totalResponses"], 0);
    assert_eq!(stats["categories"]["demographics"]["gender"]["counts"], json!({}));
    assert_eq!(
        stats["categories"]["demographics"]["gender"]["percentages"],
        json!({})
    );
}

#[tokio::test]
async fn test_stats_counts_and_percentages() {
    let base = spawn_server().await;

    submit(&base, "user-1").await;
    submit(&base, "user-2").await;

    let stats: Value = reqwest::Client::new()
        .get(format!("{base}/survey/stats"))
        .send()
        .await
        .expect("stats")
        .json()
        .await
        .expect("body");

    assert_eq!(stats["totalResponses"], 2);
    assert_eq!(
        stats["categories"]["demographics"]["gender"]["counts"]["Male"],
        2
    );
    assert_eq!(
        stats["categories"]["demographics"]["gender"]["percentages"]["Male"],
        100.0
    );
    assert_eq!(
        stats["categories"]["academics"]["highSchoolExtracurriculars"]["counts"]["Debate"],
        2
    );
}

#[tokio::test]
async fn test_analytics_aggregate() {
    let base = spawn_server().await;

    submit(&base, "user-1").await;

    let result: Value = reqwest::Client::new()
        .post(format!("{base}/analytics"))
        .json(&json!({ "operation": "aggregateSurveyData", "field": "religion" }))
        .send()
        .await
        .expect("analytics")
        .json()
        .await
        .expect("body");

    assert_eq!(result["field"], "religion");
    assert_eq!(result["counts"], json!([{ "value": "Atheist", "count": 1 }]));
}

#[tokio::test]
async fn test_analytics_correlation() {
    let base = spawn_server().await;

    submit(&base, "user-1").await;
    submit(&base, "user-2").await;

    let result: Value = reqwest::Client::new()
        .post(format!("{base}/analytics"))
        .json(&json!({
            "operation": "correlationAnalysis",
            "field1": "religion",
            "field2": "politics",
        }))
        .send()
        .await
        .expect("analytics")
        .json()
        .await
        .expect("body");

    assert_eq!(result["field1"], "religion");
    assert_eq!(result["field2"], "politics");
    assert_eq!(
        result["correlations"],
        json!([{ "value1": "Atheist", "value2": "Progressive", "count": 2 }])
    );
}

#[tokio::test]
async fn test_analytics_unsupported_operation() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("{base}/analytics"))
        .json(&json!({ "operation": "regressionAnalysis" }))
        .send()
        .await
        .expect("analytics");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("body");
    assert_eq!(body["message"], "Unsupported operation: regressionAnalysis");
}

#[tokio::test]
async fn test_analytics_rejects_unknown_field() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("{base}/analytics"))
        .json(&json!({ "operation": "aggregateSurveyData", "field": "favoriteColor" }))
        .send()
        .await
        .expect("analytics");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("body");
    assert_eq!(body["errors"][0]["field"], "field");
}
