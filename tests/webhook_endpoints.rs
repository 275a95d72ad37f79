mod support;

#[tokio::test]
async fn test_health_banner() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .get(base_url)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.text().await.expect("body should read");
    assert_eq!(body, "Visitor Minute Tracker is running");
}

#[tokio::test]
async fn test_minute_validation_accepts_value_in_range() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let payload = serde_json::json!({ "maxDuration": "90" });

    let res = client
        .post(format!("{base_url}/minute-validation"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.expect("json body should parse");
    assert_eq!(body["maxDuration"], 90);
}

#[tokio::test]
async fn test_minute_validation_rejects_value_above_limit() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let payload = serde_json::json!({ "maxDuration": "200" });

    let res = client
        .post(format!("{base_url}/minute-validation"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.expect("json body should parse");
    assert_eq!(
        body["error"],
        "Max duration must be a number between 0 and 180 minutes"
    );
}

#[tokio::test]
async fn test_minute_validation_defaults_empty_value() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let payload = serde_json::json!({ "maxDuration": "" });

    let res = client
        .post(format!("{base_url}/minute-validation"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.expect("json body should parse");
    assert_eq!(body["maxDuration"], 60);
}

#[tokio::test]
async fn test_sign_in_acknowledges_without_processing() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let payload = serde_json::json!({
        "meta": { "config": {} },
        "payload": { "attributes": { "signed-in-at": "2026-01-05T09:00:00Z" } }
    });

    let res = client
        .post(format!("{base_url}/visitor-sign-in"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.expect("json body should parse");
    assert_eq!(body["message"], "Visitor signed in");
}

#[tokio::test]
async fn test_sign_out_without_visitor_is_rejected() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let payload = serde_json::json!({
        "meta": { "config": {}, "job": { "id": "job-1" } }
    });

    let res = client
        .post(format!("{base_url}/visitor-sign-out"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.expect("json body should parse");
    assert_eq!(body["error"], "Visitor information missing");
}

#[tokio::test]
async fn test_sign_out_without_integration_context_is_a_server_error() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();
    let payload = serde_json::json!({
        "payload": { "attributes": { "signed-in-at": "2026-01-05T09:00:00Z" } }
    });

    let res = client
        .post(format!("{base_url}/visitor-sign-out"))
        .json(&payload)
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.expect("json body should parse");
    assert_eq!(body["error"], "Integration context not found");
}
