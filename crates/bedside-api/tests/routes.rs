use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = bedside_api::router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let response = bedside_api::router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn lists_three_tools() {
    let (status, body) = call("GET", "/tools", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body.as_array().unwrap().iter().map(|t| t["id"].clone()).collect();
    assert_eq!(ids, vec![json!("drugs"), json!("sofa"), json!("interval")]);
}

#[tokio::test]
async fn extract_returns_matches_and_success_notice() {
    let (status, body) = call(
        "POST",
        "/drugs/extract",
        Some(json!({ "text": "Given Furosemide, then furosemide again and morphine." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"].as_array().unwrap().len(), 2);
    assert_eq!(body["matches"][0]["drug"], "Furosemide");
    assert_eq!(body["matches"][1]["indication"], "Severe Pain");
    assert_eq!(body["notice"]["level"], "success");
}

#[tokio::test]
async fn blank_extract_is_a_warning_not_an_error() {
    let (status, body) = call("POST", "/drugs/extract", Some(json!({ "text": "  " }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"], json!([]));
    assert_eq!(body["notice"]["level"], "warning");
    assert_eq!(
        body["notice"]["message"],
        "Please enter some text to extract drugs from."
    );
}

#[tokio::test]
async fn drugs_filter_by_class_and_indication() {
    let (status, body) = call("GET", "/drugs?class=antibiotic&indication=pseudomonal", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body.as_array().unwrap().iter().map(|d| d["name"].clone()).collect();
    assert_eq!(names, vec![json!("piperacillin"), json!("cefepime")]);

    let (status, body) = call("GET", "/drugs?class=antiviral", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown drug class: antiviral");
}

#[tokio::test]
async fn instrument_detail_and_unknown_instrument() {
    let (status, body) = call("GET", "/instruments/sofa", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["systems"].as_array().unwrap().len(), 6);
    assert_eq!(body["max_total"], 24);

    let (status, _) = call("GET", "/instruments/apache2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scores_sofa() {
    let selections = json!([
        { "system_id": "respiration", "option_id": "lt_200_supported" },
        { "system_id": "coagulation", "option_id": "lt_100" },
        { "system_id": "liver", "option_id": "lt_1_2" },
        { "system_id": "cardiovascular", "option_id": "dopa_gt_5" },
        { "system_id": "cns", "option_id": "gcs_13_14" },
        { "system_id": "renal", "option_id": "2_0_to_3_4" },
    ]);
    let (status, body) = call(
        "POST",
        "/instruments/sofa/score",
        Some(json!({ "selections": selections })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 11);
    assert_eq!(body["mortality"], "40 – 50%");
}

#[tokio::test]
async fn incomplete_sofa_lists_problems() {
    let (status, body) = call(
        "POST",
        "/instruments/sofa/score",
        Some(json!({ "selections": [{ "system_id": "liver", "option_id": "ge_12" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "5 invalid selection(s)");
    assert_eq!(body["details"][0]["kind"], "missing_system");
}

#[tokio::test]
async fn interval_reports_days_hours_minutes() {
    let (status, body) = call(
        "POST",
        "/interval",
        Some(json!({
            "start": { "date": "2024-01-01", "hour": 8, "minute": 0 },
            "end": { "date": "2024-01-02", "hour": 9, "minute": 5 },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "1 days, 1 hours, 5 minutes");
    assert_eq!(body["total_seconds"], 97_500);
    assert_eq!(body["days"], 1);
}

#[tokio::test]
async fn interval_rejects_end_before_start() {
    let (status, body) = call(
        "POST",
        "/interval",
        Some(json!({
            "start": { "date": "2024-01-02", "hour": 9, "minute": 5 },
            "end": { "date": "2024-01-01", "hour": 8, "minute": 0 },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("End date/time must be after"));
    assert!(body.get("summary").is_none());
}

#[tokio::test]
async fn interval_rejects_bad_hour() {
    let (status, body) = call(
        "POST",
        "/interval",
        Some(json!({
            "start": { "date": "2024-01-01", "hour": 25, "minute": 0 },
            "end": { "date": "2024-01-02", "hour": 9, "minute": 5 },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "hour 25 is outside 0-23");
}

#[tokio::test]
async fn blank_drug_filters_return_the_whole_table() {
    for uri in ["/drugs?indication=", "/drugs?class=&indication=", "/drugs?class=%20"] {
        let (status, body) = call("GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().unwrap().len(), 72, "{uri}");
    }

    let (status, body) = call("GET", "/drugs?class=steroid&indication=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let (status, body) = call(
        "POST",
        "/interval",
        Some(json!({
            "start": { "date": "2024-01-01", "hour": 300, "minute": 0 },
            "end": { "date": "2024-01-02", "hour": 9, "minute": 5 },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("start.hour"), "{body}");

    let (status, body) = call("POST", "/drugs/extract", Some(json!({ "text": 42 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = call("POST", "/instruments/sofa/score", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("selections"), "{body}");
}
