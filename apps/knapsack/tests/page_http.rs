use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use knapsack::client::{
    AlertKind, FormInputs, KnapsackPage, SubmitOutcome, GENERAL_ALERTS, GRAPH_CONTAINER,
    WEIGHTS_ALERTS,
};
use knapsack::config::ClientConfig;

fn page(server: &MockServer) -> KnapsackPage {
    KnapsackPage::connect(&ClientConfig {
        base_url: server.base_url(),
        alert_timeout: Duration::from_millis(6000),
    })
    .unwrap()
}

#[tokio::test]
async fn test_invalid_weights_issue_no_request() {
    let server = MockServer::start_async().await;
    let solve = server
        .mock_async(|when, then| {
            when.method(POST).path("/solve");
            then.status(200).json_body(json!({"data": {"nodes": [], "edges": []}}));
        })
        .await;

    let page = page(&server);
    page.set_inputs(FormInputs {
        weights: "1,-2,3".to_string(),
        values: "1,2,3".to_string(),
        capacity: "10".to_string(),
    });

    assert_eq!(page.submit().await, SubmitOutcome::Invalid);
    solve.assert_hits_async(0).await;

    let alert = page.alert(WEIGHTS_ALERTS).unwrap();
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(
        alert.message,
        "Please enter valid weights. Use numbers greater than 0 separated by ','."
    );
}

#[tokio::test]
async fn test_solve_error_message_is_shown_verbatim() {
    let server = MockServer::start_async().await;
    let solve = server
        .mock_async(|when, then| {
            when.method(POST).path("/solve");
            then.status(400)
                .json_body(json!({"message": "capacity too small"}));
        })
        .await;

    let page = page(&server);
    page.set_inputs(FormInputs {
        weights: "1,2".to_string(),
        values: "1,2".to_string(),
        capacity: "1".to_string(),
    });

    page.submit().await;
    solve.assert_async().await;

    let alert = page.alert(GENERAL_ALERTS).unwrap();
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.message, "capacity too small");
}

#[tokio::test]
async fn test_results_failure_has_its_own_notice() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/solve");
            then.status(200)
                .json_body(json!({"data": {"nodes": [{"id": 0}], "edges": []}}));
        })
        .await;
    let results = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/results")
                .json_body(json!({
                    "data": {"nodes": [{"id": 0}], "edges": []},
                    "values": [1.0, 2.0],
                    "volumes": [3.0, 4.0]
                }));
            then.status(500)
                .json_body(json!({"message": "results unavailable"}));
        })
        .await;

    let page = page(&server);
    page.set_inputs(FormInputs {
        weights: "3,4".to_string(),
        values: "1,2".to_string(),
        capacity: "5".to_string(),
    });

    assert_eq!(
        page.submit().await,
        SubmitOutcome::Failed("results unavailable".to_string())
    );
    results.assert_async().await;
    assert!(page.is_shown(GRAPH_CONTAINER));
    assert_eq!(
        page.alert(GENERAL_ALERTS).map(|a| a.message),
        Some("results unavailable".to_string())
    );
}

#[tokio::test]
async fn test_generate_populates_fields() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/generate");
            then.status(200)
                .json_body(json!({"values": [1, 2], "volumes": [3, 4], "capacity": 10}));
        })
        .await;

    let page = page(&server);
    page.generate().await.unwrap();

    let inputs = page.inputs();
    assert_eq!(inputs.values, "1,2");
    assert_eq!(inputs.weights, "3,4");
    assert_eq!(inputs.capacity, "10");
}

#[tokio::test]
async fn test_generate_failure_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/generate");
            then.status(503);
        })
        .await;

    let page = page(&server);
    assert!(page.generate().await.is_err());
    assert_eq!(
        page.alert(GENERAL_ALERTS).map(|a| a.message),
        Some("Request failed with status 503".to_string())
    );
    assert_eq!(page.inputs(), FormInputs::default());
}
