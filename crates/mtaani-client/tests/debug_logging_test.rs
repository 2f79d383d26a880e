//! Debug logging must only observe requests: every scenario below is run
//! with `debug` off and on, under a subscriber that records `debug` events,
//! and both runs must end the same way with the same number of requests.
//!
//! | Scenario | Expected |
//! |----------|----------|
//! | 2xx with data | same business returned |
//! | 404 | `NotFound`, same message |
//! | slow response with one retry | `Timeout`, two requests both times |
//! | 2xx without `data` | `MissingData` |

use std::time::Duration;

use mtaani_client::{ClientConfig, MtaaniClient, MtaaniError};
use tracing::subscriber::DefaultGuard;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Copy, Debug)]
enum Scenario {
    Ok,
    NotFound,
    SlowWithRetry,
    NoData,
}

/// What a call ended with, reduced to something comparable.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Business(String),
    Failed {
        kind: &'static str,
        status: Option<u16>,
        message: String,
    },
}

fn kind(err: &MtaaniError) -> &'static str {
    match err {
        MtaaniError::NotFound(_) => "not_found",
        MtaaniError::Timeout(_) => "timeout",
        MtaaniError::MissingData { .. } => "missing_data",
        _ => "other",
    }
}

fn capture_debug_events() -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

async fn run(scenario: Scenario, debug: bool) -> Outcome {
    let server = MockServer::start().await;
    let (template, expected_requests) = match scenario {
        Scenario::Ok => (
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "id": 750, "name": "Duka La Mama" }
            })),
            1,
        ),
        Scenario::NotFound => (
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "message": "Business not found" })),
            1,
        ),
        Scenario::SlowWithRetry => (
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "id": 1, "name": "x" } }))
                .set_delay(Duration::from_millis(300)),
            2,
        ),
        Scenario::NoData => (
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
            1,
        ),
    };
    Mock::given(method("GET"))
        .and(path("/business"))
        .respond_with(template)
        .expect(expected_requests)
        .mount(&server)
        .await;

    let mut config = ClientConfig::new("test-key")
        .unwrap()
        .with_base_url(&server.uri())
        .unwrap()
        .with_retries(0)
        .with_debug(debug);
    if let Scenario::SlowWithRetry = scenario {
        config = config.with_timeout_ms(50).with_retries(1);
    }

    let result = MtaaniClient::new(config).unwrap().business().get().await;
    server.verify().await;
    match result {
        Ok(business) => Outcome::Business(business.name),
        Err(err) => Outcome::Failed {
            kind: kind(&err),
            status: err.status(),
            message: err.message(),
        },
    }
}

#[tokio::test]
async fn debug_flag_does_not_change_outcomes() {
    let _guard = capture_debug_events();
    for scenario in [
        Scenario::Ok,
        Scenario::NotFound,
        Scenario::SlowWithRetry,
        Scenario::NoData,
    ] {
        let quiet = run(scenario, false).await;
        let logged = run(scenario, true).await;
        assert_eq!(quiet, logged, "{scenario:?}");
    }
}

#[tokio::test]
async fn debug_run_outcomes_match_the_plain_error_mapping() {
    let _guard = capture_debug_events();
    assert_eq!(
        run(Scenario::Ok, true).await,
        Outcome::Business("Duka La Mama".into())
    );
    assert_eq!(
        run(Scenario::NotFound, true).await,
        Outcome::Failed {
            kind: "not_found",
            status: Some(404),
            message: "Business not found".into(),
        }
    );
    assert!(matches!(
        run(Scenario::SlowWithRetry, true).await,
        Outcome::Failed { kind: "timeout", status: None, .. }
    ));
    assert!(matches!(
        run(Scenario::NoData, true).await,
        Outcome::Failed { kind: "missing_data", .. }
    ));
}
