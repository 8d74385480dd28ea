//! End-to-end tests for the evaluation service.
//!
//! Wires up the built-in rule set from default configuration values, serves
//! it on an ephemeral port, and exercises the `Evaluate` contract over a
//! real socket, including many concurrent callers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use rev_core::config::{
    CountryRuleConfig, DomainListRuleConfig, NumericLocalPartConfig, RulesConfig,
    SignupVelocityConfig, TldListRuleConfig, TrustedDomainConfig,
};
use rev_core::types::{RiskEvaluationReply, RiskEvaluationRequest, RiskLevel};
use rev_risk::{rules, Evaluator, NoopSink};
use rev_service::{evaluator_router, serve};

fn rules_config() -> RulesConfig {
    RulesConfig {
        disposable_domain: DomainListRuleConfig {
            domains: vec!["mailinator.com".to_string()],
            weight: 15,
        },
        high_risk_tld: TldListRuleConfig {
            tlds: vec!["xyz".to_string()],
            weight: 5,
        },
        numeric_local_part: NumericLocalPartConfig {
            min_digits: 6,
            weight: 3,
        },
        country: CountryRuleConfig {
            countries: vec!["KP".to_string()],
            weight: 10,
        },
        signup_velocity: SignupVelocityConfig {
            threshold: 0,
            weight_per_signup: 1,
            cap: 1_000,
        },
        trusted_domain: TrustedDomainConfig {
            domains: vec!["partner.example".to_string()],
            credit: -5,
        },
    }
}

fn evaluator() -> Arc<Evaluator> {
    Arc::new(Evaluator::new(rules::from_config(&rules_config())).with_sink(NoopSink))
}

/// Start the server on an ephemeral port and return its base URL.
async fn start_server(cancel: CancellationToken) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, evaluator(), cancel));
    format!("http://{addr}")
}

#[tokio::test]
async fn test_evaluate_over_http() {
    let cancel = CancellationToken::new();
    let base = start_server(cancel.clone()).await;
    let client = reqwest::Client::new();

    let cases = [
        (RiskEvaluationRequest::new("alice@example.com"), RiskLevel::Low),
        (RiskEvaluationRequest::new("bot@mailinator.com"), RiskLevel::Medium),
        (
            RiskEvaluationRequest::new("user83920174@mailinator.com").with_attribute("country", "KP"),
            RiskLevel::High,
        ),
    ];

    for (request, expected) in cases {
        let resp = client
            .post(format!("{base}/evaluate"))
            .header("baggage", "client.Id=e2e")
            .json(&request)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let reply: RiskEvaluationReply = resp.json().await.unwrap();
        assert_eq!(reply.risk_level, expected, "email {}", request.email);
    }

    let health = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);

    cancel.cancel();
}

#[tokio::test]
async fn test_record_without_email_over_http() {
    let cancel = CancellationToken::new();
    let base = start_server(cancel.clone()).await;
    let client = reqwest::Client::new();

    // Unknown fields are ignored and a missing email is neutral.
    let resp = client
        .post(format!("{base}/evaluate"))
        .header("content-type", "application/json")
        .body(r#"{"mail":"typo@example.com"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let reply: RiskEvaluationReply = resp.json().await.unwrap();
    assert_eq!(reply.risk_level, RiskLevel::Low);

    let resp = client
        .post(format!("{base}/evaluate"))
        .header("content-type", "application/json")
        .body(r#"{"attributes":{"country":"KP"}}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let reply: RiskEvaluationReply = resp.json().await.unwrap();
    assert_eq!(reply.risk_level, RiskLevel::Medium);

    cancel.cancel();
}

#[tokio::test]
async fn test_malformed_request_over_http() {
    let cancel = CancellationToken::new();
    let base = start_server(cancel.clone()).await;
    let client = reqwest::Client::new();

    for body in ["{not json", r#"["typo@example.com"]"#] {
        let resp = client
            .post(format!("{base}/evaluate"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST, "body {body}");
    }

    cancel.cancel();
}

#[tokio::test]
async fn test_server_stops_on_cancel() {
    let cancel = CancellationToken::new();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let handle = tokio::spawn(serve(listener, evaluator(), cancel.clone()));

    cancel.cancel();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .expect("server did not shut down")
        .unwrap();
    assert!(result.is_ok());
}

/// Each caller sends a distinct sign-up count; with `threshold = 0` and
/// `weight_per_signup = 1` the score equals the count, so every reply can be
/// checked against its own request.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_do_not_cross_talk() {
    let app = evaluator_router(evaluator());

    let tasks: Vec<_> = (0..200u32)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let count = i % 40;
                let request = RiskEvaluationRequest::new(format!("user{i}@example.com"))
                    .with_attribute("signups_last_hour", count.to_string());
                let req = Request::builder()
                    .method("POST")
                    .uri("/evaluate")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&request).unwrap()))
                    .unwrap();

                let resp = app.oneshot(req).await.unwrap();
                assert_eq!(resp.status(), StatusCode::OK);
                let body = resp.into_body().collect().await.unwrap().to_bytes();
                let reply: RiskEvaluationReply = serde_json::from_slice(&body).unwrap();
                (count, reply.risk_level)
            })
        })
        .collect();

    for task in tasks {
        let (count, level) = task.await.unwrap();
        assert_eq!(level, RiskLevel::from_score(i64::from(count)), "count {count}");
    }
}
