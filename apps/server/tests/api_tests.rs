use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use stakebook_server::{api::app_router, build_state, config::Config, AppState};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    state: Arc<AppState>,
    _dir: TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempdir().unwrap();
    let config = Config {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        db_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        jwt_secret: b"0123456789abcdef0123456789abcdef".to_vec(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
    };
    let state = build_state(&config).await.unwrap();
    let router = app_router(state.clone(), &config);
    TestApp {
        router,
        state,
        _dir: dir,
    }
}

impl TestApp {
    fn token(&self, owner: &str) -> String {
        self.state.auth.issue_token(owner).unwrap()
    }

    async fn call(
        &self,
        method: Method,
        uri: &str,
        owner: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(owner) = owner {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", self.token(owner)));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal as string")).unwrap()
}

async fn create_bankroll(app: &TestApp, owner: &str, name: &str, initial: &str) -> String {
    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/bankrolls",
            Some(owner),
            Some(json!({ "name": name, "initialBalance": initial })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_healthz_needs_no_token() {
    let app = spawn_app().await;
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_routes_reject_missing_or_bad_tokens() {
    let app = spawn_app().await;
    let (status, body) = app.call(Method::GET, "/api/v1/bankrolls", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["retryable"], json!(false));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/bankrolls")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wager_lifecycle_updates_bankroll_balance() {
    let app = spawn_app().await;
    let bankroll_id = create_bankroll(&app, "alice", "Main", "1000").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/wagers",
            Some("alice"),
            Some(json!({
                "bankrollId": bankroll_id,
                "stake": "100",
                "odds": "2.5",
                "outcome": "won",
                "settlementDate": "2025-03-01",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal(&body["bankrollBalance"]), dec!(1150));
    assert_eq!(decimal(&body["wager"]["profit"]), dec!(150));
    let wager_id = body["wager"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .call(
            Method::PUT,
            &format!("/api/v1/wagers/{}/outcome", wager_id),
            Some("alice"),
            Some(json!({ "outcome": "lost" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["bankrollBalance"]), dec!(900));

    let (status, body) = app
        .call(
            Method::PATCH,
            &format!("/api/v1/wagers/{}", wager_id),
            Some("alice"),
            Some(json!({ "stake": "40", "note": "halved" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["bankrollBalance"]), dec!(960));
    assert_eq!(body["wager"]["note"], json!("halved"));

    let (status, body) = app
        .call(
            Method::GET,
            &format!("/api/v1/bankrolls/{}/verify", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["consistent"], json!(true));

    let (status, body) = app
        .call(
            Method::DELETE,
            &format!("/api/v1/wagers/{}", wager_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["bankrollBalance"]), dec!(1000));

    let (status, body) = app
        .call(
            Method::GET,
            &format!("/api/v1/bankrolls/{}", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["currentBalance"]), dec!(1000));

    let (status, body) = app
        .call(
            Method::POST,
            &format!("/api/v1/bankrolls/{}/reconcile", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["currentBalance"]), dec!(1000));
}

#[tokio::test]
async fn test_invalid_input_is_a_bad_request() {
    let app = spawn_app().await;
    let bankroll_id = create_bankroll(&app, "alice", "Main", "50").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/wagers",
            Some("alice"),
            Some(json!({
                "bankrollId": bankroll_id,
                "stake": "0",
                "odds": "2",
                "settlementDate": "2025-03-01",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("stake"));

    let (status, _) = app
        .call(
            Method::POST,
            "/api/v1/bankrolls",
            Some("alice"),
            Some(json!({ "name": "Neg", "initialBalance": "-1" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(
            Method::GET,
            &format!("/api/v1/bankrolls/{}/wagers?page=0", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/wagers",
            Some("alice"),
            Some(json!({
                "bankrollId": bankroll_id,
                "stake": Decimal::MAX.to_string(),
                "odds": "2",
                "outcome": "won",
                "settlementDate": "2025-03-01",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["retryable"], json!(false));

    // the rejected write leaves the store usable
    let (status, body) = app
        .call(
            Method::POST,
            "/api/v1/wagers",
            Some("alice"),
            Some(json!({
                "bankrollId": bankroll_id,
                "stake": "5",
                "odds": "2",
                "outcome": "won",
                "settlementDate": "2025-03-01",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(decimal(&body["bankrollBalance"]), dec!(55));

    let (status, _) = app
        .call(
            Method::GET,
            &format!("/api/v1/bankrolls/{}/wagers?outcome=void", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(
            Method::GET,
            &format!("/api/v1/bankrolls/{}/stats?date=03-01-2025", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_owners_see_not_found() {
    let app = spawn_app().await;
    let bankroll_id = create_bankroll(&app, "alice", "Main", "100").await;
    let path = format!("/api/v1/bankrolls/{}", bankroll_id);

    let (status, _) = app.call(Method::GET, &path, Some("bob"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.call(Method::DELETE, &path, Some("bob"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .call(
            Method::POST,
            "/api/v1/wagers",
            Some("bob"),
            Some(json!({
                "bankrollId": bankroll_id,
                "stake": "10",
                "odds": "2",
                "settlementDate": "2025-03-01",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.call(Method::GET, "/api/v1/bankrolls", Some("bob"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = app.call(Method::DELETE, &path, Some("alice"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.call(Method::GET, &path, Some("alice"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_history_and_stats_reflect_wagers() {
    let app = spawn_app().await;
    let bankroll_id = create_bankroll(&app, "alice", "Main", "1000").await;

    for i in 0..12 {
        let outcome = match i % 3 {
            0 => "won",
            1 => "lost",
            _ => "open",
        };
        let day = if i < 4 { "2025-03-01" } else { "2025-03-02" };
        let (status, _) = app
            .call(
                Method::POST,
                "/api/v1/wagers",
                Some("alice"),
                Some(json!({
                    "bankrollId": bankroll_id,
                    "stake": "10",
                    "odds": "2",
                    "outcome": outcome,
                    "settlementDate": day,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let history = format!("/api/v1/bankrolls/{}/wagers", bankroll_id);
    let (status, body) = app.call(Method::GET, &history, Some("alice"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(12));
    assert_eq!(body["pageCount"], json!(2));
    assert_eq!(body["wagers"].as_array().unwrap().len(), 10);
    assert_eq!(body["wagers"][0]["settlementDate"], json!("2025-03-02"));

    let (_, body) = app
        .call(Method::GET, &format!("{}?page=2", history), Some("alice"), None)
        .await;
    assert_eq!(body["wagers"].as_array().unwrap().len(), 2);

    let (status, body) = app
        .call(
            Method::GET,
            &format!("{}?page={}", history, i64::MAX),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wagers"], json!([]));
    assert_eq!(body["total"], json!(12));

    let (_, body) = app
        .call(Method::GET, &format!("{}?outcome=won", history), Some("alice"), None)
        .await;
    assert_eq!(body["total"], json!(4));
    assert!(body["wagers"]
        .as_array()
        .unwrap()
        .iter()
        .all(|w| w["outcome"] == json!("won")));

    let (status, body) = app
        .call(
            Method::GET,
            &format!("/api/v1/bankrolls/{}/stats?date=2025-03-01", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    // i = 0..4 on the first day: won, lost, open, won.
    assert_eq!(body["count"], json!(4));
    assert_eq!(body["wonCount"], json!(2));
    assert_eq!(body["lostCount"], json!(1));
    assert_eq!(body["openCount"], json!(1));
    assert_eq!(decimal(&body["netProfit"]), dec!(10));

    let (_, body) = app
        .call(
            Method::GET,
            &format!("/api/v1/bankrolls/{}/stats?date=2024-01-01", bankroll_id),
            Some("alice"),
            None,
        )
        .await;
    assert_eq!(body["count"], json!(0));
    assert_eq!(decimal(&body["netProfit"]), Decimal::ZERO);
}
