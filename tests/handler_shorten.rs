mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

fn server() -> TestServer {
    TestServer::new(common::api_router(common::create_test_state())).unwrap()
}

#[tokio::test]
async fn test_shorten_first_url_gets_id_one() {
    let server = server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "http://www.example.com")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original_url": "http://www.example.com",
        "short_url": 1
    }));
}

#[tokio::test]
async fn test_shorten_sequence_and_dedup() {
    let server = server();

    let first = server
        .post("/api/shorturl")
        .form(&[("url", "http://www.example.com")])
        .await
        .json::<Value>();
    let second = server
        .post("/api/shorturl")
        .form(&[("url", "http://www.freecodecamp.org")])
        .await
        .json::<Value>();
    let again = server
        .post("/api/shorturl")
        .form(&[("url", "http://www.example.com")])
        .await
        .json::<Value>();

    assert_eq!(first["short_url"], 1);
    assert_eq!(second["short_url"], 2);
    assert_eq!(again["short_url"], 1);
    assert_eq!(again["original_url"], "http://www.example.com");
}

#[tokio::test]
async fn test_shorten_exact_match_only() {
    let server = server();

    let plain = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com")])
        .await
        .json::<Value>();
    let slash = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com/")])
        .await
        .json::<Value>();

    assert_eq!(plain["short_url"], 1);
    assert_eq!(slash["short_url"], 2);
}

#[tokio::test]
async fn test_shorten_malformed_url() {
    let server = server();

    for bad in ["ftp://example.com", "example.com", "http://exa mple.com", ""] {
        let response = server.post("/api/shorturl").form(&[("url", bad)]).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "invalid url" }));
    }
}

#[tokio::test]
async fn test_shorten_unresolvable_host() {
    let server = server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://no-such-host.invalid/path")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let server = server();

    let response = server
        .post("/api/shorturl")
        .form(&[("link", "https://example.com")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_non_form_body() {
    let server = server();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_rejected_submission_consumes_no_id() {
    let server = server();

    server
        .post("/api/shorturl")
        .form(&[("url", "not a url")])
        .await;

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com")])
        .await;

    assert_eq!(response.json::<Value>()["short_url"], 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_shorten_postgres_sequence(pool: PgPool) {
    let server = TestServer::new(common::api_router(common::create_pg_test_state(pool))).unwrap();

    let first = server
        .post("/api/shorturl")
        .form(&[("url", "http://www.example.com")])
        .await
        .json::<Value>();
    let second = server
        .post("/api/shorturl")
        .form(&[("url", "http://www.freecodecamp.org")])
        .await
        .json::<Value>();
    let again = server
        .post("/api/shorturl")
        .form(&[("url", "http://www.example.com")])
        .await
        .json::<Value>();

    assert_eq!(first["short_url"], 1);
    assert_eq!(second["short_url"], 2);
    assert_eq!(again["short_url"], 1);
}
