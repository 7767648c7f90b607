//! End-to-end tests against a real listener.

use std::time::Duration;

use request_inspector::report::EnvSnapshot;
use serde_json::{json, Value};

mod common;

const TOP_LEVEL_KEYS: [&str; 9] = [
    "headers",
    "environment",
    "request",
    "cloudflare",
    "traefik",
    "remoteInfo",
    "serverInfo",
    "tls",
    "cookies",
];

async fn fetch_report(req: reqwest::RequestBuilder) -> Value {
    let res = req.send().await.expect("inspector unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    res.json().await.unwrap()
}

#[tokio::test]
async fn test_report_over_plain_http() {
    let server = common::start_inspector(EnvSnapshot::from_pairs([
        ("API_TOKEN", "sk_live_12345"),
        ("SERVER_SOFTWARE", "inspector-test"),
        ("HOME", "/home/app"),
    ]))
    .await;
    let client = common::client();

    let report = fetch_report(
        client
            .get(server.url("/api/debug-info?trace=1"))
            .header("Cookie", "session=abc123; theme=dark")
            .header("CF-Connecting-IP", "1.2.3.4")
            .header("X-Forwarded-For", "203.0.113.9")
            .header("User-Agent", "inspector-tests/1.0")
            .header("Referer", "https://origin.example.test/"),
    )
    .await;

    for key in TOP_LEVEL_KEYS {
        assert!(report.get(key).is_some(), "missing {key}");
    }

    // Headers: everything but Cookie and Host.
    assert!(report["headers"].get("Cookie").is_none());
    assert!(report["headers"].get("Host").is_none());
    assert_eq!(report["headers"]["User-Agent"], "inspector-tests/1.0");

    // Environment masking and the unmasked SERVER_SOFTWARE.
    assert_eq!(report["environment"]["API_TOKEN"], "XXXXXXXXXXXXX");
    assert_eq!(report["environment"]["HOME"], "/home/app");
    assert_eq!(report["serverInfo"]["ServerSoftware"], "inspector-test");
    assert_eq!(report["serverInfo"]["ServerProtocol"], "HTTP/1.1");

    // Request line and peer.
    assert_eq!(report["request"]["Method"], "GET");
    assert_eq!(report["request"]["RequestURI"], "/api/debug-info?trace=1");
    assert_eq!(report["request"]["Host"], server.addr.to_string());
    let remote = report["request"]["RemoteAddr"].as_str().unwrap();
    assert!(remote.starts_with("127.0.0.1:"), "remote addr {remote}");
    assert_eq!(report["remoteInfo"]["RemoteAddr"], remote);
    assert_eq!(report["remoteInfo"]["Referer"], "https://origin.example.test/");

    // Proxy metadata.
    assert_eq!(report["cloudflare"], json!({ "Cf-Connecting-Ip": "1.2.3.4" }));
    let traefik = report["traefik"].as_object().unwrap();
    assert_eq!(traefik.len(), 10);
    assert_eq!(traefik["X-Forwarded-For"], "203.0.113.9");
    assert_eq!(traefik["X-Real-IP"], "");

    // Plain HTTP.
    assert_eq!(report["tls"], json!({ "TLS": "Not used" }));

    // Cookies in order, session masked.
    let cookies = report["cookies"].as_array().unwrap();
    assert_eq!(cookies.len(), 2);
    assert_eq!(cookies[0]["Name"], "session");
    assert_eq!(cookies[0]["Value"], "XXXXXX");
    assert_eq!(cookies[1]["Name"], "theme");
    assert_eq!(cookies[1]["Value"], "dark");
    assert_eq!(cookies[1]["Expires"], "Not set");
    assert_eq!(cookies[1]["SameSite"], "Not set");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_minimal_request_has_every_section() {
    let server = common::start_inspector(EnvSnapshot::default()).await;

    let report = fetch_report(common::client().get(server.url("/api/debug-info"))).await;

    for key in TOP_LEVEL_KEYS {
        assert!(report.get(key).is_some(), "missing {key}");
    }
    assert_eq!(report["environment"], json!({}));
    assert_eq!(report["cookies"], json!([]));
    assert_eq!(report["cloudflare"], json!({}));
    assert_eq!(report["serverInfo"]["ServerSoftware"], "");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_front_page() {
    let server = common::start_inspector(EnvSnapshot::default()).await;

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(res.text().await.unwrap().contains("Request Inspector"));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = common::start_inspector(EnvSnapshot::default()).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = server.url("/api/debug-info");
        tasks.push(tokio::spawn(async move {
            let report = fetch_report(
                client
                    .get(url)
                    .header("Cookie", format!("theme=t{i}; auth=secret{i}")),
            )
            .await;
            (i, report)
        }));
    }

    for task in tasks {
        let (i, report) = task.await.unwrap();
        let cookies = report["cookies"].as_array().unwrap();
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0]["Value"], format!("t{i}"));
        assert_eq!(
            cookies[1]["Value"].as_str().unwrap().len(),
            format!("secret{i}").len()
        );
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_inspector(EnvSnapshot::default()).await;

    // Make sure the server is serving before stopping it.
    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.task)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
