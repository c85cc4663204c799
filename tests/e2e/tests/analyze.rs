use base64::Engine;
use e2e::test_server::TestServer;

async fn post_cv(server: &TestServer, filename: &str, content: &[u8]) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/analyze", server.url()))
        .header("content-type", "application/json")
        .body(
            serde_json::json!({
                "filename": filename,
                "content_base64": base64::engine::general_purpose::STANDARD.encode(content),
            })
            .to_string(),
        )
        .send()
        .await
        .expect("Failed to call /analyze")
}

#[tokio::test]
async fn test_analyze_text_cv_local_mode() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let cv = "Jane Doe. Backend engineer, six years of Rust, Go and Postgres. ".repeat(3);
    let response = post_cv(&server, "jane.txt", cv.as_bytes()).await;
    assert!(response.status().is_success());

    let body: serde_json::Value =
        serde_json::from_str(&response.text().await.expect("body")).expect("json body");
    assert_eq!(body["status"], "success");
    assert_eq!(body["filename"], "jane.txt");
    assert!(body["analysis"].as_str().unwrap_or_default().contains("local mode"));
}

#[tokio::test]
async fn test_analyze_rejects_bad_uploads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = post_cv(&server, "jane.png", b"\x89PNG").await;
    assert!(!response.status().is_success());
    let body = response.text().await.expect("body");
    assert!(body.contains("Unsupported file type"), "{body}");

    let response = post_cv(&server, "jane.txt", b"too short").await;
    assert!(!response.status().is_success());
    let body = response.text().await.expect("body");
    assert!(body.contains("CV text too short or empty."), "{body}");
}
