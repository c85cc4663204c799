use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

#[tokio::test]
async fn test_translation_endpoint_local_mode() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/translation", server.url()))
        .header("content-type", "application/json")
        .body(
            serde_json::json!({
                "text": "Hello",
                "source_language": "en",
                "target_language": "fr",
            })
            .to_string(),
        )
        .send()
        .await
        .expect("Failed to call /translation");
    assert!(response.status().is_success());

    let body: serde_json::Value =
        serde_json::from_str(&response.text().await.expect("body")).expect("json body");
    assert_eq!(body["status"], "success");
    assert_eq!(body["translated_text"], "[fr] Hello");
}

#[tokio::test]
async fn test_translation_endpoint_rejects_blank_text() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::Client::new()
        .post(format!("{}/translation", server.url()))
        .header("content-type", "application/json")
        .body(r#"{"text":"   ","source_language":"en","target_language":"fr"}"#)
        .send()
        .await
        .expect("Failed to call /translation");

    let body: serde_json::Value =
        serde_json::from_str(&response.text().await.expect("body")).expect("json body");
    assert_ne!(body["status"], "success");
}

#[tokio::test]
async fn test_translate_button_fills_output() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&format!("{}/translator", server.url()))
        .expect("Failed to navigate");

    page.type_text("#inputText", "Hello").expect("type input");
    assert_eq!(page.find_element("#inputCounter").unwrap(), "5/5000");

    page.click("#translateBtn").expect("click translate");
    let output = page
        .wait_for_value("#outputText", Duration::from_secs(10), |v| !v.is_empty())
        .expect("output filled");
    assert_eq!(output, "[ru] Hello");
    assert_eq!(page.find_element("#outputCounter").unwrap(), "10/5000");

    page.click("#clearBtn").expect("click clear");
    page.wait_for_value("#inputText", Duration::from_secs(5), |v| v.is_empty())
        .expect("input cleared");
    assert_eq!(page.find_element("#inputCounter").unwrap(), "0/5000");
    assert_eq!(page.find_element("#outputCounter").unwrap(), "0/5000");
}
