use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    // Make HTTP request to homepage
    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("Lingva") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(format!("{}/api/health", server.url()))
        .await
        .expect("Failed to fetch health");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_fragments_are_served() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let header = reqwest::get(format!("{}/components/header.html", server.url()))
        .await
        .expect("Failed to fetch header");
    assert!(header.status().is_success());
    let header = header.text().await.expect("header body");
    assert!(header.contains("nav-link"));
    assert!(header.contains("language-option"));

    let footer = reqwest::get(format!("{}/components/footer.html", server.url()))
        .await
        .expect("Failed to fetch footer");
    assert!(footer.status().is_success());
}

#[tokio::test]
async fn test_active_link_follows_route() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/about", server.url()))
        .expect("Failed to navigate");
    let active = page
        .find_element("a.nav-link.active")
        .expect("an active nav link");
    assert_eq!(active.trim(), "About");
    assert_eq!(page.count("a.nav-link.active").unwrap(), 1);

    page.goto(server.url()).expect("Failed to navigate");
    let active = page
        .find_element("a.nav-link.active")
        .expect("an active nav link");
    assert_eq!(active.trim(), "Home");
    assert_eq!(page.count("a.nav-link.active").unwrap(), 1);
}

#[tokio::test]
async fn test_language_menu_switches_language() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&format!("{}/about", server.url()))
        .expect("Failed to navigate");

    page.click(".language-current").expect("open language menu");
    page.click(".language-option:nth-child(2)")
        .expect("pick second language");

    assert_eq!(page.count(".language-menu").unwrap(), 0, "menu closes on select");
    let active = page
        .find_element("a.nav-link.active")
        .expect("an active nav link");
    assert_eq!(active.trim(), "О нас");
}
