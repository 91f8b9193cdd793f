use e2e::test_server::TestServer;

#[tokio::test]
#[ignore = "spawns the web server with cargo run; run with --ignored"]
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
        body.contains("Vidscroll") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
#[ignore = "spawns the web server with cargo run; run with --ignored"]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(format!("{}/api/health", server.url()))
        .await
        .expect("Failed to reach health endpoint");
    assert!(response.status().is_success());
}
