use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

#[tokio::test]
#[ignore = "needs Chrome and spawns the web server; run with --ignored"]
async fn test_search_page_renders_cards_and_loads_more() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/search/ferris", server.url()))
        .expect("Failed to navigate");

    // Pages of SEARCH_PAGE_SIZE=12; a short list may already have topped up.
    let first = page
        .wait_for_count_above(".result_card", 0, Duration::from_secs(10))
        .expect("cards should render");
    assert_eq!(first % 12, 0);

    let title = page
        .find_element(".result_title")
        .expect("card title should exist");
    assert!(title.chars().count() <= 63);

    page.scroll_to_bottom(".search_results")
        .expect("Failed to scroll");
    let after = page
        .wait_for_count_above(".result_card", first, Duration::from_secs(10))
        .expect("next page should append");
    assert_eq!(after % 12, 0);
}

#[tokio::test]
#[ignore = "needs Chrome and spawns the web server; run with --ignored"]
async fn test_empty_search_shows_no_data() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/search/nothing", server.url()))
        .expect("Failed to navigate");

    let text = page.find_element(".no_data").expect("no-data message");
    assert_eq!(text, "No data available.");
}

#[tokio::test]
#[ignore = "needs Chrome and spawns the web server; run with --ignored"]
async fn test_search_bar_navigates_and_ignores_blank_input() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.url()).expect("Failed to navigate");
    page.find_element(".app_nav .search_bar").expect("search bar");
    // Give the client time to hydrate before driving the form.
    std::thread::sleep(Duration::from_secs(1));

    page.type_text(".app_nav .search_bar input", "   ")
        .expect("Failed to type");
    page.click(".app_nav .search_bar button")
        .expect("Failed to submit");
    std::thread::sleep(Duration::from_millis(500));
    let url = page.url().expect("url");
    assert!(!url.contains("/search/"), "blank query navigated to {url}");

    page.type_text(".app_nav .search_bar input", "crab")
        .expect("Failed to type");
    page.click(".app_nav .search_bar button")
        .expect("Failed to submit");
    page.wait_for_url_suffix("/search/crab", Duration::from_secs(5))
        .expect("search should navigate");

    let first = page
        .wait_for_count_above(".result_card", 0, Duration::from_secs(10))
        .expect("cards should render");
    assert!(first >= 12);
}
