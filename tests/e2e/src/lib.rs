//! End-to-end helpers: spawn the web server in local mode and drive it with
//! a headless browser.

pub mod browser;
pub mod test_server;
