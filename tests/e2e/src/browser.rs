use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| anyhow::anyhow!("invalid launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }

    /// Poll until the current URL ends with `suffix`.
    pub fn wait_for_url_suffix(&self, suffix: &str, timeout: Duration) -> Result<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let url = self.url()?;
            if url.ends_with(suffix) {
                return Ok(url);
            }
            if Instant::now() >= deadline {
                anyhow::bail!("url {url} does not end with {suffix}");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }

    /// Number of elements currently matching `selector`.
    pub fn count(&self, selector: &str) -> Result<u64> {
        let js = format!(
            "document.querySelectorAll({}).length",
            serde_json::to_string(selector)?
        );
        let result = self.tab.evaluate(&js, false)?;
        Ok(result.value.and_then(|v| v.as_u64()).unwrap_or(0))
    }

    /// Scroll the element matching `selector` all the way down.
    pub fn scroll_to_bottom(&self, selector: &str) -> Result<()> {
        let js = format!(
            "(function(){{ const el = document.querySelector({}); if (!el) return false; el.scrollTop = el.scrollHeight; return true; }})()",
            serde_json::to_string(selector)?
        );
        self.tab.evaluate(&js, false)?;
        Ok(())
    }

    /// Poll until `selector` matches more than `min` elements.
    pub fn wait_for_count_above(&self, selector: &str, min: u64, timeout: Duration) -> Result<u64> {
        let deadline = Instant::now() + timeout;
        loop {
            let n = self.count(selector)?;
            if n > min {
                return Ok(n);
            }
            if Instant::now() >= deadline {
                anyhow::bail!("{selector} stayed at {n} (wanted more than {min})");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }
}
