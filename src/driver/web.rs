//! Web driver implementation using Playwright.
//!
//! Owns one Playwright chromium session for the lifetime of a suite run.
//! Teardown is tied to ownership: dropping the driver releases the
//! browser on every exit path, so a fatal error cannot leak a browser
//! process.

use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use playwright::api::{Browser, BrowserContext, Page, Viewport};
use playwright::Playwright;
use std::path::Path;
use tokio::sync::Mutex;

use crate::driver::traits::{BrowserDriver, Selector};
use crate::error::HarnessError;

/// Web driver configuration
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Pass the sandbox-disabling launch flags (needed in containers)
    pub disable_sandbox: bool,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        let headless = std::env::var("LOGIN_TESTER_HEADLESS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        Self {
            headless,
            viewport_width: 1920,
            viewport_height: 1080,
            disable_sandbox: true,
        }
    }
}

impl WebDriverConfig {
    fn launch_args(&self) -> Vec<String> {
        let mut args = vec!["--disable-gpu".to_string()];
        if self.disable_sandbox {
            args.push("--no-sandbox".to_string());
            args.push("--disable-setuid-sandbox".to_string());
            args.push("--disable-dev-shm-usage".to_string());
        }
        args
    }
}

/// Browser session backed by Playwright
pub struct WebDriver {
    #[allow(dead_code)]
    playwright: Playwright,
    #[allow(dead_code)]
    browser: Browser,
    #[allow(dead_code)]
    context: BrowserContext,
    page: Mutex<Page>,
}

impl WebDriver {
    /// Launch a browser and open one page.
    ///
    /// Any failure here is a `HarnessError::SessionInit`; nothing can
    /// run without a session, so callers treat it as fatal.
    pub async fn new(config: WebDriverConfig) -> Result<Self> {
        log::info!("launching chromium (headless: {})", config.headless);

        let (playwright, browser, context, page) = Self::launch(&config)
            .await
            .map_err(|e| HarnessError::SessionInit(format!("{:#}", e)))?;

        println!("{} Browser session started", "✅".green());

        Ok(Self {
            playwright,
            browser,
            context,
            page: Mutex::new(page),
        })
    }

    async fn launch(
        config: &WebDriverConfig,
    ) -> Result<(Playwright, Browser, BrowserContext, Page)> {
        let playwright = Playwright::initialize()
            .await
            .context("Failed to initialize Playwright")?;

        let chromium = playwright.chromium();
        let browser = chromium
            .launcher()
            .headless(config.headless)
            .args(&config.launch_args())
            .launch()
            .await
            .context("Failed to launch chromium")?;

        let context = browser.context_builder().build().await?;
        let page = context.new_page().await?;

        page.set_viewport_size(Viewport {
            width: config.viewport_width as i32,
            height: config.viewport_height as i32,
        })
        .await?;

        Ok((playwright, browser, context, page))
    }
}

#[async_trait]
impl BrowserDriver for WebDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        let page = self.page.lock().await;
        page.goto_builder(url)
            .goto()
            .await
            .with_context(|| format!("Failed to navigate to {}", url))?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let page = self.page.lock().await;
        let url: String = page.evaluate("() => location.href", ()).await?;
        Ok(url)
    }

    async fn is_present(&self, selector: &Selector) -> Result<bool> {
        let page = self.page.lock().await;
        Ok(page.query_selector(&selector.to_playwright()).await?.is_some())
    }

    async fn is_visible(&self, selector: &Selector) -> Result<bool> {
        let page = self.page.lock().await;
        match page.query_selector(&selector.to_playwright()).await? {
            Some(el) => Ok(el.is_visible().await?),
            None => Ok(false),
        }
    }

    async fn has_visible(&self, selector: &Selector) -> Result<bool> {
        let page = self.page.lock().await;
        let elements = page.query_selector_all(&selector.to_playwright()).await?;
        for el in elements {
            if el.is_visible().await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn element_text(&self, selector: &Selector) -> Result<String> {
        let page = self.page.lock().await;
        let js = "el => el.innerText || el.textContent || ''";

        match page
            .evaluate_on_selector::<String, _>(&selector.to_playwright(), js, None::<String>)
            .await
        {
            Ok(text) => Ok(text),
            // Selector matched nothing; absence is not a fault here.
            Err(_) => Ok(String::new()),
        }
    }

    async fn clear_and_fill(&self, selector: &Selector, text: &str) -> Result<()> {
        let page = self.page.lock().await;
        let sel = selector.to_playwright();
        match page.query_selector(&sel).await? {
            // fill replaces the current value, which covers the clear step
            Some(el) => el.fill_builder(text).fill().await?,
            None => anyhow::bail!("Element not found for fill: {}", sel),
        }
        Ok(())
    }

    async fn click(&self, selector: &Selector) -> Result<()> {
        let page = self.page.lock().await;
        let sel = selector.to_playwright();
        page.click_builder(&sel)
            .click()
            .await
            .with_context(|| format!("Failed to click: {}", sel))?;
        Ok(())
    }

    async fn take_screenshot(&self, path: &Path) -> Result<()> {
        let page = self.page.lock().await;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        page.screenshot_builder()
            .path(path.to_path_buf())
            .screenshot()
            .await?;
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        let page = self.page.lock().await;
        page.goto_builder("about:blank").goto().await?;
        Ok(())
    }
}
