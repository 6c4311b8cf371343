//! Scripted in-memory driver for exercising the suite logic in tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::driver::traits::{BrowserDriver, Selector};

/// Static page state the fake driver serves answers from.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub url: String,
    pub present: HashSet<Selector>,
    pub visible: HashSet<Selector>,
    pub texts: HashMap<Selector, String>,
}

impl PageState {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// A page exposing the reference login form controls.
    pub fn login_form(url: &str) -> Self {
        Self::new(url)
            .with_present(Selector::id("username"))
            .with_present(Selector::id("password"))
            .with_present(Selector::id("submit"))
    }

    pub fn with_present(mut self, selector: Selector) -> Self {
        self.present.insert(selector);
        self
    }

    pub fn with_visible(mut self, selector: Selector) -> Self {
        self.present.insert(selector.clone());
        self.visible.insert(selector);
        self
    }

    pub fn with_text(mut self, selector: Selector, text: &str) -> Self {
        self.present.insert(selector.clone());
        self.texts.insert(selector, text.to_string());
        self
    }
}

#[derive(Debug, Default)]
struct FakeState {
    current: PageState,
    submitted: bool,
    fills: Vec<(Selector, String)>,
    navigations: Vec<String>,
    screenshots: Vec<PathBuf>,
}

/// Scripted [`BrowserDriver`]: serves one page state before the submit
/// control is clicked and optionally a different one after it.
pub struct FakeDriver {
    landing: PageState,
    after_submit: Option<PageState>,
    fail_navigation: bool,
    fail_queries: bool,
    state: Mutex<FakeState>,
}

impl FakeDriver {
    pub fn new(landing: PageState) -> Self {
        Self {
            state: Mutex::new(FakeState {
                current: landing.clone(),
                ..Default::default()
            }),
            landing,
            after_submit: None,
            fail_navigation: false,
            fail_queries: false,
        }
    }

    /// Page state the driver switches to once the submit control is clicked.
    pub fn with_after_submit(mut self, page: PageState) -> Self {
        self.after_submit = Some(page);
        self
    }

    pub fn failing_navigation(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    /// Make the read-only page queries (`current_url`, `is_visible`,
    /// `has_visible`, `element_text`) return errors, as a driver whose
    /// page context got torn down mid-run would.
    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.lock().unwrap().navigations.clone()
    }

    pub fn fills(&self) -> Vec<(Selector, String)> {
        self.state.lock().unwrap().fills.clone()
    }

    pub fn screenshots(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().screenshots.clone()
    }
}

#[async_trait]
impl BrowserDriver for FakeDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        if self.fail_navigation {
            anyhow::bail!("net::ERR_CONNECTION_REFUSED at {}", url);
        }
        let mut state = self.state.lock().unwrap();
        state.navigations.push(url.to_string());
        // Re-navigation resets the page to the landing state.
        state.current = self.landing.clone();
        state.submitted = false;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        if self.fail_queries {
            anyhow::bail!("page context was destroyed");
        }
        Ok(self.state.lock().unwrap().current.url.clone())
    }

    async fn is_present(&self, selector: &Selector) -> Result<bool> {
        Ok(self.state.lock().unwrap().current.present.contains(selector))
    }

    async fn is_visible(&self, selector: &Selector) -> Result<bool> {
        if self.fail_queries {
            anyhow::bail!("page context was destroyed");
        }
        Ok(self.state.lock().unwrap().current.visible.contains(selector))
    }

    async fn has_visible(&self, selector: &Selector) -> Result<bool> {
        self.is_visible(selector).await
    }

    async fn element_text(&self, selector: &Selector) -> Result<String> {
        if self.fail_queries {
            anyhow::bail!("page context was destroyed");
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .current
            .texts
            .get(selector)
            .cloned()
            .unwrap_or_default())
    }

    async fn clear_and_fill(&self, selector: &Selector, text: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.current.present.contains(selector) {
            anyhow::bail!("Element not found for fill: {}", selector);
        }
        state.fills.push((selector.clone(), text.to_string()));
        Ok(())
    }

    async fn click(&self, selector: &Selector) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.current.present.contains(selector) {
            anyhow::bail!("Element not found for click: {}", selector);
        }
        if *selector == Selector::id("submit") && !state.submitted {
            state.submitted = true;
            if let Some(ref after) = self.after_submit {
                state.current = after.clone();
            }
        }
        Ok(())
    }

    async fn take_screenshot(&self, path: &Path) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .screenshots
            .push(path.to_path_buf());
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.current = PageState::new("about:blank");
        Ok(())
    }
}
