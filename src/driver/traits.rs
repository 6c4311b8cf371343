use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Selector for page elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Select by element id
    Id(String),
    /// Select by CSS selector
    Css(String),
    /// Select by CSS class name
    ClassName(String),
    /// Select by visible link text
    LinkText(String),
}

impl Selector {
    pub fn id(id: &str) -> Self {
        Selector::Id(id.to_string())
    }

    pub fn css(css: &str) -> Self {
        Selector::Css(css.to_string())
    }

    pub fn class_name(class: &str) -> Self {
        Selector::ClassName(class.to_string())
    }

    pub fn link_text(text: &str) -> Self {
        Selector::LinkText(text.to_string())
    }

    /// Convert to a Playwright selector string
    pub fn to_playwright(&self) -> String {
        match self {
            Selector::Id(id) => format!("#{}", id),
            Selector::Css(css) => css.clone(),
            Selector::ClassName(class) => format!(".{}", class),
            Selector::LinkText(text) => format!("a:text(\"{}\")", text),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_playwright())
    }
}

/// Capability seam over the external browser-automation collaborator.
///
/// The executor, locator and classifier only ever see this trait, so the
/// suite logic can be exercised against a scripted page state in tests
/// while production runs drive a real Playwright browser.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Navigate the page to a URL
    async fn goto(&self, url: &str) -> Result<()>;

    /// Current page URL
    async fn current_url(&self) -> Result<String>;

    /// Whether at least one matching element exists in the DOM
    async fn is_present(&self, selector: &Selector) -> Result<bool>;

    /// Whether the first matching element is visible
    async fn is_visible(&self, selector: &Selector) -> Result<bool>;

    /// Whether any matching element is visible
    async fn has_visible(&self, selector: &Selector) -> Result<bool>;

    /// Text content of the first matching element, empty string if absent
    async fn element_text(&self, selector: &Selector) -> Result<String>;

    /// Clear an input and type a value into it
    async fn clear_and_fill(&self, selector: &Selector, text: &str) -> Result<()>;

    /// Click an element
    async fn click(&self, selector: &Selector) -> Result<()>;

    /// Save a screenshot of the current page
    async fn take_screenshot(&self, path: &Path) -> Result<()>;

    /// Return the page to a neutral blank state. Safe to call repeatedly.
    async fn reset(&self) -> Result<()>;
}
