use crate::config::BijouConfig;
use crate::error::{BijouError, Result};
use crate::metal::PurityPrice;

pub mod check;
pub mod config;
pub mod levels;
pub mod price;
pub mod render;
pub mod text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub html: Option<String>,
    pub text: Option<String>,
    pub metal: Option<String>,
    pub prices: Vec<PurityPrice>,
    pub config: Option<BijouConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_html(mut self, html: String) -> Self {
        self.html = Some(html);
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_metal(mut self, name: impl Into<String>) -> Self {
        self.metal = Some(name.into());
        self
    }

    pub fn with_prices(mut self, prices: Vec<PurityPrice>) -> Self {
        self.prices = prices;
        self
    }

    pub fn with_config(mut self, config: BijouConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Base prices come from the command line; reject what a form would reject.
pub(crate) fn check_base_price(base_price: f64) -> Result<()> {
    if base_price.is_finite() && base_price >= 0.0 {
        Ok(())
    } else {
        Err(BijouError::Api(format!(
            "Base price must be a non-negative number, got {}",
            base_price
        )))
    }
}
