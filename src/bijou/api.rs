//! # API Facade
//!
//! The single entry point for bijou operations, whatever the client. It
//! normalizes raw inputs (karat strings from forms, metal payloads as JSON
//! text, the escaping choice) into typed values and dispatches to the command
//! modules, returning structured [`CmdResult`]s.
//!
//! The facade performs no terminal I/O and reads no files: callers hand it the
//! contents they already hold.

use crate::commands;
use crate::config::BijouConfig;
use crate::error::Result;
use crate::metal::{load_metals, Karat};
use crate::richtext::RenderOptions;
use std::path::{Path, PathBuf};

pub struct BijouApi {
    config_dir: PathBuf,
    config: BijouConfig,
}

impl BijouApi {
    /// Loads the configuration stored in `config_dir` (defaults when absent).
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        let config = BijouConfig::load(&config_dir)?;
        Ok(Self { config_dir, config })
    }

    pub fn with_config(config_dir: impl Into<PathBuf>, config: BijouConfig) -> Self {
        Self {
            config_dir: config_dir.into(),
            config,
        }
    }

    /// HTML for a description. `escape` overrides the configured default.
    pub fn render_description(&self, source: &str, escape: Option<bool>) -> Result<CmdResult> {
        let options = RenderOptions {
            escape_html: escape.unwrap_or(self.config.escape_html),
        };
        commands::render::run(source, options)
    }

    /// Plain text of a description. A `width`, or `preview` alone (which uses
    /// the configured width), truncates the text.
    pub fn plain_text(&self, source: &str, width: Option<usize>, preview: bool) -> Result<CmdResult> {
        let width = match width {
            Some(w) => Some(w),
            None if preview => Some(self.config.preview_width),
            None => None,
        };
        commands::text::run(source, width)
    }

    pub fn price(
        &self,
        metals_json: &str,
        metal: Option<&str>,
        karat: &str,
        base_price: f64,
    ) -> Result<CmdResult> {
        let karat: Karat = karat.parse()?;
        let metals = load_metals(metals_json)?;
        commands::price::run(&metals, metal, karat, base_price)
    }

    pub fn price_table(
        &self,
        metals_json: &str,
        metal: Option<&str>,
        base_price: f64,
        active_only: bool,
    ) -> Result<CmdResult> {
        let metals = load_metals(metals_json)?;
        commands::levels::run(&metals, metal, base_price, active_only)
    }

    pub fn check_metals(&self, metals_json: &str) -> Result<CmdResult> {
        let metals = load_metals(metals_json)?;
        commands::check::run(&metals)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &BijouConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
