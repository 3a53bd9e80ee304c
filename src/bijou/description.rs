//! # Product Descriptions
//!
//! A product's `description` field arrives from the backend in several shapes,
//! depending on which version of the admin form wrote it:
//!
//! - legacy HTML strings (anything containing `<`),
//! - editor documents, either as JSON objects or as JSON encoded in a string,
//! - arbitrary JSON left behind by older imports,
//! - nothing at all.
//!
//! [`Description::from_value`] classifies the field once, and the two views the
//! storefront needs are thin matches over the classification:
//! [`parse_description`] for product pages and [`extract_plain_text`] for cards
//! and listings. Neither ever fails: every problem degrades to a fixed fallback
//! string.

use crate::lenient;
use crate::richtext::{self, Document, RenderOptions};
use serde_json::Value;
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown when a description is missing or unreadable.
pub const NO_DESCRIPTION: &str = "No description available";

/// Plain-text stand-in for descriptions that are JSON but not an editor document.
pub const GENERIC_DESCRIPTION: &str = "Product description";

const ELLIPSIS: char = '…';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("description is not valid JSON (line {line}, column {column}): {message}")]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
    },
}

impl From<serde_json::Error> for DescriptionError {
    fn from(err: serde_json::Error) -> Self {
        DescriptionError::InvalidJson {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Empty,
    Html(String),
    Document(Document),
    Other(Value),
    Malformed(DescriptionError),
}

impl Description {
    pub fn from_value(value: &Value) -> Self {
        if lenient::is_blank(value) {
            return Description::Empty;
        }

        match value {
            Value::String(s) if s.contains('<') => Description::Html(s.clone()),
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(parsed) => Self::classify(parsed),
                Err(err) => {
                    let err = DescriptionError::from(err);
                    tracing::debug!(error = %err, "description degraded to fallback");
                    Description::Malformed(err)
                }
            },
            other => Self::classify(other.clone()),
        }
    }

    /// Classifies raw text, such as a description file's contents. Text that
    /// parses as JSON is classified by its parsed value, so an editor document
    /// whose text holds `<` still renders as a document.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(parsed) => Self::from_value(&parsed),
            Err(_) => Self::from_value(&Value::String(text.to_string())),
        }
    }

    fn classify(value: Value) -> Self {
        match Document::from_value(&value) {
            Some(doc) => Description::Document(doc),
            None => Description::Other(value),
        }
    }

    pub fn to_html(&self, options: RenderOptions) -> String {
        match self {
            Description::Empty | Description::Malformed(_) => NO_DESCRIPTION.to_string(),
            Description::Html(html) => html.clone(),
            Description::Document(doc) => richtext::render_nodes(doc.nodes(), options),
            Description::Other(value) => value.to_string(),
        }
    }

    pub fn plain_text(&self) -> String {
        match self {
            Description::Empty | Description::Malformed(_) => NO_DESCRIPTION.to_string(),
            Description::Html(html) => richtext::strip_tags(html),
            Description::Document(doc) => richtext::extract_text(doc.nodes()).trim().to_string(),
            Description::Other(_) => GENERIC_DESCRIPTION.to_string(),
        }
    }

    /// Plain text cut to `max_width` display columns, ending in `…` when cut.
    pub fn preview(&self, max_width: usize) -> String {
        truncate_to_width(&self.plain_text(), max_width)
    }
}

/// Renders a description field for a product page.
pub fn parse_description(description: &Value) -> String {
    parse_description_with(description, RenderOptions::default())
}

pub fn parse_description_with(description: &Value, options: RenderOptions) -> String {
    Description::from_value(description).to_html(options)
}

/// Plain text of a description field, for cards and search listings.
pub fn extract_plain_text(description: &Value) -> String {
    Description::from_value(description).plain_text()
}

pub fn preview(description: &Value, max_width: usize) -> String {
    Description::from_value(description).preview(max_width)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    let mut result = result.trim_end().to_string();
    result.push(ELLIPSIS);
    result
}
