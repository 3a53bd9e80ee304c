//! Editor documents: the node model, the HTML renderer and plain-text extraction.

pub mod html;
pub mod node;
pub mod plain;

pub use html::{escape_html, render_nodes, render_to_html, render_value, RenderOptions};
pub use node::{Document, Node, NodeKind, TextFormat};
pub use plain::{extract_text, strip_tags};
