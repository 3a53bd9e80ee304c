use crate::lenient;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// The node types the renderer understands. Anything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    Heading,
    List,
    ListItem,
    Text,
    Link,
    Unknown,
}

impl FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "list" => NodeKind::List,
            "listitem" => NodeKind::ListItem,
            "text" => NodeKind::Text,
            "link" => NodeKind::Link,
            _ => NodeKind::Unknown,
        })
    }
}

/// Text format bit flags as stored by the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormat(pub u32);

impl TextFormat {
    pub const BOLD: u32 = 1;
    pub const ITALIC: u32 = 1 << 1;
    pub const STRIKETHROUGH: u32 = 1 << 2;
    pub const UNDERLINE: u32 = 1 << 3;

    pub fn contains(self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    pub fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    pub fn is_italic(self) -> bool {
        self.contains(Self::ITALIC)
    }

    pub fn is_underline(self) -> bool {
        self.contains(Self::UNDERLINE)
    }
}

/// One node of an editor document.
///
/// `children` distinguishes "absent" from "empty": an unknown node with an
/// empty child list renders nothing, even when it also carries `text`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Node {
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Option<Vec<Node>>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub tag: Option<String>,

    #[serde(rename = "listType", default, deserialize_with = "lenient::string")]
    pub list_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "lenient::bits")]
    pub format: u32,

    #[serde(default, deserialize_with = "lenient::string")]
    pub style: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.kind
            .as_deref()
            .map(|k| k.parse().unwrap_or(NodeKind::Unknown))
            .unwrap_or(NodeKind::Unknown)
    }

    pub fn text_format(&self) -> TextFormat {
        TextFormat(self.format)
    }

    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// A text run with the given content.
    pub fn text_run(text: impl Into<String>) -> Self {
        Self {
            kind: Some("text".to_string()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// An element node of the given type.
    pub fn element(kind: &str, children: Vec<Node>) -> Self {
        Self {
            kind: Some(kind.to_string()),
            children: Some(children),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: u32) -> Self {
        self.format = format;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_list_type(mut self, list_type: impl Into<String>) -> Self {
        self.list_type = Some(list_type.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

// Non-object entries cannot be nodes and are skipped. A non-array value counts as absent.
fn lenient_children<'de, D>(deserializer: D) -> Result<Option<Vec<Node>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(parse_nodes(items)),
        _ => None,
    })
}

fn parse_nodes(items: impl IntoIterator<Item = Value>) -> Vec<Node> {
    items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// An editor document: `{ "root": { "children": [...] } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `None` when `root.children` is present but not an array.
    pub children: Option<Vec<Node>>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children: Some(children),
        }
    }

    /// Recognizes the document shape. A missing or blank `root.children`
    /// means the value is not an editor document.
    pub fn from_value(value: &Value) -> Option<Self> {
        let children = value.get("root")?.get("children")?;
        if lenient::is_blank(children) {
            return None;
        }
        Some(Self {
            children: children
                .as_array()
                .map(|items| parse_nodes(items.iter().cloned())),
        })
    }

    pub fn nodes(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("paragraph".parse::<NodeKind>().unwrap(), NodeKind::Paragraph);
        assert_eq!("listitem".parse::<NodeKind>().unwrap(), NodeKind::ListItem);
        assert_eq!("quote".parse::<NodeKind>().unwrap(), NodeKind::Unknown);
        assert_eq!(Node::default().kind(), NodeKind::Unknown);
    }

    #[test]
    fn test_format_flags() {
        let f = TextFormat(11);
        assert!(f.is_bold());
        assert!(f.is_italic());
        assert!(f.is_underline());
        assert!(!f.contains(TextFormat::STRIKETHROUGH));
        assert!(!TextFormat(4).is_bold());
    }

    #[test]
    fn test_deserialize_editor_node() {
        let node: Node = serde_json::from_value(json!({
            "type": "paragraph",
            "format": "center",
            "indent": 0,
            "children": [
                {"type": "text", "text": "Hi", "format": 1, "style": "color: red"},
                null,
                "stray"
            ]
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::Paragraph);
        assert_eq!(node.format, 0);
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].text.as_deref(), Some("Hi"));
        assert!(node.children()[0].text_format().is_bold());
    }

    #[test]
    fn test_children_absent_vs_empty() {
        let absent: Node = serde_json::from_value(json!({"type": "x"})).unwrap();
        let empty: Node = serde_json::from_value(json!({"type": "x", "children": []})).unwrap();
        assert_eq!(absent.children, None);
        assert_eq!(empty.children, Some(vec![]));
    }

    #[test]
    fn test_document_shape() {
        let doc = Document::from_value(&json!({"root": {"children": [{"type": "text", "text": "a"}]}}))
            .unwrap();
        assert_eq!(doc.nodes().len(), 1);

        assert!(Document::from_value(&json!({"root": {}})).is_none());
        assert!(Document::from_value(&json!({"root": {"children": null}})).is_none());
        assert!(Document::from_value(&json!({"title": "x"})).is_none());

        let odd = Document::from_value(&json!({"root": {"children": {"a": 1}}})).unwrap();
        assert!(odd.nodes().is_empty());
    }
}
