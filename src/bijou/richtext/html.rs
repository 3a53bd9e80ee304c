//! # HTML Rendering
//!
//! Turns editor nodes into the markup the storefront injects into product pages.
//! Rendering is a depth-first walk: each node renders its children and wraps the
//! concatenated result in the element for its type. Siblings are joined with no
//! separator.
//!
//! Text runs are wrapped in a fixed order, bold outermost, then italic, then
//! underline, so `format: 11` yields `<strong><em><u>x</u></em></strong>`. A
//! run whose `style` sets a color is additionally wrapped in a styled `<span>`.
//!
//! By default text, styles and URLs are interpolated verbatim, matching what the
//! storefront has always produced. [`RenderOptions::escape_html`] switches to
//! escaped output for callers that display untrusted documents.

use super::node::{Node, NodeKind};
use serde_json::Value;

const PARAGRAPH_CLASS: &str = "mb-4";
const BULLET_LIST_CLASS: &str = "list-disc ml-6 mb-4";
const NUMBER_LIST_CLASS: &str = "list-decimal ml-6 mb-4";
const LINK_CLASS: &str = "text-blue-600 hover:underline";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub escape_html: bool,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self { escape_html: true }
    }
}

/// Heading levels the renderer emits. Unrecognized tags render as `h1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("h2") => HeadingLevel::H2,
            Some("h3") => HeadingLevel::H3,
            _ => HeadingLevel::H1,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }

    fn class(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "text-3xl font-bold mb-4",
            HeadingLevel::H2 => "text-2xl font-semibold mb-3",
            HeadingLevel::H3 => "text-xl font-medium mb-2",
        }
    }
}

/// Renders root-level nodes with default options.
pub fn render_to_html(nodes: &[Node]) -> String {
    render_nodes(nodes, RenderOptions::default())
}

pub fn render_nodes(nodes: &[Node], options: RenderOptions) -> String {
    let mut out = String::new();
    Renderer { options }.nodes(nodes, &mut out);
    out
}

/// Renders a raw JSON array of nodes. `null` or any non-array value renders as "".
pub fn render_value(value: &Value, options: RenderOptions) -> String {
    match value {
        Value::Array(items) => {
            let nodes: Vec<Node> = items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect();
            render_nodes(&nodes, options)
        }
        _ => String::new(),
    }
}

struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    fn nodes(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.node(node, out);
        }
    }

    fn node(&self, node: &Node, out: &mut String) {
        match node.kind() {
            NodeKind::Paragraph => {
                self.element("p", Some(PARAGRAPH_CLASS), node, out);
            }
            NodeKind::Heading => {
                let level = HeadingLevel::from_tag(node.tag.as_deref());
                self.element(level.tag(), Some(level.class()), node, out);
            }
            NodeKind::List => {
                let (tag, class) = if node.list_type.as_deref() == Some("bullet") {
                    ("ul", BULLET_LIST_CLASS)
                } else {
                    ("ol", NUMBER_LIST_CLASS)
                };
                self.element(tag, Some(class), node, out);
            }
            NodeKind::ListItem => {
                self.element("li", None, node, out);
            }
            NodeKind::Text => out.push_str(&self.text_run(node)),
            NodeKind::Link => {
                let href = self.href(node.url.as_deref());
                out.push_str(&format!("<a href=\"{}\" class=\"{}\">", href, LINK_CLASS));
                self.nodes(node.children(), out);
                out.push_str("</a>");
            }
            NodeKind::Unknown => match &node.children {
                Some(children) => self.nodes(children, out),
                None => out.push_str(&self.escape(node.text.as_deref().unwrap_or_default())),
            },
        }
    }

    fn element(&self, tag: &str, class: Option<&str>, node: &Node, out: &mut String) {
        match class {
            Some(class) => out.push_str(&format!("<{} class=\"{}\">", tag, class)),
            None => out.push_str(&format!("<{}>", tag)),
        }
        self.nodes(node.children(), out);
        out.push_str(&format!("</{}>", tag));
    }

    fn text_run(&self, node: &Node) -> String {
        let raw = node.text.as_deref().unwrap_or_default();
        let mut text = self.escape(raw).replace('\n', "<br>");

        let format = node.text_format();
        if format.is_underline() {
            text = format!("<u>{}</u>", text);
        }
        if format.is_italic() {
            text = format!("<em>{}</em>", text);
        }
        if format.is_bold() {
            text = format!("<strong>{}</strong>", text);
        }

        if let Some(style) = node.style.as_deref() {
            if style.contains("color:") {
                text = format!("<span style=\"{}\">{}</span>", self.escape(style), text);
            }
        }
        text
    }

    fn href(&self, url: Option<&str>) -> String {
        let url = match url {
            Some(u) if !u.is_empty() => u,
            _ => return "#".to_string(),
        };
        if self.options.escape_html && is_script_url(url) {
            return "#".to_string();
        }
        self.escape(url)
    }

    fn escape(&self, raw: &str) -> String {
        if self.options.escape_html {
            escape_html(raw)
        } else {
            raw.to_string()
        }
    }
}

fn is_script_url(url: &str) -> bool {
    let scheme: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(11)
        .collect::<String>()
        .to_ascii_lowercase();
    scheme.starts_with("javascript:") || scheme.starts_with("vbscript:")
}

/// Escapes the five characters that are significant in HTML text and attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(t: &str) -> Node {
        Node::text_run(t)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_to_html(&[]), "");
        assert_eq!(render_value(&Value::Null, RenderOptions::default()), "");
        assert_eq!(render_value(&json!({"a": 1}), RenderOptions::default()), "");
    }

    #[test]
    fn test_plain_text_has_no_wrapper() {
        assert_eq!(render_to_html(&[text("hi")]), "hi");
    }

    #[test]
    fn test_bold_text() {
        let html = render_to_html(&[text("hello").with_format(1)]);
        assert_eq!(html, "<strong>hello</strong>");
    }

    #[test]
    fn test_bold_italic_nests_italic_inside_bold() {
        let html = render_to_html(&[text("x").with_format(3)]);
        assert_eq!(html, "<strong><em>x</em></strong>");
    }

    #[test]
    fn test_all_formats_and_strikethrough_ignored() {
        let html = render_to_html(&[text("x").with_format(15)]);
        assert_eq!(html, "<strong><em><u>x</u></em></strong>");

        let underline_only = render_to_html(&[text("x").with_format(8)]);
        assert_eq!(underline_only, "<u>x</u>");

        let strike_only = render_to_html(&[text("x").with_format(4)]);
        assert_eq!(strike_only, "x");
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render_to_html(&[text("a\nb\n")]), "a<br>b<br>");
    }

    #[test]
    fn test_color_style_wraps_outside_format() {
        let node = text("gold").with_format(1).with_style("color: #d4af37");
        assert_eq!(
            render_to_html(&[node]),
            "<span style=\"color: #d4af37\"><strong>gold</strong></span>"
        );

        let no_color = text("x").with_style("font-size: 12px");
        assert_eq!(render_to_html(&[no_color]), "x");
    }

    #[test]
    fn test_headings_scale_by_level() {
        let h2 = Node::element("heading", vec![text("Title")]).with_tag("h2");
        let h1 = Node::element("heading", vec![text("Title")]).with_tag("h1");
        let h2_html = render_to_html(&[h2]);
        let h1_html = render_to_html(&[h1]);

        assert_eq!(
            h2_html,
            "<h2 class=\"text-2xl font-semibold mb-3\">Title</h2>"
        );
        assert!(h1_html.starts_with("<h1 class=\"text-3xl"));
        assert_ne!(h1_html.replace("h1", "h2"), h2_html);
    }

    #[test]
    fn test_heading_defaults_to_h1() {
        let missing = Node::element("heading", vec![text("T")]);
        let odd = Node::element("heading", vec![text("T")]).with_tag("h5");
        assert!(render_to_html(&[missing]).starts_with("<h1 "));
        assert!(render_to_html(&[odd]).ends_with("</h1>"));
    }

    #[test]
    fn test_lists() {
        let bullet = Node::element(
            "list",
            vec![
                Node::element("listitem", vec![text("one")]),
                Node::element("listitem", vec![text("two")]),
            ],
        )
        .with_list_type("bullet");
        assert_eq!(
            render_to_html(&[bullet]),
            "<ul class=\"list-disc ml-6 mb-4\"><li>one</li><li>two</li></ul>"
        );

        let numbered = Node::element("list", vec![Node::element("listitem", vec![text("a")])])
            .with_list_type("number");
        assert!(render_to_html(&[numbered]).starts_with("<ol class=\"list-decimal"));

        let untyped = Node::element("list", vec![]);
        assert!(render_to_html(&[untyped]).starts_with("<ol"));
    }

    #[test]
    fn test_links() {
        let link = Node::element("link", vec![text("care guide")]).with_url("/care");
        assert_eq!(
            render_to_html(&[link]),
            "<a href=\"/care\" class=\"text-blue-600 hover:underline\">care guide</a>"
        );

        let no_url = Node::element("link", vec![text("x")]);
        assert!(render_to_html(&[no_url]).starts_with("<a href=\"#\""));
    }

    #[test]
    fn test_unknown_nodes_degrade() {
        let with_children = Node::element("quote", vec![text("a"), text("b")]);
        assert_eq!(render_to_html(&[with_children]), "ab");

        let mut leaf = Node::default();
        leaf.kind = Some("mention".to_string());
        leaf.text = Some("@ann".to_string());
        assert_eq!(render_to_html(&[leaf]), "@ann");

        assert_eq!(render_to_html(&[Node::default()]), "");

        let mut empty_children = Node::element("quote", vec![]);
        empty_children.text = Some("ignored".to_string());
        assert_eq!(render_to_html(&[empty_children]), "");
    }

    #[test]
    fn test_nested_document() {
        let doc = vec![
            Node::element("heading", vec![text("Ring")]).with_tag("h3"),
            Node::element(
                "paragraph",
                vec![text("Solid "), text("gold").with_format(1)],
            ),
        ];
        assert_eq!(
            render_to_html(&doc),
            "<h3 class=\"text-xl font-medium mb-2\">Ring</h3>\
             <p class=\"mb-4\">Solid <strong>gold</strong></p>"
        );
    }

    #[test]
    fn test_raw_interpolation_by_default() {
        let node = text("<b>&</b>");
        assert_eq!(render_to_html(&[node]), "<b>&</b>");
    }

    #[test]
    fn test_escaped_rendering() {
        let opts = RenderOptions::escaped();
        let doc = vec![
            text("<script>\n").with_style("color: red\" onload=\"x"),
            Node::element("link", vec![text("x")]).with_url("JavaScript:alert(1)"),
            Node::element("link", vec![text("y")]).with_url("/a?b=1&c=2"),
        ];
        let html = render_nodes(&doc, opts);
        assert!(html.contains("&lt;script&gt;<br>"));
        assert!(html.contains("style=\"color: red&quot; onload=&quot;x\""));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"/a?b=1&amp;c=2\""));
    }

    #[test]
    fn test_render_value_reads_raw_json() {
        let value = json!([
            {"type": "paragraph", "format": "", "children": [
                {"type": "text", "text": "hey", "format": 2}
            ]}
        ]);
        assert_eq!(
            render_value(&value, RenderOptions::default()),
            "<p class=\"mb-4\"><em>hey</em></p>"
        );
    }

    #[test]
    fn test_idempotent() {
        let doc = vec![Node::element("paragraph", vec![text("x").with_format(9)])];
        assert_eq!(render_to_html(&doc), render_to_html(&doc));
    }
}
