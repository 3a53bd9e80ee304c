use super::node::{Node, NodeKind};

/// Concatenates the text of every leaf under `nodes`, joining siblings with a
/// single space. The result is not trimmed; callers decide.
pub fn extract_text(nodes: &[Node]) -> String {
    nodes.iter().map(leaf_text).collect::<Vec<_>>().join(" ")
}

fn leaf_text(node: &Node) -> String {
    if node.kind() == NodeKind::Text {
        return node.text.clone().unwrap_or_default();
    }
    match &node.children {
        Some(children) => extract_text(children),
        None => node.text.clone().unwrap_or_default(),
    }
}

/// Removes markup from an HTML fragment and collapses whitespace.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut chars = html.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' if !in_tag && chars.peek().is_some_and(|&n| opens_tag(n)) => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn opens_tag(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '/' || c == '!'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_nested_in_order() {
        let doc = vec![
            Node::element("heading", vec![Node::text_run("Classic")]),
            Node::element(
                "paragraph",
                vec![Node::text_run("Solitaire"), Node::text_run("ring")],
            ),
            Node::element(
                "list",
                vec![
                    Node::element("listitem", vec![Node::text_run("14K")]),
                    Node::element("listitem", vec![Node::text_run("18K")]),
                ],
            ),
        ];
        assert_eq!(extract_text(&doc), "Classic Solitaire ring 14K 18K");
    }

    #[test]
    fn test_empty_siblings_keep_separator() {
        let doc = vec![Node::text_run("a"), Node::element("paragraph", vec![]), Node::text_run("b")];
        assert_eq!(extract_text(&doc), "a  b");
    }

    #[test]
    fn test_text_node_without_text() {
        let mut node = Node::text_run("");
        node.text = None;
        assert_eq!(extract_text(&[node]), "");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags("<p>a</p><p>b</p>"), "a b");
        assert_eq!(strip_tags("  plain  text "), "plain text");
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
        assert_eq!(
            strip_tags("Weight < 2g, <b>gold</b>"),
            "Weight < 2g, gold"
        );
        assert_eq!(strip_tags("<!-- note --><p>a<br/>b</p>"), "a b");
        assert_eq!(strip_tags("a<3"), "a<3");
    }
}
