//! Typed view-tree nodes and markup serialization.

use std::fmt::Write;

/// One node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag, optional class, and children
    Element(Element),
    /// A text leaf; escaped when serialized to markup
    Text(String),
}

impl Node {
    /// Build a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Serialize the tree to HTML, escaping every text node.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape_html(content)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                if let Some(class) = &element.class {
                    // Class names are code-controlled, never user text
                    let _ = write!(out, " class=\"{}\"", class);
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// Concatenated text content of the tree, unescaped.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

/// An element node under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name (code-controlled)
    pub tag: &'static str,
    /// Optional class attribute (code-controlled)
    pub class: Option<&'static str>,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Element {
    /// Start an element with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            children: Vec::new(),
        }
    }

    /// Set the class attribute.
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Append one child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Append many children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Finish building.
    pub fn build(self) -> Node {
        Node::Element(self)
    }
}

/// Escape the five reserved markup characters: `& < > " '`.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five_reserved_characters() {
        assert_eq!(
            escape_html(r#"<b>"Fish & Chips's"</b>"#),
            "&lt;b&gt;&quot;Fish &amp; Chips&#039;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_passes_plain_text_through() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_ampersand_is_not_double_escaped() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_element_renders_tag_class_children() {
        let node = Element::new("div")
            .class("timeline-card")
            .child(Element::new("span").text("Year 1").build())
            .build();
        assert_eq!(
            node.to_html(),
            r#"<div class="timeline-card"><span>Year 1</span></div>"#
        );
    }

    #[test]
    fn test_user_text_is_escaped_in_markup() {
        let node = Element::new("li").text("<script>alert(1)</script>").build();
        assert_eq!(
            node.to_html(),
            "<li>&lt;script&gt;alert(1)&lt;/script&gt;</li>"
        );
    }

    #[test]
    fn test_rendered_markup_round_trips_escaped_text() {
        // Rendering then re-reading the displayed text must equal the
        // escaped form of the field that went in.
        let field = r#"Gains & "losses" <mixed>"#;
        let node = Element::new("div").text(field).build();

        let html = node.to_html();
        let inner = html
            .strip_prefix("<div>")
            .and_then(|s| s.strip_suffix("</div>"))
            .unwrap();
        assert_eq!(inner, escape_html(field));
    }

    #[test]
    fn test_text_content_concatenates_leaves() {
        let node = Element::new("div")
            .child(Node::text("a"))
            .child(Element::new("b").text("b").build())
            .build();
        assert_eq!(node.text_content(), "ab");
    }
}
