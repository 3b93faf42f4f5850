use serde::{Serialize, Serializer};

use dicta_lexer::Format;

/// Node types a markup tree can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Italic,
    Bold,
    Sup,
    Sub,
}

impl Tag {
    #[must_use]
    pub const fn html_name(self) -> &'static str {
        match self {
            Self::Italic => "em",
            Self::Bold => "strong",
            Self::Sup => "sup",
            Self::Sub => "sub",
        }
    }

    /// Whether a character with the given formatting belongs under this tag.
    #[must_use]
    pub fn matches(self, format: &Format) -> bool {
        match self {
            Self::Italic => format.italic,
            Self::Bold => format.bold,
            Self::Sup => format.sup,
            Self::Sub => format.sub,
        }
    }
}

/// Either a plain string or a tagged node with child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Text(String),
    Element(Tag, Vec<MarkupNode>),
}

impl MarkupNode {
    fn to_html(&self) -> String {
        match self {
            Self::Text(text) => escape_html(text),
            Self::Element(tag, children) => {
                let inner: String = children.iter().map(Self::to_html).collect();
                let name = tag.html_name();
                format!("<{name}>{inner}</{name}>")
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(_, children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// A block of marked up text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup {
    pub content: Vec<MarkupNode>,
}

impl Markup {
    #[must_use]
    pub fn new(content: Vec<MarkupNode>) -> Self {
        Self { content }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Renders the markup as an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.content.iter().map(MarkupNode::to_html).collect()
    }

    /// The text content with all tags dropped.
    #[must_use]
    pub fn plain(&self) -> String {
        let mut out = String::new();
        for node in &self.content {
            node.collect_text(&mut out);
        }
        out
    }
}

// Markup reaches output as its HTML rendering, not as a node tree.
impl Serialize for Markup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_html())
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
