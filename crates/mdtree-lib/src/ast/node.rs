//! Syntax tree node types.
//!
//! A node is either a container (ordered children) or a leaf (literal text).
//! Kind-specific metadata lives in [`NodeKind`] itself, so a heading's depth
//! or a code block's language cannot be attached to the wrong kind.

use rowan::{TextRange, TextSize};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Paragraph,
    /// Depth is the number of `#` characters, 1 to 6.
    Heading { depth: u8 },
    ThematicBreak,
    Blockquote,
    List { ordered: bool, start: u32, spread: bool },
    ListItem { checked: bool, spread: bool },
    Text,
    Emphasis,
    Strong,
    Delete,
    InlineCode,
    /// Fenced or indented code block.
    Code {
        lang: Option<String>,
        meta: Option<String>,
    },
    Break,
}

impl NodeKind {
    /// Bullet list as produced by the parser.
    pub fn bullet_list() -> Self {
        NodeKind::List {
            ordered: false,
            start: 1,
            spread: false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem { .. } => "ListItem",
            NodeKind::Text => "Text",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Delete => "Delete",
            NodeKind::InlineCode => "InlineCode",
            NodeKind::Code { .. } => "Code",
            NodeKind::Break => "Break",
        }
    }

    /// Name used in serialized output.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading { .. } => "heading",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Blockquote => "blockquote",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem { .. } => "listItem",
            NodeKind::Text => "text",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::Delete => "delete",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Code { .. } => "code",
            NodeKind::Break => "break",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Body {
    Children(Vec<Node>),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    span: TextRange,
    body: Body,
}

impl Node {
    pub(crate) fn container(kind: NodeKind, span: TextRange, children: Vec<Node>) -> Self {
        Self {
            kind,
            span,
            body: Body::Children(children),
        }
    }

    pub(crate) fn leaf(kind: NodeKind, span: TextRange, literal: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            body: Body::Literal(literal.into()),
        }
    }

    pub(crate) fn root(len: TextSize) -> Self {
        Self::container(NodeKind::Root, TextRange::up_to(len), Vec::new())
    }

    /// Appends a top-level block. Root is the only node that grows after
    /// the rule producing it returned.
    pub(crate) fn push_top_level(&mut self, child: Node) {
        assert_eq!(
            self.kind,
            NodeKind::Root,
            "broken tree invariant: only Root accepts top-level blocks"
        );
        if let Body::Children(children) = &mut self.body {
            children.push(child);
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn span(&self) -> TextRange {
        self.span
    }

    /// Children in source order; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match &self.body {
            Body::Children(children) => children,
            Body::Literal(_) => &[],
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match &self.body {
            Body::Literal(literal) => Some(literal),
            Body::Children(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.body, Body::Literal(_))
    }

    /// Text or break leaf holding only whitespace.
    pub fn is_blank_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Text | NodeKind::Break)
            && self
                .literal()
                .is_some_and(|literal| literal.chars().all(char::is_whitespace))
    }

    pub fn depth(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Heading { depth } => Some(depth),
            _ => None,
        }
    }

    pub fn ordered(&self) -> Option<bool> {
        match self.kind {
            NodeKind::List { ordered, .. } => Some(ordered),
            _ => None,
        }
    }

    pub fn start(&self) -> Option<u32> {
        match self.kind {
            NodeKind::List { start, .. } => Some(start),
            _ => None,
        }
    }

    pub fn spread(&self) -> Option<bool> {
        match self.kind {
            NodeKind::List { spread, .. } | NodeKind::ListItem { spread, .. } => Some(spread),
            _ => None,
        }
    }

    pub fn checked(&self) -> Option<bool> {
        match self.kind {
            NodeKind::ListItem { checked, .. } => Some(checked),
            _ => None,
        }
    }

    pub fn lang(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Code { lang, .. } => lang.as_deref(),
            _ => None,
        }
    }

    pub fn meta(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Code { meta, .. } => meta.as_deref(),
            _ => None,
        }
    }

    /// Concatenated literals of all leaves below (and including) this node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.body {
            Body::Literal(literal) => {
                if !matches!(self.kind, NodeKind::ThematicBreak) {
                    out.push_str(literal);
                }
            }
            Body::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

#[derive(Serialize)]
struct Position {
    start: u32,
    end: u32,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.kind.type_name())?;

        match &self.kind {
            NodeKind::Heading { depth } => map.serialize_entry("depth", depth)?,
            NodeKind::List {
                ordered,
                start,
                spread,
            } => {
                map.serialize_entry("ordered", ordered)?;
                map.serialize_entry("start", start)?;
                map.serialize_entry("spread", spread)?;
            }
            NodeKind::ListItem { checked, spread } => {
                map.serialize_entry("checked", checked)?;
                map.serialize_entry("spread", spread)?;
            }
            NodeKind::Code { lang, meta } => {
                map.serialize_entry("lang", lang)?;
                map.serialize_entry("meta", meta)?;
            }
            _ => {}
        }

        let position = Position {
            start: self.span.start().into(),
            end: self.span.end().into(),
        };
        map.serialize_entry("position", &position)?;

        match &self.body {
            Body::Children(children) => map.serialize_entry("children", children)?,
            Body::Literal(value) => map.serialize_entry("value", value)?,
        }
        map.end()
    }
}
