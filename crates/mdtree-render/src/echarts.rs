//! Tree-series JSON for visualizing a syntax tree with ECharts.

use mdtree_lib::{Node, NodeKind, Visitor, WalkStatus, walk};
use serde::Serialize;

/// Characters of a text node shown before it is cut off.
const TEXT_PREVIEW: usize = 5;

/// Renders a tree as a one-element ECharts `tree` series data array.
#[derive(Debug, Clone, Copy, Default)]
pub struct EChartsRenderer {
    pretty: bool,
}

impl EChartsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    pub fn render(&self, root: &Node) -> String {
        let mut builder = ChartBuilder::default();
        walk(root, &mut builder);
        let data: Vec<ChartNode> = builder.root.into_iter().collect();

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)
        } else {
            serde_json::to_string(&data)
        };
        json.expect("chart nodes always serialize")
    }
}

#[derive(Debug, Serialize)]
struct ChartNode {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ChartNode>,
}

#[derive(Default)]
struct ChartBuilder {
    open: Vec<ChartNode>,
    root: Option<ChartNode>,
}

impl ChartBuilder {
    fn attach(&mut self, node: ChartNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root = Some(node),
        }
    }
}

impl Visitor for ChartBuilder {
    fn visit(&mut self, node: &Node, entering: bool) -> WalkStatus {
        if node.is_leaf() {
            self.attach(chart_node(node));
        } else if entering {
            self.open.push(chart_node(node));
        } else if let Some(done) = self.open.pop() {
            self.attach(done);
        }
        WalkStatus::Continue
    }
}

fn chart_node(node: &Node) -> ChartNode {
    let name = match node.kind() {
        NodeKind::Root => "Document".to_owned(),
        NodeKind::Paragraph => "Paragraph\np".to_owned(),
        NodeKind::Heading { depth } => format!("Heading\nh{depth}"),
        NodeKind::ThematicBreak => "Thematic Break\nhr".to_owned(),
        NodeKind::Blockquote => "Blockquote\nblockquote".to_owned(),
        NodeKind::List { ordered: true, .. } => "List\nol".to_owned(),
        NodeKind::List { .. } => "List\nul".to_owned(),
        NodeKind::ListItem { .. } => "List Item\nli".to_owned(),
        NodeKind::Text => format!("Text\n{}", preview(node.literal().unwrap_or_default())),
        NodeKind::Emphasis => "Emphasis\nem".to_owned(),
        NodeKind::Strong => "Strong\nstrong".to_owned(),
        NodeKind::Delete => "Delete\ndel".to_owned(),
        NodeKind::InlineCode => "Code Span\ncode".to_owned(),
        NodeKind::Code { .. } => "Code Block\npre.code".to_owned(),
        NodeKind::Break => "Soft Break\n".to_owned(),
    };

    ChartNode {
        name: name.replace(['"', '\''], ""),
        children: Vec::new(),
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let mut out: String = chars.by_ref().take(TEXT_PREVIEW).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}
