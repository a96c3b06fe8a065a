//! HTML output.

use mdtree_lib::{Node, NodeKind, Visitor, WalkStatus, walk};

/// Renders a tree as HTML.
///
/// Paragraphs directly inside the items of a tight list are written without
/// `<p>` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    hard_breaks: bool,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render line breaks inside paragraphs as `<br />`.
    pub fn hard_breaks(mut self, value: bool) -> Self {
        self.hard_breaks = value;
        self
    }

    pub fn render(&self, root: &Node) -> String {
        let mut writer = HtmlWriter {
            out: String::new(),
            hard_breaks: self.hard_breaks,
            frames: Vec::new(),
        };
        walk(root, &mut writer);
        writer.out
    }
}

/// One open container.
struct Frame {
    /// Paragraphs directly below are written bare.
    tight: bool,
    /// This paragraph was opened without a `<p>` tag.
    bare: bool,
}

struct HtmlWriter {
    out: String,
    hard_breaks: bool,
    frames: Vec<Frame>,
}

impl HtmlWriter {
    fn parent_tight(&self) -> bool {
        self.frames.last().is_some_and(|frame| frame.tight)
    }

    /// Block elements start on their own line.
    fn block_start(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn enter(&mut self, node: &Node) {
        let mut frame = Frame {
            tight: false,
            bare: false,
        };

        match node.kind() {
            NodeKind::Paragraph => {
                frame.bare = self.parent_tight();
                if !frame.bare {
                    self.block_start();
                    self.out.push_str("<p>");
                } else if !self.out.ends_with("<li>") {
                    self.block_start();
                }
            }
            NodeKind::Heading { depth } => {
                self.block_start();
                self.out.push_str(&format!("<h{depth}>"));
            }
            NodeKind::Blockquote => {
                self.block_start();
                self.out.push_str("<blockquote>\n");
            }
            NodeKind::List {
                ordered,
                start,
                spread,
            } => {
                self.block_start();
                frame.tight = !spread;
                match (*ordered, *start) {
                    (true, 1) => self.out.push_str("<ol>\n"),
                    (true, start) => self.out.push_str(&format!("<ol start=\"{start}\">\n")),
                    (false, _) => self.out.push_str("<ul>\n"),
                }
            }
            NodeKind::ListItem { spread, .. } => {
                self.block_start();
                frame.tight = self.parent_tight() && !spread;
                self.out.push_str("<li>");
            }
            NodeKind::Emphasis => self.out.push_str("<em>"),
            NodeKind::Strong => self.out.push_str("<strong>"),
            NodeKind::Delete => self.out.push_str("<del>"),
            _ => {}
        }

        self.frames.push(frame);
    }

    fn exit(&mut self, node: &Node) {
        let Some(frame) = self.frames.pop() else {
            return;
        };

        match node.kind() {
            NodeKind::Paragraph if !frame.bare => self.out.push_str("</p>\n"),
            NodeKind::Heading { depth } => self.out.push_str(&format!("</h{depth}>\n")),
            NodeKind::Blockquote => {
                self.block_start();
                self.out.push_str("</blockquote>\n");
            }
            NodeKind::List { ordered, .. } => {
                self.out.push_str(if *ordered { "</ol>\n" } else { "</ul>\n" });
            }
            NodeKind::ListItem { .. } => self.out.push_str("</li>\n"),
            NodeKind::Emphasis => self.out.push_str("</em>"),
            NodeKind::Strong => self.out.push_str("</strong>"),
            NodeKind::Delete => self.out.push_str("</del>"),
            _ => {}
        }
    }

    fn leaf(&mut self, node: &Node) {
        let literal = node.literal().unwrap_or_default();
        match node.kind() {
            NodeKind::Text => escape_into(&mut self.out, literal),
            NodeKind::InlineCode => {
                self.out.push_str("<code>");
                escape_into(&mut self.out, literal);
                self.out.push_str("</code>");
            }
            NodeKind::Break if self.hard_breaks => self.out.push_str("<br />\n"),
            NodeKind::Break => self.out.push('\n'),
            NodeKind::ThematicBreak => {
                self.block_start();
                self.out.push_str("<hr />\n");
            }
            NodeKind::Code { lang, .. } => {
                self.block_start();
                self.out.push_str("<pre><code");
                if let Some(lang) = lang {
                    self.out.push_str(" class=\"language-");
                    escape_into(&mut self.out, lang);
                    self.out.push('"');
                }
                self.out.push('>');
                escape_into(&mut self.out, literal);
                if !literal.is_empty() {
                    self.out.push('\n');
                }
                self.out.push_str("</code></pre>\n");
            }
            _ => {}
        }
    }
}

impl Visitor for HtmlWriter {
    fn visit(&mut self, node: &Node, entering: bool) -> WalkStatus {
        if node.is_leaf() {
            self.leaf(node);
        } else if entering {
            self.enter(node);
        } else {
            self.exit(node);
        }
        WalkStatus::Continue
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
