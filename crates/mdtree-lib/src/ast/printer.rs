use std::fmt::Write;

use super::node::{Node, NodeKind};
use super::visitor::{Visitor, WalkStatus, walk};

/// Indented, one-node-per-line dump of a tree.
pub struct TreePrinter<'n> {
    root: &'n Node,
    spans: bool,
}

impl<'n> TreePrinter<'n> {
    pub fn new(root: &'n Node) -> Self {
        Self { root, spans: false }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut dumper = Dumper {
            out: w,
            spans: self.spans,
            depth: 0,
            result: Ok(()),
        };
        walk(self.root, &mut dumper);
        dumper.result
    }
}

struct Dumper<'w, W> {
    out: &'w mut W,
    spans: bool,
    depth: usize,
    result: std::fmt::Result,
}

impl<W: Write> Dumper<'_, W> {
    fn line(&mut self, node: &Node) -> std::fmt::Result {
        let indent = "  ".repeat(self.depth);
        write!(self.out, "{}{}", indent, node.kind().label())?;

        match node.kind() {
            NodeKind::Heading { depth } => write!(self.out, " depth={depth}")?,
            NodeKind::List { ordered, start, spread } => {
                write!(self.out, " ordered={ordered} start={start}")?;
                if *spread {
                    write!(self.out, " spread")?;
                }
            }
            NodeKind::ListItem { checked, spread } => {
                if *checked {
                    write!(self.out, " checked")?;
                }
                if *spread {
                    write!(self.out, " spread")?;
                }
            }
            NodeKind::Code { lang, meta } => {
                if let Some(lang) = lang {
                    write!(self.out, " lang={lang}")?;
                }
                if let Some(meta) = meta {
                    write!(self.out, " meta={meta:?}")?;
                }
            }
            _ => {}
        }

        if self.spans {
            let span = node.span();
            write!(
                self.out,
                " [{}..{}]",
                u32::from(span.start()),
                u32::from(span.end())
            )?;
        }

        if let Some(literal) = node.literal()
            && matches!(
                node.kind(),
                NodeKind::Text | NodeKind::InlineCode | NodeKind::Code { .. }
            )
        {
            write!(self.out, " {literal:?}")?;
        }

        writeln!(self.out)
    }
}

impl<W: Write> Visitor for Dumper<'_, W> {
    fn visit(&mut self, node: &Node, entering: bool) -> WalkStatus {
        if !entering {
            self.depth -= 1;
            return WalkStatus::Continue;
        }

        self.result = self.line(node);
        if self.result.is_err() {
            return WalkStatus::Stop;
        }
        if !node.is_leaf() {
            self.depth += 1;
        }
        WalkStatus::Continue
    }
}

impl Node {
    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}
