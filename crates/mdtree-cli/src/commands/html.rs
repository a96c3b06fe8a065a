//! Render a document as HTML.

use mdtree_render::HtmlRenderer;

use super::run_common;
use super::source_loader::SourceInput;

pub struct HtmlArgs {
    pub input: SourceInput,
    pub max_depth: Option<u32>,
    pub hard_breaks: bool,
    pub color: bool,
}

pub fn run(args: HtmlArgs) {
    let source = run_common::load_or_exit(&args.input);
    let tree = run_common::parse_or_exit(&source, args.max_depth, args.color);

    let html = HtmlRenderer::new()
        .hard_breaks(args.hard_breaks)
        .render(tree.root());
    print!("{}", html);
}
