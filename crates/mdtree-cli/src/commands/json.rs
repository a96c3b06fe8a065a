//! Print ECharts tree-series JSON for a document.

use mdtree_render::EChartsRenderer;

use super::run_common;
use super::source_loader::SourceInput;

pub struct JsonArgs {
    pub input: SourceInput,
    pub max_depth: Option<u32>,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: JsonArgs) {
    let source = run_common::load_or_exit(&args.input);
    let tree = run_common::parse_or_exit(&source, args.max_depth, args.color);

    let json = EChartsRenderer::new()
        .pretty(!args.compact)
        .render(tree.root());
    println!("{}", json);
}
