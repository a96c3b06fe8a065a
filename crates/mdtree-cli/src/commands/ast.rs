//! Show the syntax tree of a document.

use super::run_common;
use super::source_loader::SourceInput;

pub struct AstArgs {
    pub input: SourceInput,
    pub max_depth: Option<u32>,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = run_common::load_or_exit(&args.input);
    let tree = run_common::parse_or_exit(&source, args.max_depth, args.color);

    if args.json {
        match serde_json::to_string_pretty(tree.root()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", tree.printer().with_spans(args.spans).dump());
}
