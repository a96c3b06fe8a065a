//! Loading and parsing shared by every command.

use mdtree_lib::{ParseOptions, Tree};

use super::source_loader::{LoadedSource, SourceInput, load_source};

pub fn load_or_exit(input: &SourceInput) -> LoadedSource {
    match load_source(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Parses the source, or prints the diagnostic and exits with status 1.
pub fn parse_or_exit(source: &LoadedSource, max_depth: Option<u32>, color: bool) -> Tree<'_> {
    let mut options = ParseOptions::new();
    if let Some(depth) = max_depth {
        options = options.with_recursion_fuel(Some(depth));
    }

    let (tree, error) = options.parse_bytes(&source.name, &source.bytes);
    if let Some(error) = error {
        let report = error
            .printer()
            .source(tree.text())
            .path(&source.name)
            .colored(color)
            .render();
        eprint!("{}", report);
        std::process::exit(1);
    }
    tree
}
