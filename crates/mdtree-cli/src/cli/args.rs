//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so every command declares its input
//! and diagnostics flags the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Markdown file to read (positional). `-` reads stdin.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("source_text")
        .help("Markdown file to parse (`-` or nothing reads stdin)")
}

/// Inline markdown text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline markdown text")
}

/// Recursion limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth before the parse is abandoned (default: 256)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte ranges")
}

/// Print the tree as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .conflicts_with("spans")
        .help("Print the tree as mdast-style JSON")
}

/// Render line breaks as `<br />` (--hard-breaks).
pub fn hard_breaks_arg() -> Arg {
    Arg::new("hard_breaks")
        .long("hard-breaks")
        .action(ArgAction::SetTrue)
        .help("Render line breaks inside paragraphs as <br />")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}
