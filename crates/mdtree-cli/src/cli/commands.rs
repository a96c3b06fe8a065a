//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Input and diagnostics args shared by every command.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("mdtree")
        .about("Parse markdown into a syntax tree and render it")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(html_command())
        .subcommand(json_command())
}

/// Show the syntax tree of a document.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the syntax tree of a document")
        .override_usage(
            "\
  mdtree ast <FILE>
  mdtree ast -s <TEXT>
  mdtree ast < FILE",
        )
        .after_help(
            r#"EXAMPLES:
  mdtree ast README.md                # indented tree
  mdtree ast README.md --spans        # with byte ranges
  mdtree ast README.md --json         # mdast-style JSON
  mdtree ast -s '# Title'             # inline text"#,
        )
        .arg(spans_arg())
        .arg(json_arg());

    with_common_args(cmd)
}

/// Render a document as HTML.
pub fn html_command() -> Command {
    let cmd = Command::new("html")
        .about("Render a document as HTML")
        .override_usage(
            "\
  mdtree html <FILE>
  mdtree html -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  mdtree html README.md               # HTML on stdout
  mdtree html README.md --hard-breaks # line breaks become <br />
  cat notes.md | mdtree html -        # read stdin"#,
        )
        .arg(hard_breaks_arg());

    with_common_args(cmd)
}

/// Print ECharts tree-series JSON for a document.
pub fn json_command() -> Command {
    let cmd = Command::new("json")
        .about("Print the syntax tree as ECharts tree-series JSON")
        .override_usage(
            "\
  mdtree json <FILE>
  mdtree json -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  mdtree json README.md               # pretty JSON
  mdtree json README.md --compact     # single line"#,
        )
        .arg(compact_arg());

    with_common_args(cmd)
}
