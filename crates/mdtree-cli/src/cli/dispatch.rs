//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::html::HtmlArgs;
use crate::commands::json::JsonArgs;
use crate::commands::source_loader::SourceInput;

pub struct AstParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub max_depth: Option<u32>,
    pub spans: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: source_input(p.source_path, p.source_text),
            max_depth: p.max_depth,
            spans: p.spans,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct HtmlParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub max_depth: Option<u32>,
    pub hard_breaks: bool,
    pub color: ColorChoice,
}

impl HtmlParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            hard_breaks: m.get_flag("hard_breaks"),
            color: parse_color(m),
        }
    }
}

impl From<HtmlParams> for HtmlArgs {
    fn from(p: HtmlParams) -> Self {
        Self {
            input: source_input(p.source_path, p.source_text),
            max_depth: p.max_depth,
            hard_breaks: p.hard_breaks,
            color: p.color.should_colorize(),
        }
    }
}

pub struct JsonParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub max_depth: Option<u32>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl JsonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<JsonParams> for JsonArgs {
    fn from(p: JsonParams) -> Self {
        Self {
            input: source_input(p.source_path, p.source_text),
            max_depth: p.max_depth,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Inline text wins; a missing path or `-` means stdin.
fn source_input(path: Option<PathBuf>, text: Option<String>) -> SourceInput {
    match (text, path) {
        (Some(text), _) => SourceInput::Text(text),
        (None, Some(path)) if path.as_os_str() != "-" => SourceInput::File(path),
        (None, _) => SourceInput::Stdin,
    }
}
