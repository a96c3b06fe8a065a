mod cli;
mod commands;

use cli::{AstParams, HtmlParams, JsonParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("html", m)) => {
            let params = HtmlParams::from_matches(m);
            commands::html::run(params.into());
        }
        Some(("json", m)) => {
            let params = JsonParams::from_matches(m);
            commands::json::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
