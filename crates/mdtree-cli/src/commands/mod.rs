pub mod ast;
pub mod html;
pub mod json;
pub mod run_common;
pub mod source_loader;
