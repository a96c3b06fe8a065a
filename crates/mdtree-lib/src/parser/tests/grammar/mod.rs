mod blocks_tests;
mod code_tests;
mod inlines_tests;
mod lists_tests;
