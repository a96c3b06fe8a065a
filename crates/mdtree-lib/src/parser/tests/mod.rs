mod grammar;

use crate::parse;

/// Tree dump of a parse that must succeed.
fn dump(input: &str) -> String {
    let (tree, error) = parse("test", input);
    assert_eq!(error, None, "unexpected parse error");
    tree.dump()
}

fn dump_with_spans(input: &str) -> String {
    let (tree, error) = parse("test", input);
    assert_eq!(error, None, "unexpected parse error");
    tree.printer().with_spans(true).dump()
}
