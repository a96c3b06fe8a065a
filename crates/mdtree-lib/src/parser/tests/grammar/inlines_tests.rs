use super::super::{dump, dump_with_spans};

#[test]
fn all_phrasing_kinds() {
    insta::assert_snapshot!(dump("*em* **strong** ~~del~~ `code`\n"), @r#"
    Root
      Paragraph
        Emphasis
          Text "em"
        Text " "
        Strong
          Text "strong"
        Text " "
        Delete
          Text "del"
        Text " "
        InlineCode "code"
    "#);
}

#[test]
fn underscore_emphasis() {
    insta::assert_snapshot!(dump("_a_ __b__\n"), @r#"
    Root
      Paragraph
        Emphasis
          Text "a"
        Text " "
        Strong
          Text "b"
    "#);
}

#[test]
fn triple_run_nests_emphasis_in_strong() {
    insta::assert_snapshot!(dump_with_spans("***both***\n"), @r#"
    Root [0..11]
      Paragraph [0..10]
        Strong [0..10]
          Emphasis [2..8]
            Text [3..7] "both"
    "#);
}

#[test]
fn mismatched_closer_reads_opener_as_text() {
    insta::assert_snapshot!(dump("*foo**"), @r#"
    Root
      Paragraph
        Text "*"
        Text "foo"
        Text "**"
    "#);
}

#[test]
fn closer_must_repeat_delimiter_character() {
    insta::assert_snapshot!(dump("*a_"), @r#"
    Root
      Paragraph
        Text "*"
        Text "a"
        Text "_"
    "#);
}

#[test]
fn unclosed_opener_is_text() {
    insta::assert_snapshot!(dump("*not closed\n"), @r#"
    Root
      Paragraph
        Text "*"
        Text "not closed"
    "#);
}

#[test]
fn span_wraps_exactly_one_child() {
    insta::assert_snapshot!(dump("**a *b* c**"), @r#"
    Root
      Paragraph
        Text "**"
        Text "a "
        Emphasis
          Text "b"
        Text " c"
        Text "**"
    "#);
}

#[test]
fn nested_code_span_inside_strong() {
    insta::assert_snapshot!(dump("**`x`**"), @r#"
    Root
      Paragraph
        Strong
          InlineCode "x"
    "#);
}

#[test]
fn unclosed_span_keeps_its_nested_child() {
    insta::assert_snapshot!(dump("**`x`* y"), @r#"
    Root
      Paragraph
        Strong
          InlineCode "x"
        Text "*"
        Text " y"
    "#);
}

#[test]
fn code_span_span_covers_backticks() {
    insta::assert_snapshot!(dump_with_spans("use `cargo` now"), @r#"
    Root [0..15]
      Paragraph [0..15]
        Text [0..4] "use "
        InlineCode [4..11] "cargo"
        Text [11..15] " now"
    "#);
}

#[test]
fn double_backtick_span_may_hold_a_backtick() {
    insta::assert_snapshot!(dump("``a`b``"), @r#"
    Root
      Paragraph
        InlineCode "a`b"
    "#);
}

#[test]
fn break_skips_next_line_indentation() {
    insta::assert_snapshot!(dump_with_spans("one\n  two"), @r#"
    Root [0..9]
      Paragraph [0..9]
        Text [0..3] "one"
        Break [3..4]
        Text [6..9] "two"
    "#);
}

#[test]
fn trailing_break_is_trimmed() {
    insta::assert_snapshot!(dump_with_spans("a *b*\n"), @r#"
    Root [0..6]
      Paragraph [0..5]
        Text [0..2] "a "
        Emphasis [2..5]
          Text [3..4] "b"
    "#);
}
