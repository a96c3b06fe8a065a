use indoc::indoc;

use super::lexer::{Lexer, TokenKind, TokenStream, collect, lex};

fn snapshot(input: &str) -> String {
    render(&lex(input))
}

fn render(tokens: &[super::lexer::Token<'_>]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?} {:?}", t.kind, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn plain_paragraph() {
    insta::assert_snapshot!(snapshot("foo bar baz\n"), @r#"
    Text "foo bar baz"
    Break "\n"
    Eof ""
    "#);
}

#[test]
fn heading_marker_and_spaces() {
    insta::assert_snapshot!(snapshot("# Title\n"), @r##"
    Heading "#"
    Space " "
    Text "Title"
    Break "\n"
    Eof ""
    "##);
}

#[test]
fn too_many_hashes_is_text() {
    insta::assert_snapshot!(snapshot("####### nope"), @r########"
    Text "####### nope"
    Eof ""
    "########);
}

#[test]
fn hash_without_space_is_text() {
    insta::assert_snapshot!(snapshot("#tag"), @r##"
    Text "#tag"
    Eof ""
    "##);
}

#[test]
fn thematic_break_variants() {
    insta::assert_snapshot!(snapshot("***\n- - -\n___"), @r#"
    ThematicBreak "***"
    Break "\n"
    ThematicBreak "- - -"
    Break "\n"
    ThematicBreak "___"
    Eof ""
    "#);
}

#[test]
fn quote_stays_in_prefix_mode() {
    insta::assert_snapshot!(snapshot("> > # deep\n"), @r##"
    Quote ">"
    Space " "
    Quote ">"
    Space " "
    Heading "#"
    Space " "
    Text "deep"
    Break "\n"
    Eof ""
    "##);
}

#[test]
fn list_items() {
    let input = indoc! {"
    * item1
    + item2
    - item3
    "};

    insta::assert_snapshot!(snapshot(input), @r#"
    ListItem "*"
    Space " "
    Text "item1"
    Break "\n"
    ListItem "+"
    Space " "
    Text "item2"
    Break "\n"
    ListItem "-"
    Space " "
    Text "item3"
    Break "\n"
    Eof ""
    "#);
}

#[test]
fn blank_lines_fold_into_one_paragraph_token() {
    insta::assert_snapshot!(snapshot("a\n\n  \nb"), @r#"
    Text "a"
    Paragraph "\n\n  \n"
    Text "b"
    Eof ""
    "#);
}

#[test]
fn crlf_line_endings() {
    insta::assert_snapshot!(snapshot("a\r\nb\r\n\r\nc"), @r#"
    Text "a"
    Break "\r\n"
    Text "b"
    Paragraph "\r\n\r\n"
    Text "c"
    Eof ""
    "#);
}

#[test]
fn leading_spaces_and_tabs() {
    insta::assert_snapshot!(snapshot("  a\n\tb"), @r#"
    Space " "
    Space " "
    Text "a"
    Break "\n"
    Tab "\t"
    Text "b"
    Eof ""
    "#);
}

#[test]
fn four_spaces_disable_block_markers() {
    insta::assert_snapshot!(snapshot("    # not a heading"), @r##"
    Space " "
    Space " "
    Space " "
    Space " "
    Text "# not a heading"
    Eof ""
    "##);
}

#[test]
fn inline_markers() {
    insta::assert_snapshot!(snapshot("*em* **strong** ~~del~~ `code`"), @r#"
    Emphasis "*"
    Text "em"
    Emphasis "*"
    Text " "
    Strong "**"
    Text "strong"
    Strong "**"
    Text " "
    Strike "~~"
    Text "del"
    Strike "~~"
    Text " "
    InlineCode "`"
    Text "code"
    InlineCode "`"
    Eof ""
    "#);
}

#[test]
fn triple_delimiter_runs_split_in_nesting_order() {
    insta::assert_snapshot!(snapshot("***both***"), @r#"
    Strong "**"
    Emphasis "*"
    Text "both"
    Emphasis "*"
    Strong "**"
    Eof ""
    "#);
}

#[test]
fn lone_and_intraword_delimiters_are_text() {
    insta::assert_snapshot!(snapshot("a * b snake_case_name"), @r#"
    Text "a * b snake_case_name"
    Eof ""
    "#);
}

#[test]
fn unmatched_backtick_is_text() {
    insta::assert_snapshot!(snapshot("a `b"), @r#"
    Text "a `b"
    Eof ""
    "#);
}

#[test]
fn fenced_code_lines_are_verbatim() {
    let input = indoc! {"
    ```rust
    let x = *y;

    ```
    "};

    insta::assert_snapshot!(snapshot(input), @r#"
    Code "```"
    Text "rust"
    Break "\n"
    Text "let x = *y;"
    Break "\n"
    Break "\n"
    Code "```"
    Break "\n"
    Eof ""
    "#);
}

#[test]
fn fence_indentation_is_split_off_each_line() {
    insta::assert_snapshot!(snapshot("\t```\n\tx\n\t```\n"), @r#"
    Tab "\t"
    Code "```"
    Break "\n"
    Tab "\t"
    Text "x"
    Break "\n"
    Tab "\t"
    Code "```"
    Break "\n"
    Eof ""
    "#);
}

#[test]
fn shorter_fence_does_not_close() {
    let input = indoc! {"
    ~~~~
    ~~~
    ~~~~
    "};

    insta::assert_snapshot!(snapshot(input), @r#"
    Code "~~~~"
    Break "\n"
    Text "~~~"
    Break "\n"
    Code "~~~~"
    Break "\n"
    Eof ""
    "#);
}

#[test]
fn literals_reassemble_the_source() {
    let input = indoc! {"
    # Title

    > quote *with* `code`
    * item
    \tnested
        indented
    "};

    let rebuilt: String = lex(input).iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn spans_match_text() {
    let input = "> a **b**\n";
    for token in lex(input) {
        let range: std::ops::Range<usize> = token.span.into();
        assert_eq!(&input[range], token.text);
    }
}

#[test]
fn invalid_utf8_ends_with_error_token() {
    let bytes = b"ok\xffmore";
    let tokens = collect(Lexer::from_bytes(bytes));

    insta::assert_snapshot!(render(&tokens), @r#"
    Text "ok"
    Error ""
    "#);
    assert_eq!(u32::from(tokens[1].span.start()), 2);
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_item().kind, TokenKind::Text);
    for _ in 0..3 {
        assert_eq!(lexer.next_item().kind, TokenKind::Eof);
    }
}

#[test]
fn error_is_followed_by_eof() {
    let mut lexer = Lexer::from_bytes(b"\xfe");
    assert_eq!(lexer.next_item().kind, TokenKind::Error);
    assert_eq!(lexer.next_item().kind, TokenKind::Eof);
}

#[test]
fn drain_discards_remaining_tokens() {
    let mut lexer = Lexer::new("a\nb\nc\n");
    assert_eq!(lexer.next_item().text, "a");
    lexer.drain();
    assert_eq!(lexer.next_item().kind, TokenKind::Eof);
}
