use indoc::indoc;

use super::super::{dump, dump_with_spans};

#[test]
fn empty_input() {
    insta::assert_snapshot!(dump(""), @"Root");
}

#[test]
fn single_paragraph() {
    insta::assert_snapshot!(dump("foo bar baz\n"), @r#"
    Root
      Paragraph
        Text "foo bar baz"
    "#);
}

#[test]
fn soft_break_joins_lines() {
    insta::assert_snapshot!(dump("one\ntwo\n"), @r#"
    Root
      Paragraph
        Text "one"
        Break
        Text "two"
    "#);
}

#[test]
fn blank_line_separates_paragraphs() {
    insta::assert_snapshot!(dump("\n\none\n\n\ntwo\n"), @r#"
    Root
      Paragraph
        Text "one"
      Paragraph
        Text "two"
    "#);
}

#[test]
fn up_to_three_leading_spaces_are_ignored() {
    insta::assert_snapshot!(dump("   text\n"), @r#"
    Root
      Paragraph
        Text "text"
    "#);
}

#[test]
fn indented_line_continues_paragraph() {
    insta::assert_snapshot!(dump("a\n    b\n"), @r#"
    Root
      Paragraph
        Text "a"
        Break
        Text "b"
    "#);
}

#[test]
fn heading() {
    insta::assert_snapshot!(dump("# Title\n"), @r#"
    Root
      Heading depth=1
        Text "Title"
    "#);
}

#[test]
fn heading_depth_counts_markers() {
    insta::assert_snapshot!(dump("###### Six\n"), @r#"
    Root
      Heading depth=6
        Text "Six"
    "#);
}

#[test]
fn heading_span_covers_marker_and_text() {
    insta::assert_snapshot!(dump_with_spans("## Sub\n"), @r#"
    Root [0..7]
      Heading depth=2 [0..6]
        Text [3..6] "Sub"
    "#);
}

#[test]
fn empty_heading_has_no_children() {
    insta::assert_snapshot!(dump("#\n"), @r"
    Root
      Heading depth=1
    ");
}

#[test]
fn heading_takes_one_phrasing_child() {
    insta::assert_snapshot!(dump("# *Title* rest\n"), @r#"
    Root
      Heading depth=1
        Emphasis
          Text "Title"
      Paragraph
        Text " rest"
    "#);
}

#[test]
fn seven_hashes_are_text() {
    insta::assert_snapshot!(dump("####### x\n"), @r########"
    Root
      Paragraph
        Text "####### x"
    "########);
}

#[test]
fn thematic_break() {
    insta::assert_snapshot!(dump("***\n"), @r"
    Root
      ThematicBreak
    ");
}

#[test]
fn thematic_break_span() {
    insta::assert_snapshot!(dump_with_spans("- - -\n"), @r"
    Root [0..6]
      ThematicBreak [0..5]
    ");
}

#[test]
fn blockquote() {
    insta::assert_snapshot!(dump("> quoted\n"), @r#"
    Root
      Blockquote
        Paragraph
          Text "quoted"
    "#);
}

#[test]
fn blockquote_lazy_continuation() {
    insta::assert_snapshot!(dump("> a\nb\n"), @r#"
    Root
      Blockquote
        Paragraph
          Text "a"
          Break
          Text "b"
    "#);
}

#[test]
fn blockquote_holds_one_block() {
    insta::assert_snapshot!(dump("> a\n> b\n"), @r#"
    Root
      Blockquote
        Paragraph
          Text "a"
      Blockquote
        Paragraph
          Text "b"
    "#);
}

#[test]
fn blockquote_wraps_heading() {
    insta::assert_snapshot!(dump("> # Title\n"), @r#"
    Root
      Blockquote
        Heading depth=1
          Text "Title"
    "#);
}

#[test]
fn nested_blockquotes() {
    insta::assert_snapshot!(dump("> > deep\n"), @r#"
    Root
      Blockquote
        Blockquote
          Paragraph
            Text "deep"
    "#);
}

#[test]
fn empty_blockquote() {
    insta::assert_snapshot!(dump(">\n"), @r"
    Root
      Blockquote
    ");
}

#[test]
fn block_marker_interrupts_paragraph() {
    insta::assert_snapshot!(dump("a\n# b\n> c\n"), @r#"
    Root
      Paragraph
        Text "a"
      Heading depth=1
        Text "b"
      Blockquote
        Paragraph
          Text "c"
    "#);
}

#[test]
fn mixed_document() {
    let input = indoc! {"
    # Title

    Some *emphasis* here.

    > quoted

    ***
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Heading depth=1
        Text "Title"
      Paragraph
        Text "Some "
        Emphasis
          Text "emphasis"
        Text " here."
      Blockquote
        Paragraph
          Text "quoted"
      ThematicBreak
    "#);
}
