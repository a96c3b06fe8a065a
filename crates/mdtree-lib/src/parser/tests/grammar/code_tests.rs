use indoc::indoc;

use super::super::{dump, dump_with_spans};

#[test]
fn fenced_code_with_language() {
    let input = indoc! {"
    ```rust
    fn main() {}
    ```
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Code lang=rust "fn main() {}"
    "#);
}

#[test]
fn info_string_splits_into_lang_and_meta() {
    let input = indoc! {"
    ~~~python title=x hl
    print(1)
    ~~~
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Code lang=python meta="title=x hl" "print(1)"
    "#);
}

#[test]
fn fenced_span_covers_both_fences() {
    insta::assert_snapshot!(dump_with_spans("```\nx\n```\n"), @r#"
    Root [0..10]
      Code [0..9] "x"
    "#);
}

#[test]
fn fenced_content_is_verbatim() {
    let input = indoc! {"
    ```
    # not a heading
    * not a list

    **not strong**
    ```
    "};

    insta::assert_snapshot!(dump(input), @r##"
    Root
      Code "# not a heading\n* not a list\n\n**not strong**"
    "##);
}

#[test]
fn indented_closing_fence() {
    insta::assert_snapshot!(dump("```\nx\n  ```\nafter\n"), @r#"
    Root
      Code "x"
      Paragraph
        Text "after"
    "#);
}

#[test]
fn unclosed_fence_runs_to_end_of_input() {
    insta::assert_snapshot!(dump("```\ncode\n"), @r#"
    Root
      Code "code"
    "#);
}

#[test]
fn empty_fenced_block() {
    insta::assert_snapshot!(dump("```\n```\n"), @r#"
    Root
      Code ""
    "#);
}

#[test]
fn indented_code() {
    let input = "    let x = 1;\n    let y = 2;\n";

    insta::assert_snapshot!(dump(input), @r#"
    Root
      Code "let x = 1;\nlet y = 2;"
    "#);
}

#[test]
fn indentation_past_four_spaces_is_content() {
    insta::assert_snapshot!(dump("      deeper\n"), @r#"
    Root
      Code "  deeper"
    "#);
}

#[test]
fn tab_starts_indented_code() {
    insta::assert_snapshot!(dump("\tcode\n"), @r#"
    Root
      Code "code"
    "#);
}

#[test]
fn blank_lines_inside_indented_code_are_kept() {
    insta::assert_snapshot!(dump("    a\n\n    b\n"), @r#"
    Root
      Code "a\n\nb"
    "#);
}

#[test]
fn unindented_line_ends_indented_code() {
    insta::assert_snapshot!(dump("    code\ntext\n"), @r#"
    Root
      Code "code"
      Paragraph
        Text "text"
    "#);
}

#[test]
fn indented_code_span_starts_at_indentation() {
    insta::assert_snapshot!(dump_with_spans("    ab\n"), @r#"
    Root [0..7]
      Code [0..6] "ab"
    "#);
}

#[test]
fn indented_code_inside_list_item() {
    let input = indoc! {"
    * a

    \t\tcode
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
          Code "code"
    "#);
}

#[test]
fn fenced_code_inside_list_item_closes() {
    let input = "* a\n\n\t```\n\tx\n\t```\n* b\n";

    insta::assert_snapshot!(dump(input), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
          Code "x"
        ListItem
          Paragraph
            Text "b"
    "#);
}

#[test]
fn fenced_code_keeps_tabs_past_the_fence_indent() {
    let input = "* a\n\n\t```\n\t\tx\n\t```\n";

    insta::assert_snapshot!(dump(input), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
          Code "\tx"
    "#);
}
