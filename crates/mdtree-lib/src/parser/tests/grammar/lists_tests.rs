use indoc::indoc;

use super::super::{dump, dump_with_spans};

#[test]
fn two_items() {
    insta::assert_snapshot!(dump("* item1\n* item2\n"), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "item1"
        ListItem
          Paragraph
            Text "item2"
    "#);
}

#[test]
fn any_bullet_marker_continues_the_list() {
    insta::assert_snapshot!(dump("* a\n- b\n+ c\n"), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
        ListItem
          Paragraph
            Text "b"
        ListItem
          Paragraph
            Text "c"
    "#);
}

#[test]
fn item_spans_start_at_marker() {
    insta::assert_snapshot!(dump_with_spans("- a\n- bc\n"), @r#"
    Root [0..9]
      List ordered=false start=1 [0..8]
        ListItem [0..3]
          Paragraph [2..3]
            Text [2..3] "a"
        ListItem [4..8]
          Paragraph [6..8]
            Text [6..8] "bc"
    "#);
}

#[test]
fn tab_indented_marker_nests_a_list() {
    let input = indoc! {"
    * a
    \t* b
    * c
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
          List ordered=false start=1
            ListItem
              Paragraph
                Text "b"
        ListItem
          Paragraph
            Text "c"
    "#);
}

#[test]
fn indentation_past_two_tabs_is_clamped() {
    let input = indoc! {"
    * a
    \t* b
    \t\t* c
    \t\t\t* d
    \t\te
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
          List ordered=false start=1
            ListItem
              Paragraph
                Text "b"
              List ordered=false start=1
                ListItem
                  Paragraph
                    Text "c"
                  Code "* d"
                  Paragraph
                    Text "e"
    "#);
}

#[test]
fn indented_block_after_blank_line_stays_in_item() {
    let input = indoc! {"
    * first

    \tsecond
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "first"
          Paragraph
            Text "second"
    "#);
}

#[test]
fn unindented_paragraph_ends_the_list() {
    let input = indoc! {"
    * item

    after
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "item"
      Paragraph
        Text "after"
    "#);
}

#[test]
fn blank_line_between_items_keeps_one_list() {
    insta::assert_snapshot!(dump("* a\n\n* b\n"), @r#"
    Root
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
        ListItem
          Paragraph
            Text "b"
    "#);
}

#[test]
fn empty_item() {
    insta::assert_snapshot!(dump("* \n* b\n"), @r#"
    Root
      List ordered=false start=1
        ListItem
        ListItem
          Paragraph
            Text "b"
    "#);
}

#[test]
fn item_holding_a_blockquote() {
    insta::assert_snapshot!(dump("* > q\n"), @r#"
    Root
      List ordered=false start=1
        ListItem
          Blockquote
            Paragraph
              Text "q"
    "#);
}

#[test]
fn list_inside_blockquote() {
    insta::assert_snapshot!(dump("> * a\n> * b\n"), @r#"
    Root
      Blockquote
        List ordered=false start=1
          ListItem
            Paragraph
              Text "a"
      Blockquote
        List ordered=false start=1
          ListItem
            Paragraph
              Text "b"
    "#);
}

#[test]
fn list_after_paragraph() {
    insta::assert_snapshot!(dump("intro\n* a\n"), @r#"
    Root
      Paragraph
        Text "intro"
      List ordered=false start=1
        ListItem
          Paragraph
            Text "a"
    "#);
}
