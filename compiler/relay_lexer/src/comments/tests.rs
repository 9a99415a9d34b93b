use super::*;
use pretty_assertions::assert_eq;

#[test]
fn removes_banner_comment() {
    let script = "/****\n * Common multi-line comment style.\n ****/text";
    assert_eq!(remove_comments(script), " text");
}

#[test]
fn removes_multiple_comments() {
    let script = "/****\n * Common multi-line comment style.\n ****/one/*\n    \
                  some comment that should be cut out! (tips)\n*/two";
    assert_eq!(remove_comments(script), " one two");
}

#[test]
fn keeps_code_between_comments() {
    assert_eq!(
        remove_comments("var a = 1; /* set */ a = 2; /* done */"),
        "var a = 1;   a = 2;  "
    );
}

#[test]
fn text_without_comments_is_unchanged() {
    let script = "if(a == 1) { run(); }";
    assert_eq!(remove_comments(script), script);
}

#[test]
fn unterminated_comment_is_left_alone() {
    assert_eq!(remove_comments("a; /* open"), "a; /* open");
}

#[test]
fn comment_markers_do_not_nest() {
    // The first `*/` closes the comment.
    assert_eq!(remove_comments("/* a /* b */ c */"), "  c */");
}

#[test]
fn adjacent_comments_each_become_a_space() {
    assert_eq!(remove_comments("x/**//**/y"), "x  y");
}
