use indoc::indoc;

use crate::extended::strip_extended;

#[test]
fn strips_whitespace() {
    assert_eq!(strip_extended("a b\tc\n d"), "abcd");
}

#[test]
fn strips_comments() {
    assert_eq!(strip_extended("a # comment\nb"), "ab");
    assert_eq!(strip_extended("# whole line\n^x$ # trailing"), "^x$");
}

#[test]
fn class_whitespace_preserved() {
    assert_eq!(strip_extended(r"[ \t] x"), r"[ \t]x");
    assert_eq!(strip_extended("[T #] (a)"), "[T #](a)");
}

#[test]
fn escapes_pass_through() {
    assert_eq!(strip_extended(r"a\#b"), r"a\#b");
    assert_eq!(strip_extended(r"a\ b"), r"a\ b");
    assert_eq!(strip_extended(r"\[ a \]"), r"\[a\]");
}

#[test]
fn nested_and_bracket_first_classes() {
    assert_eq!(strip_extended("[[:space:] #]x y"), "[[:space:] #]xy");
    assert_eq!(strip_extended("[] #]a b"), "[] #]ab");
    assert_eq!(strip_extended("[^] ]c d"), "[^] ]cd");
}

#[test]
fn trailing_backslash_kept() {
    assert_eq!(strip_extended("a \\"), "a\\");
}

#[test]
fn documented_pattern() {
    let pattern = indoc! {r#"
        # this is a comment which encompasses the whole line
        ^
        (?P<username>\w+) # This is a comment too
        :\s+
        "(?P<surname>\w+)"
        \s+ - \s+
        (?P<year>\d{4})
        [T #]
        (?:\.
        (?P<decimal>\d{1,4}))?
        $
    "#};
    assert_eq!(
        strip_extended(pattern),
        r#"^(?P<username>\w+):\s+"(?P<surname>\w+)"\s+-\s+(?P<year>\d{4})[T #](?:\.(?P<decimal>\d{1,4}))?$"#
    );
}
