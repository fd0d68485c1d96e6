use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::flags::Flags;

fn parse(segment: &str) -> (Flags, Diagnostics) {
    let mut diag = Diagnostics::new();
    let flags = Flags::parse(segment, 0, &mut diag);
    (flags, diag)
}

#[test]
fn recognized_flags() {
    let (flags, diag) = parse("gixms");
    assert!(diag.is_empty());
    assert_eq!(
        flags,
        Flags {
            global: true,
            ignore_case: true,
            multi_line: true,
            dot_matches_new_line: true,
            extended: true,
        }
    );
}

#[test]
fn empty_segment() {
    let (flags, diag) = parse("");
    assert_eq!(flags, Flags::default());
    assert!(diag.is_empty());
}

#[test]
fn unknown_flag_warns() {
    let mut diag = Diagnostics::new();
    let flags = Flags::parse("gq", 10, &mut diag);
    assert!(flags.global);
    assert_eq!(diag.kinds(), vec![DiagnosticKind::UnknownFlag]);
    assert!(!diag.has_errors());
    assert_eq!(diag.iter().next().unwrap().range(), 11..12);
}

#[test]
fn whitespace_and_comments_skipped() {
    let (flags, diag) =
        parse("gx            # finally some flags, x is important\n\t");
    assert!(diag.is_empty());
    assert!(flags.global);
    assert!(flags.extended);
    assert!(!flags.ignore_case);
    assert!(!flags.multi_line);
    assert!(!flags.dot_matches_new_line);
}

#[test]
fn native_prefix_order() {
    let (flags, _) = parse("smi");
    assert_eq!(flags.native_prefix().as_deref(), Some("(?ims)"));

    let (flags, _) = parse("si");
    assert_eq!(flags.apply_native("a.b"), "(?is)a.b");
}

#[test]
fn global_and_extended_not_native() {
    let (flags, _) = parse("gx");
    assert_eq!(flags.native_prefix(), None);
    assert_eq!(flags.apply_native("abc"), "abc");
}

#[test]
fn display_is_canonical() {
    let (flags, _) = parse("xsg");
    insta::assert_snapshot!(flags.to_string(), @"gsx");
}
