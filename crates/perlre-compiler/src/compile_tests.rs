use indoc::indoc;

use crate::compile::{ParsePolicy, compile_literal};
use crate::diagnostics::DiagnosticKind;
use crate::literal::Mode;
use crate::{Error, UnsupportedFeature};

#[test]
fn dump_named_substitution() {
    let lit = compile_literal("s!(?P<aleph>[e])!!gi", ParsePolicy::Strict).unwrap();
    insta::assert_snapshot!(lit.dump(), @r"
    mode: substitute
    delimiter: `!`
    pattern: `(?P<aleph>[e])`
    replacement: ``
    flags: `gi`
    captures: named
    engine: `(?i)(?P<aleph>[e])`
    ");
}

#[test]
fn dump_plain_match() {
    let lit = compile_literal("m/kalle ankka/", ParsePolicy::Strict).unwrap();
    insta::assert_snapshot!(lit.dump(), @r"
    mode: match
    delimiter: `/`
    pattern: `kalle ankka`
    flags: ``
    captures: none
    engine: `kalle ankka`
    ");
}

#[test]
fn escaped_delimiter_matches_literally() {
    let lit = compile_literal(r"s/a\/b//", ParsePolicy::Strict).unwrap();
    assert!(lit.regex().is_match("xa/bx"));
    assert!(!lit.regex().is_match("ab"));
}

#[test]
fn extended_strips_pattern_and_replacement() {
    let literal = indoc! {"
        s! # Do a substitution operation, start the matching pattern
        (?:party|body) # Non-capturing substitution happening here
        !              # close the matching pattern and begin with the substituting pattern
        code
        !gx            # finally some flags, x is important to allow documenting the regexp
    "};
    let lit = compile_literal(literal, ParsePolicy::Strict).unwrap();
    assert_eq!(lit.pattern(), "(?:party|body)");
    assert_eq!(lit.replacement(), "code");
    assert!(lit.is_global());
    assert!(lit.parsed_flags().extended);
    assert!(!lit.parsed_flags().ignore_case);
    assert!(!lit.has_captures());
    assert!(lit.diagnostics().is_empty());
}

#[test]
fn native_flags_prefixed() {
    let lit = compile_literal("m/^a.$/gms", ParsePolicy::Strict).unwrap();
    assert_eq!(lit.pattern(), "^a.$");
    assert_eq!(lit.engine_pattern(), "(?ms)^a.$");
    assert!(lit.regex().is_match("x\nab\ny"));

    let lit = compile_literal("m/a.b/s", ParsePolicy::Strict).unwrap();
    assert!(lit.regex().is_match("a\nb"));
}

#[test]
fn raw_flags_preserved() {
    let lit = compile_literal("m/a/ g i ", ParsePolicy::Strict).unwrap();
    assert_eq!(lit.flags(), " g i ");
    assert!(lit.is_global());
    assert!(lit.parsed_flags().ignore_case);
}

#[test]
fn group_count_ignores_non_capturing() {
    let lit = compile_literal("m/(a)(?:b)(?P<c>c)/", ParsePolicy::Strict).unwrap();
    assert_eq!(lit.group_count(), 2);
    assert!(lit.has_named_captures());
}

#[test]
fn pattern_compile_error() {
    let err = compile_literal("m/(ab/", ParsePolicy::Strict).unwrap_err();
    let Error::PatternCompile { pattern, .. } = err else {
        panic!("expected compile error, got {err:?}");
    };
    assert_eq!(pattern, "(ab");
}

#[test]
fn backreference_rejected() {
    let err = compile_literal(r"m/(a)\1/", ParsePolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedFeature {
            feature: UnsupportedFeature::Backreference,
            ..
        }
    ));
    insta::assert_snapshot!(
        err.to_string(),
        @r"pattern `(a)\1` uses backreferences, which the engine does not support"
    );
}

#[test]
fn escape_backreferences_rejected() {
    for literal in [r"m/(?P<w>a)\k<w>/", r"m/(?P<w>a)\k{w}/", r"m/(a)\g1/"] {
        let err = compile_literal(literal, ParsePolicy::Strict).unwrap_err();
        assert!(
            matches!(
                err,
                Error::UnsupportedFeature {
                    feature: UnsupportedFeature::Backreference,
                    ..
                }
            ),
            "{literal}: {err:?}"
        );
    }

    // Other unknown escapes still come back from the engine.
    let err = compile_literal(r"m/\q/", ParsePolicy::Strict).unwrap_err();
    assert!(matches!(err, Error::PatternCompile { .. }), "{err:?}");
}

#[test]
fn look_around_rejected() {
    for literal in ["m/(?<=a)b/", "m/a(?=b)/", "m/a(?!b)/"] {
        let err = compile_literal(literal, ParsePolicy::Strict).unwrap_err();
        assert!(
            matches!(
                err,
                Error::UnsupportedFeature {
                    feature: UnsupportedFeature::LookAround,
                    ..
                }
            ),
            "{literal}: {err:?}"
        );
    }
}

#[test]
fn strict_rejects_unterminated() {
    let err = compile_literal("m/abc", ParsePolicy::Strict).unwrap_err();
    let Error::MalformedLiteral {
        literal,
        diagnostics,
    } = err
    else {
        panic!("expected malformed literal");
    };
    assert_eq!(literal, "m/abc");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UnterminatedLiteral]);
}

#[test]
fn strict_rejects_escaped_final_delimiter() {
    let err = compile_literal(r"m/a\/", ParsePolicy::Strict).unwrap_err();
    assert!(matches!(err, Error::MalformedLiteral { .. }));
}

#[test]
fn lenient_keeps_going() {
    let lit = compile_literal("m/abc", ParsePolicy::Lenient).unwrap();
    assert_eq!(lit.pattern(), "abc");
    assert!(lit.diagnostics().has_errors());
    assert!(lit.regex().is_match("xabcx"));

    let lit = compile_literal("m/a/g/", ParsePolicy::Lenient).unwrap();
    assert!(lit.is_global());
    assert_eq!(
        lit.diagnostics().kinds(),
        vec![DiagnosticKind::DelimiterAfterFlags]
    );
}

#[test]
fn empty_fails_under_both_policies() {
    for policy in [ParsePolicy::Strict, ParsePolicy::Lenient] {
        assert!(matches!(
            compile_literal("", policy),
            Err(Error::MalformedLiteral { .. })
        ));
        assert!(matches!(
            compile_literal("s", policy),
            Err(Error::MalformedLiteral { .. })
        ));
    }
}

#[test]
fn unknown_flag_is_not_fatal() {
    let lit = compile_literal("m/a/gq", ParsePolicy::Strict).unwrap();
    assert!(lit.is_global());
    assert_eq!(lit.diagnostics().kinds(), vec![DiagnosticKind::UnknownFlag]);
}

#[test]
fn malformed_display() {
    let err = compile_literal("s/a/b", ParsePolicy::Strict).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"malformed literal `s/a/b`: error at 1..5: missing closing `/`"
    );
}

#[test]
fn parsing_is_idempotent() {
    let literal = r"s/(?P<w>\w+)\s*#/${w}!/gix";
    let a = compile_literal(literal, ParsePolicy::Strict).unwrap();
    let b = compile_literal(literal, ParsePolicy::Strict).unwrap();
    assert_eq!(a.pattern(), b.pattern());
    assert_eq!(a.replacement(), b.replacement());
    assert_eq!(a.flags(), b.flags());
    assert_eq!(a.has_captures(), b.has_captures());
    assert_eq!(a.has_named_captures(), b.has_named_captures());
    assert_eq!(a.mode(), Mode::Substitute);
    assert_eq!(a.pattern(), r"(?P<w>\w+)\s*");
}
