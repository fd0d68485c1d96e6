//! Free-spacing (`x` flag) preprocessing.

/// Remove whitespace and `#` comments outside character classes.
///
/// Escaped characters are copied through with their backslash and never
/// start a comment, open or close a class, or count as whitespace. Inside a
/// class both `#` and whitespace are literal. Nested classes such as
/// `[[:space:]#]` are tracked by depth.
pub fn strip_extended(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut class_depth = 0usize;
    let mut in_comment = false;

    while let Some(c) = chars.next() {
        if in_comment {
            in_comment = c != '\n';
            continue;
        }

        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
                continue;
            }
            '[' => {
                class_depth += 1;
                out.push(c);
                // A `]` right after the opening bracket (or `[^`) is literal.
                if class_depth == 1 {
                    if chars.peek() == Some(&'^') {
                        out.push('^');
                        chars.next();
                    }
                    if chars.peek() == Some(&']') {
                        out.push(']');
                        chars.next();
                    }
                }
                continue;
            }
            ']' => {
                class_depth = class_depth.saturating_sub(1);
            }
            '#' if class_depth == 0 => {
                in_comment = true;
                continue;
            }
            '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' if class_depth == 0 => {
                continue;
            }
            _ => {}
        }

        out.push(c);
    }

    out
}
