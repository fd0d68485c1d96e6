use std::ops::Range;

/// Diagnostic kinds ordered by priority (highest priority first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Nothing usable could be extracted
    EmptyLiteral,
    MissingDelimiter,

    // Structure is damaged but a best-effort parse is possible
    UnterminatedLiteral,
    DelimiterAfterFlags,

    // Forward-compatible leftovers
    UnknownFlag,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnknownFlag => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Kinds that leave nothing to parse, regardless of policy.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::EmptyLiteral | Self::MissingDelimiter)
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingDelimiter => Some("e.g., `m/pattern/` or `s!from!to!g`"),
            Self::DelimiterAfterFlags => Some("escape the delimiter inside segments with `\\`"),
            Self::UnknownFlag => Some("recognized flags are `g`, `i`, `m`, `s` and `x`"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::EmptyLiteral => "empty literal",
            Self::MissingDelimiter => "expected a delimiter",
            Self::UnterminatedLiteral => "missing closing delimiter",
            Self::DelimiterAfterFlags => "delimiter after flags",
            Self::UnknownFlag => "unknown flag ignored",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnterminatedLiteral => "missing closing `{}`".to_string(),
            Self::DelimiterAfterFlags => "delimiter `{}` after flags".to_string(),
            Self::UnknownFlag => "unknown flag `{}` ignored".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range in the literal, underlined in rendered output.
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
    pub(crate) hint: Option<&'static str>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            hint: kind.default_hint(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            self.range.start,
            self.range.end,
            self.message
        )?;
        if let Some(hint) = self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}
