//! Diagnostic types.
//!
//! Input the compiler cannot render faithfully degrades to a best-effort
//! output and is reported here instead of failing the whole compile.

use smol_str::SmolStr;

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The tag name of the element the diagnostic refers to.
    pub tag: SmolStr,
    /// The diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(code: DiagnosticCode, tag: impl Into<SmolStr>, message: impl Into<String>) -> Self {
        Self {
            code,
            tag: tag.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticCode {
    /// `unsupported-tag-name`: dotted, namespaced or otherwise unrenderable
    /// tag; the element compiles to an empty template.
    UnsupportedTagName,
    /// `malformed-dangerous-html`: the raw HTML attribute was not an object
    /// literal with an `__html` key; the attribute is ignored.
    MalformedDangerousHtml,
    /// `void-element-children`: a self-closing element was given children;
    /// the children are dropped.
    VoidElementChildren,
}

impl DiagnosticCode {
    /// Returns the diagnostic code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UnsupportedTagName => "unsupported-tag-name",
            DiagnosticCode::MalformedDangerousHtml => "malformed-dangerous-html",
            DiagnosticCode::VoidElementChildren => "void-element-children",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
