//! Error types.

use smol_str::SmolStr;
use thiserror::Error;

/// An error returned by the compile entry points.
///
/// Irregular input never produces an error; it is reported through
/// [`Diagnostic`](crate::Diagnostic)s. Errors are reserved for callers
/// breaking the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The fragment entry point was given a node that is not a fragment.
    #[error("expected a fragment, found {found}")]
    NotAFragment {
        /// The kind of node that was passed.
        found: &'static str,
    },
}

/// An error raised while rendering a template with the reference runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A host expression has no value in the scope.
    #[error("unbound expression: {expression}")]
    UnboundExpression {
        /// The debug rendering of the expression handle.
        expression: String,
    },

    /// A component name has no render function in the scope.
    #[error("unknown component: <{name}>")]
    UnknownComponent {
        /// The component name.
        name: SmolStr,
    },

    /// A component render function failed.
    #[error("component <{name}> failed: {message}")]
    Component {
        /// The component name.
        name: SmolStr,
        /// A description of the failure.
        message: String,
    },
}
