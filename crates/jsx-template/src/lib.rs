//! JSX to HTML template compilation for server-side rendering.
//!
//! This crate compiles a JSX tree into a template: literal HTML text
//! interleaved with embedded expressions, rendered by a tagged-template
//! runtime without a virtual DOM. It handles:
//! - Emitting host elements as markup, with void and self-closing handling
//! - Reducing components to a single call with a props object
//! - Flattening fragments into lists of items
//! - Tracking which runtime helpers the output needs
//! - Generating JavaScript source and rendering templates in-process
//!
//! # Example
//!
//! ```
//! use jsx_ast::{Attribute, Element, Node, SmolStr};
//! use jsx_template::{compile, generate, render, CodegenOptions, CompileOptions, MapScope};
//!
//! // <p class="greeting">Hello, {name}</p>
//! let node: Node = Element::new("p")
//!     .with_attribute(Attribute::text("className", "greeting"))
//!     .with_child(Node::text("Hello, "))
//!     .with_child(Node::expression(SmolStr::new("name")))
//!     .into();
//!
//! let result = compile(&node, CompileOptions::default());
//! assert_eq!(
//!     generate(&result.template, &CodegenOptions::default()),
//!     "html`<p class=\"greeting\">Hello,${name}</p>`"
//! );
//!
//! let scope: MapScope<SmolStr> = MapScope::new().with_value("name", "<World>");
//! assert_eq!(
//!     render(&result.template, &scope).unwrap(),
//!     "<p class=\"greeting\">Hello,&lt;World&gt;</p>"
//! );
//! ```

mod attributes;
mod children;
mod codegen;
mod component;
mod diagnostic;
mod element;
mod error;
mod fragment;
mod helpers;
mod render;
mod tag;
mod template;
mod transform;

pub use attributes::{classify_attributes, AttributeRules, ClassifiedAttribute, ClassifiedAttributes};
pub use codegen::{generate, generate_expr, CodegenOptions};
pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use element::is_void_element;
pub use error::{CompileError, RenderError};
pub use helpers::{RuntimeHelper, RuntimeHelpers};
pub use render::{escape_html, evaluate, render, MapScope, Scope, Value};
pub use tag::{classify_tag, TagKind};
pub use template::{Expr, ObjectEntry, ObjectExpr, Segment, Template, TemplateBuilder};
pub use transform::{
    compile, compile_fragment, compile_fragment_node, CompileOptions, CompileResult,
    FragmentResult, FRAGMENT_END_MARKER, FRAGMENT_START_MARKER,
};
