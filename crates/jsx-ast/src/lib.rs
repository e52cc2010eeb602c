//! JSX syntax tree for the HTML template compiler.
//!
//! This crate defines the input grammar consumed by `jsx-template`:
//! - Nodes: elements, fragments, text, expression slots and empty expressions
//! - Attributes: named (with optional string or expression value) and spreads
//! - Expressions: the statically known literals plus opaque host handles
//!
//! Parsing source text into this tree is left to the host; the types are
//! plain data so any parser can produce them.
//!
//! # Example
//!
//! ```
//! use jsx_ast::{Attribute, Element, Node};
//! use smol_str::SmolStr;
//!
//! // <div id={x}>hello</div>
//! let node: Node = Element::new("div")
//!     .with_attribute(Attribute::host("id", SmolStr::new("x")))
//!     .with_child(Node::text("hello"))
//!     .into();
//! assert_eq!(node.kind_name(), "element");
//! ```

mod ast;

pub use ast::*;
pub use smol_str::SmolStr;
