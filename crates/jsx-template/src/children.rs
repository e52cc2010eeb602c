//! Child classification shared by the element, component and fragment
//! emitters.

use crate::template::{Expr, Template};
use crate::transform::Compiler;
use jsx_ast::Node;

/// A classified child.
#[derive(Debug)]
pub(crate) enum ChildItem<'a, H> {
    /// Trimmed, non-empty text.
    Text(&'a str),
    /// An expression slot.
    Expression(&'a H),
    /// A nested element, compiled.
    Element(Template<'a, H>),
    /// A nested fragment, flattened.
    Fragment(Vec<Expr<'a, H>>),
}

impl Compiler {
    /// Classifies children in order, dropping whitespace-only text and empty
    /// expressions.
    pub(crate) fn process_children<'a, H>(&mut self, children: &'a [Node<H>]) -> Vec<ChildItem<'a, H>> {
        let mut items = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Node::Text(text) => {
                    let trimmed = trim_whitespace(&text.raw);
                    if !trimmed.is_empty() {
                        items.push(ChildItem::Text(trimmed));
                    }
                }
                Node::Expression(slot) => items.push(ChildItem::Expression(&slot.handle)),
                Node::EmptyExpression => {}
                Node::Element(element) => items.push(ChildItem::Element(self.compile_element(element))),
                Node::Fragment(fragment) => {
                    items.push(ChildItem::Fragment(self.flatten_fragment(&fragment.children)))
                }
            }
        }
        items
    }
}

/// Trims JSX whitespace: ASCII space, tab, CR and LF. Other whitespace,
/// such as a non-breaking space, is content.
pub(crate) fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Returns true if any child would produce output.
pub(crate) fn has_content<H>(children: &[Node<H>]) -> bool {
    children.iter().any(|child| match child {
        Node::Text(text) => !trim_whitespace(&text.raw).is_empty(),
        Node::EmptyExpression => false,
        _ => true,
    })
}
