//! Fragment flattening.

use crate::children::ChildItem;
use crate::template::Expr;
use crate::transform::Compiler;
use jsx_ast::{Fragment, Node};

impl Compiler {
    /// Flattens the children of a fragment into an ordered list of items.
    /// Nested fragments are spliced in place.
    pub(crate) fn flatten_fragment<'a, H>(&mut self, children: &'a [Node<H>]) -> Vec<Expr<'a, H>> {
        let mut items = Vec::new();
        for item in self.process_children(children) {
            match item {
                ChildItem::Text(text) => items.push(Expr::Template(self.literal_template(text))),
                ChildItem::Expression(handle) => items.push(Expr::Host(handle)),
                ChildItem::Element(template) => items.push(Expr::Template(template)),
                ChildItem::Fragment(nested) => items.extend(nested),
            }
        }
        items
    }

    /// Compiles a bare fragment. A single item is returned unwrapped, any
    /// other count as a list.
    pub(crate) fn fragment_value<'a, H>(&mut self, fragment: &'a Fragment<H>) -> Expr<'a, H> {
        let mut items = self.flatten_fragment(&fragment.children);
        match items.len() {
            1 => items.remove(0),
            _ => Expr::List(items),
        }
    }
}
