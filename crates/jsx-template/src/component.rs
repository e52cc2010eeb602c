//! Component emission.
//!
//! A component never produces markup of its own. Its attributes become a
//! props object, its children are collected under `children`, and the whole
//! element reduces to a single call expression.

use crate::attributes::{classify_attributes, AttributeRules, ClassifiedAttribute};
use crate::children::ChildItem;
use crate::template::{Expr, ObjectExpr};
use crate::transform::Compiler;
use jsx_ast::{Element, SmolStr};

impl Compiler {
    /// Emits a component as `tag(props)`.
    pub(crate) fn emit_component<'a, H>(&mut self, element: &'a Element<H>) -> Expr<'a, H> {
        let classified =
            classify_attributes(&element.attributes, &AttributeRules::component(&self.options));

        let mut props = ObjectExpr::new();
        for attr in classified.attributes {
            match attr {
                ClassifiedAttribute::Static { name, value } => {
                    props.push_field(name, Expr::Str(value.to_string()))
                }
                ClassifiedAttribute::Dynamic { name, value } => {
                    props.push_field(name, Expr::from_expression(value))
                }
                ClassifiedAttribute::Boolean { name, present } => {
                    if present {
                        props.push_field(name, Expr::Bool(true));
                    }
                }
                ClassifiedAttribute::Spread(handle) => props.push_spread(handle),
                // Component rules never single out the raw HTML attribute.
                ClassifiedAttribute::DangerousHtml(_) => {}
            }
        }

        let mut children = Vec::new();
        for item in self.process_children(&element.children) {
            match item {
                ChildItem::Text(text) => children.push(Expr::Str(text.to_string())),
                ChildItem::Expression(handle) => children.push(Expr::Host(handle)),
                ChildItem::Element(template) => children.push(Expr::Template(template)),
                ChildItem::Fragment(mut items) => {
                    if items.len() > 1 {
                        children.push(Expr::List(items));
                    } else {
                        children.extend(items.pop());
                    }
                }
            }
        }

        if children.len() > 1 {
            props.push_field(SmolStr::new_static("children"), Expr::List(children));
        } else if let Some(child) = children.pop() {
            props.push_field(SmolStr::new_static("children"), child);
        }

        Expr::Call {
            callee: element.tag.clone(),
            props,
        }
    }
}
