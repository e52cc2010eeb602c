//! Host element emission.

use crate::attributes::{classify_attributes, AttributeRules, ClassifiedAttribute, ClassifiedAttributes};
use crate::children::{has_content, ChildItem};
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::helpers::RuntimeHelper;
use crate::template::{Expr, ObjectExpr, Template, TemplateBuilder};
use crate::transform::Compiler;
use jsx_ast::Element;
use tracing::debug;

/// HTML void elements that are self-closing and never have children.
/// See: https://developer.mozilla.org/en-US/docs/Glossary/Void_element
const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns true if the given element name is an HTML void element.
pub fn is_void_element(name: &str) -> bool {
    HTML_VOID_ELEMENTS.contains(&name.to_lowercase().as_str())
}

impl Compiler {
    /// Emits a host element as markup.
    pub(crate) fn emit_host_element<'a, H>(&mut self, element: &'a Element<H>) -> Template<'a, H> {
        let tag = element.tag.as_str();
        let self_closing = is_void_element(tag) || !element.explicitly_closed;
        let classified = classify_attributes(&element.attributes, &AttributeRules::host(&self.options));

        if classified.malformed_dangerous_html {
            let message = format!(
                "<{}> `{}` must be an object literal with a `{}` key; the attribute is ignored",
                tag, self.options.dangerous_html_attribute, self.options.dangerous_html_key
            );
            self.report(Diagnostic::new(
                DiagnosticCode::MalformedDangerousHtml,
                element.tag.clone(),
                message,
            ));
        }

        let mut builder = TemplateBuilder::new();
        builder.push_str("<");
        builder.push_str(tag);

        if classified.has_spread() {
            builder.push_str(" ");
            builder.push_expr(Expr::SpreadAttributes(spread_attributes(&classified)));
            self.helpers.insert(RuntimeHelper::JoinHtml);
            self.helpers.insert(RuntimeHelper::UnsafeHtml);
        } else {
            for attr in &classified.attributes {
                match attr {
                    ClassifiedAttribute::Boolean { name, present } => {
                        if *present {
                            builder.push_str(" ");
                            builder.push_str(name);
                        }
                    }
                    ClassifiedAttribute::Static { name, value } => {
                        builder.push_str(&format!(" {}=\"{}\"", name, value));
                    }
                    ClassifiedAttribute::Dynamic { name, value } => {
                        builder.push_str(&format!(" {}=\"", name));
                        builder.push_expr(Expr::from_expression(*value));
                        builder.push_str("\"");
                    }
                    ClassifiedAttribute::Spread(_) | ClassifiedAttribute::DangerousHtml(_) => {}
                }
            }
        }

        let dangerous_html = classified.dangerous_html();

        if self_closing {
            if has_content(&element.children) || dangerous_html.is_some() {
                self.report(Diagnostic::new(
                    DiagnosticCode::VoidElementChildren,
                    element.tag.clone(),
                    format!("<{}> is self-closing; its children were dropped", tag),
                ));
            }
            builder.push_str(" />");
            return self.finish(builder);
        }

        builder.push_str(">");

        if let Some(payload) = dangerous_html {
            if has_content(&element.children) {
                debug!(tag = %tag, "children replaced by raw HTML payload");
            }
            builder.push_expr(Expr::from_expression(payload).into_unsafe());
            self.helpers.insert(RuntimeHelper::UnsafeHtml);
        } else {
            for item in self.process_children(&element.children) {
                match item {
                    ChildItem::Text(text) => builder.push_str(text),
                    ChildItem::Expression(handle) => builder.push_expr(Expr::Host(handle)),
                    ChildItem::Element(template) => builder.push_expr(Expr::Template(template)),
                    ChildItem::Fragment(mut items) => {
                        if items.len() > 1 {
                            builder.push_str(&self.options.fragment_start_marker);
                            builder.push_expr(Expr::List(items));
                            builder.push_str(&self.options.fragment_end_marker);
                        } else if let Some(item) = items.pop() {
                            builder.push_expr(item);
                        }
                    }
                }
            }
        }

        builder.push_str("</");
        builder.push_str(tag);
        builder.push_str(">");
        self.finish(builder)
    }
}

/// Builds the merged attribute object for an element with spreads: the
/// named attributes in order, then each spread left to right.
fn spread_attributes<'a, H>(classified: &ClassifiedAttributes<'a, H>) -> ObjectExpr<'a, H> {
    let mut object = ObjectExpr::new();
    for attr in &classified.attributes {
        match attr {
            ClassifiedAttribute::Static { name, value } => {
                object.push_field(name.clone(), Expr::Str(value.to_string()))
            }
            ClassifiedAttribute::Dynamic { name, value } => {
                object.push_field(name.clone(), Expr::from_expression(*value))
            }
            ClassifiedAttribute::Boolean { name, present } => {
                if *present {
                    object.push_field(name.clone(), Expr::Bool(true));
                }
            }
            ClassifiedAttribute::Spread(_) | ClassifiedAttribute::DangerousHtml(_) => {}
        }
    }
    for attr in &classified.attributes {
        if let ClassifiedAttribute::Spread(handle) = attr {
            object.push_spread(*handle);
        }
    }
    object
}
