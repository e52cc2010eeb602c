//! JavaScript code generation for compiled templates.
//!
//! Prints a [`Template`] as a tagged template literal against the runtime
//! helpers named in [`CodegenOptions`]. Host handles are printed through
//! their `Display` implementation, so they must already be valid source.

use crate::helpers::RuntimeHelper;
use crate::template::{Expr, ObjectEntry, ObjectExpr, Segment, Template};
use jsx_ast::SmolStr;
use std::fmt::Display;

/// Names of the runtime helpers in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodegenOptions {
    /// The template tag that escapes embedded values.
    pub html: SmolStr,
    /// The wrapper that marks a value as trusted HTML.
    pub unsafe_html: SmolStr,
    /// The function joining a list of templates with a separator.
    pub join_html: SmolStr,
}

impl CodegenOptions {
    /// Returns the name configured for a helper.
    pub fn helper_name(&self, helper: RuntimeHelper) -> &str {
        match helper {
            RuntimeHelper::Html => &self.html,
            RuntimeHelper::UnsafeHtml => &self.unsafe_html,
            RuntimeHelper::JoinHtml => &self.join_html,
        }
    }
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            html: SmolStr::new_static(RuntimeHelper::Html.name()),
            unsafe_html: SmolStr::new_static(RuntimeHelper::UnsafeHtml.name()),
            join_html: SmolStr::new_static(RuntimeHelper::JoinHtml.name()),
        }
    }
}

/// Generates JavaScript source for a template.
pub fn generate<H: Display>(template: &Template<'_, H>, options: &CodegenOptions) -> String {
    let mut codegen = Codegen {
        options,
        out: String::new(),
    };
    codegen.template(template);
    codegen.out
}

/// Generates JavaScript source for a single value, such as the result of
/// compiling a bare fragment.
pub fn generate_expr<H: Display>(expr: &Expr<'_, H>, options: &CodegenOptions) -> String {
    let mut codegen = Codegen {
        options,
        out: String::new(),
    };
    codegen.expr(expr);
    codegen.out
}

struct Codegen<'o> {
    options: &'o CodegenOptions,
    out: String,
}

impl Codegen<'_> {
    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn template<H: Display>(&mut self, template: &Template<'_, H>) {
        self.out.push_str(&self.options.html);
        self.push("`");
        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => self.literal(text),
                Segment::Expression(expr) => {
                    self.push("${");
                    self.expr(expr);
                    self.push("}");
                }
            }
        }
        self.push("`");
    }

    /// Escapes text for use inside a template literal.
    fn literal(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' => self.push("\\\\"),
                '`' => self.push("\\`"),
                '$' if chars.peek() == Some(&'{') => self.push("\\$"),
                _ => self.out.push(c),
            }
        }
    }

    fn string(&mut self, value: &str) {
        let quoted = serde_json::Value::String(value.to_string()).to_string();
        self.push(&quoted);
    }

    fn expr<H: Display>(&mut self, expr: &Expr<'_, H>) {
        match expr {
            Expr::Host(handle) => {
                let source = handle.to_string();
                self.push(&source);
            }
            Expr::Str(value) => self.string(value),
            Expr::Bool(value) => self.push(if *value { "true" } else { "false" }),
            Expr::Template(template) => self.template(template),
            Expr::List(items) => {
                self.push("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.expr(item);
                }
                self.push("]");
            }
            Expr::Object(object) => self.object(object),
            Expr::Unsafe(inner) => {
                self.out.push_str(&self.options.unsafe_html);
                self.push("(");
                self.expr(inner);
                self.push(")");
            }
            Expr::SpreadAttributes(object) => self.spread_attributes(object),
            Expr::Call { callee, props } => {
                self.push(callee);
                self.push("(");
                self.object(props);
                self.push(")");
            }
        }
    }

    fn object<H: Display>(&mut self, object: &ObjectExpr<'_, H>) {
        if object.is_empty() {
            self.push("{}");
            return;
        }
        self.push("{ ");
        for (i, entry) in object.entries.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            match entry {
                ObjectEntry::Field { key, value } => {
                    self.string(key);
                    self.push(": ");
                    self.expr(value);
                }
                ObjectEntry::Spread(handle) => {
                    self.push("...");
                    let source = handle.to_string();
                    self.push(&source);
                }
            }
        }
        self.push(" }");
    }

    fn spread_attributes<H: Display>(&mut self, object: &ObjectExpr<'_, H>) {
        let html = self.options.html.clone();
        let unsafe_html = self.options.unsafe_html.clone();
        self.push(&unsafe_html);
        self.push("(");
        self.out.push_str(&self.options.join_html);
        self.push("(Object.entries(");
        self.object(object);
        self.push(").filter(([, v]) => v != null && v !== false).map(([k, v]) => v === true ? ");
        self.push(&format!(
            "{unsafe_html}(k) : {html}`${{{unsafe_html}(k)}}=\"${{v}}\"`), \" \"))"
        ));
    }
}
