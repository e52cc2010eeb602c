//! Compile entry points and the per-call compile context.

use crate::children::trim_whitespace;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::error::CompileError;
use crate::helpers::{RuntimeHelper, RuntimeHelpers};
use crate::tag::{classify_tag, TagKind};
use crate::template::{Expr, Template, TemplateBuilder};
use jsx_ast::{Element, Fragment, Node, SmolStr};
use tracing::warn;

/// Comment emitted before a multi-item fragment inside a host element.
pub const FRAGMENT_START_MARKER: &str = "<!-- Fragment Start -->";
/// Comment emitted after a multi-item fragment inside a host element.
pub const FRAGMENT_END_MARKER: &str = "<!-- Fragment End -->";

/// Options for compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompileOptions {
    /// The attribute that injects raw HTML into a host element.
    pub dangerous_html_attribute: SmolStr,
    /// The key of the raw HTML attribute's object literal holding the payload.
    pub dangerous_html_key: SmolStr,
    /// The attribute name emitted as `class` on host elements.
    pub class_name_alias: SmolStr,
    /// Whether the `class` rename also applies to component props.
    pub rename_class_name_on_components: bool,
    /// Comment emitted before a multi-item fragment inside a host element.
    pub fragment_start_marker: String,
    /// Comment emitted after a multi-item fragment inside a host element.
    pub fragment_end_marker: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            dangerous_html_attribute: SmolStr::new_static("dangerouslySetInnerHTML"),
            dangerous_html_key: SmolStr::new_static("__html"),
            class_name_alias: SmolStr::new_static("className"),
            rename_class_name_on_components: false,
            fragment_start_marker: FRAGMENT_START_MARKER.to_string(),
            fragment_end_marker: FRAGMENT_END_MARKER.to_string(),
        }
    }
}

/// The result of compiling one top-level node.
#[derive(Debug)]
pub struct CompileResult<'a, H> {
    /// The compiled template.
    pub template: Template<'a, H>,
    /// Runtime helpers the template needs.
    pub helpers: RuntimeHelpers,
    /// Input irregularities that were compiled on a best-effort basis.
    pub diagnostics: Vec<Diagnostic>,
}

/// The result of compiling a bare fragment.
#[derive(Debug)]
pub struct FragmentResult<'a, H> {
    /// A single item, or a list of items when the fragment did not hold
    /// exactly one.
    pub value: Expr<'a, H>,
    /// Runtime helpers the value needs.
    pub helpers: RuntimeHelpers,
    /// Input irregularities that were compiled on a best-effort basis.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compiles a top-level node into a template.
///
/// Elements compile to their markup, components to a single call
/// expression, fragments to a single expression holding the flattened
/// items, text to its trimmed literal and expression slots to a single
/// expression.
pub fn compile<H>(node: &Node<H>, options: CompileOptions) -> CompileResult<'_, H> {
    let mut compiler = Compiler::new(options);
    let template = compiler.compile_node(node);
    CompileResult {
        template,
        helpers: compiler.helpers,
        diagnostics: compiler.diagnostics,
    }
}

/// Compiles a bare fragment into its flattened value.
pub fn compile_fragment<H>(fragment: &Fragment<H>, options: CompileOptions) -> FragmentResult<'_, H> {
    let mut compiler = Compiler::new(options);
    let value = compiler.fragment_value(fragment);
    FragmentResult {
        value,
        helpers: compiler.helpers,
        diagnostics: compiler.diagnostics,
    }
}

/// Compiles a node that must be a bare fragment.
///
/// Returns [`CompileError::NotAFragment`] for any other node.
pub fn compile_fragment_node<H>(
    node: &Node<H>,
    options: CompileOptions,
) -> Result<FragmentResult<'_, H>, CompileError> {
    let fragment = node.as_fragment().ok_or(CompileError::NotAFragment {
        found: node.kind_name(),
    })?;
    Ok(compile_fragment(fragment, options))
}

/// State of one compile call.
#[derive(Debug)]
pub(crate) struct Compiler {
    pub(crate) options: CompileOptions,
    pub(crate) helpers: RuntimeHelpers,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Compiler {
    pub(crate) fn new(options: CompileOptions) -> Self {
        Self {
            options,
            helpers: RuntimeHelpers::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Finishes a template; every template is rendered by the tagging
    /// primitive.
    pub(crate) fn finish<'a, H>(&mut self, builder: TemplateBuilder<'a, H>) -> Template<'a, H> {
        self.helpers.insert(RuntimeHelper::Html);
        builder.finish()
    }

    pub(crate) fn literal_template<'a, H>(&mut self, text: &str) -> Template<'a, H> {
        let mut builder = TemplateBuilder::new();
        builder.push_str(text);
        self.finish(builder)
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        warn!(code = %diagnostic.code, tag = %diagnostic.tag, "{}", diagnostic.message);
        self.diagnostics.push(diagnostic);
    }

    fn compile_node<'a, H>(&mut self, node: &'a Node<H>) -> Template<'a, H> {
        match node {
            Node::Element(element) => self.compile_element(element),
            Node::Fragment(fragment) => {
                let value = self.fragment_value(fragment);
                let mut builder = TemplateBuilder::new();
                builder.push_expr(value);
                self.finish(builder)
            }
            Node::Text(text) => self.literal_template(trim_whitespace(&text.raw)),
            Node::Expression(slot) => {
                let mut builder = TemplateBuilder::new();
                builder.push_expr(Expr::Host(&slot.handle));
                self.finish(builder)
            }
            Node::EmptyExpression => self.finish(TemplateBuilder::new()),
        }
    }

    /// Compiles an element of any tag kind into a template.
    pub(crate) fn compile_element<'a, H>(&mut self, element: &'a Element<H>) -> Template<'a, H> {
        match classify_tag(&element.tag) {
            TagKind::Host => self.emit_host_element(element),
            TagKind::Component => {
                let call = self.emit_component(element);
                let mut builder = TemplateBuilder::new();
                builder.push_expr(call);
                self.finish(builder)
            }
            TagKind::Unsupported => {
                self.report(Diagnostic::new(
                    DiagnosticCode::UnsupportedTagName,
                    element.tag.clone(),
                    format!("<{}> cannot be rendered and was replaced by nothing", element.tag),
                ));
                self.finish(TemplateBuilder::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Segment;
    use jsx_ast::Element;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_text_is_trimmed() {
        let node: Node = Node::text("  hello \n");
        let result = compile(&node, CompileOptions::default());
        assert_eq!(result.template.as_static(), Some("hello"));
        assert!(result.helpers.contains(RuntimeHelper::Html));
    }

    #[test]
    fn test_compile_text_keeps_non_breaking_space() {
        let node: Node = Node::text(" \u{a0}x\u{a0} ");
        let result = compile(&node, CompileOptions::default());
        assert_eq!(result.template.as_static(), Some("\u{a0}x\u{a0}"));
    }

    #[test]
    fn test_compile_expression_slot() {
        let node: Node = Node::expression(SmolStr::new("x"));
        let result = compile(&node, CompileOptions::default());
        assert_eq!(
            result.template.segments(),
            &[
                Segment::Literal(String::new()),
                Segment::Expression(Expr::Host(&SmolStr::new("x"))),
                Segment::Literal(String::new()),
            ]
        );
    }

    #[test]
    fn test_compile_empty_expression() {
        let node: Node = Node::EmptyExpression;
        assert!(compile(&node, CompileOptions::default()).template.is_empty());
    }

    #[test]
    fn test_unsupported_tags_degrade_to_empty() {
        for tag in ["Foo.Bar", "svg:rect", "", "1abc", "$x"] {
            let node: Node = Element::new(tag).with_child(Node::text("x")).into();
            let result = compile(&node, CompileOptions::default());
            assert!(result.template.is_empty(), "tag {tag:?}");
            assert_eq!(result.diagnostics.len(), 1);
            assert_eq!(
                result.diagnostics[0].code,
                DiagnosticCode::UnsupportedTagName
            );
        }
    }

    #[test]
    fn test_unsupported_child_does_not_fail_parent() {
        let node: Node = Element::new("div")
            .with_child(Element::new("a.b"))
            .with_child(Node::text("ok"))
            .into();
        let result = compile(&node, CompileOptions::default());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.template.literals(), vec!["<div>", "ok</div>"]);
    }

    #[test]
    fn test_compile_fragment_node_rejects_other_nodes() {
        let node: Node = Node::text("x");
        let err = compile_fragment_node(&node, CompileOptions::default()).unwrap_err();
        assert_eq!(err, CompileError::NotAFragment { found: "text" });
    }

    #[test]
    fn test_compile_fragment_node_accepts_fragments() {
        let node: Node = Node::fragment(vec![]);
        let result = compile_fragment_node(&node, CompileOptions::default()).unwrap();
        assert_eq!(result.value, Expr::List(vec![]));
    }

    #[test]
    fn test_default_options() {
        let options = CompileOptions::default();
        assert_eq!(options.dangerous_html_attribute, "dangerouslySetInnerHTML");
        assert_eq!(options.dangerous_html_key, "__html");
        assert_eq!(options.class_name_alias, "className");
        assert!(!options.rename_class_name_on_components);
    }
}
