//! Structural properties of compiled templates.

use jsx_ast::{Attribute, Element, Expression, Fragment, Node, ObjectProperty, SmolStr};
use jsx_template::{
    compile, compile_fragment, is_void_element, render, CompileOptions, CompileResult, Expr,
    MapScope, ObjectExpr, Segment, Template, FRAGMENT_END_MARKER, FRAGMENT_START_MARKER,
};
use pretty_assertions::assert_eq;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn lit<'a>(text: &str) -> Segment<'a, SmolStr> {
    Segment::Literal(text.to_string())
}

fn compile_default(node: &Node) -> CompileResult<'_, SmolStr> {
    compile(node, CompileOptions::default())
}

fn assert_alternating(template: &Template<'_, SmolStr>) {
    let segments = template.segments();
    assert_eq!(segments.len() % 2, 1, "segment count must be odd");
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(_) => assert_eq!(i % 2, 0, "literal at odd index {i}"),
            Segment::Expression(expr) => {
                assert_eq!(i % 2, 1, "expression at even index {i}");
                if let Expr::Template(nested) = expr {
                    assert_alternating(nested);
                }
            }
        }
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_dynamic_attribute_on_self_closing_tag() {
    // <div id={x} />
    let x = SmolStr::new("x");
    let node: Node = Element::new("div")
        .self_closing()
        .with_attribute(Attribute::host("id", x.clone()))
        .into();
    let result = compile_default(&node);
    assert_eq!(
        result.template.segments(),
        &[lit("<div id=\""), Segment::Expression(Expr::Host(&x)), lit("\" />")]
    );
}

#[test]
fn test_static_void_element() {
    // <input type="text" disabled />
    let node: Node = Element::new("input")
        .self_closing()
        .with_attribute(Attribute::text("type", "text"))
        .with_attribute(Attribute::boolean("disabled"))
        .into();
    let result = compile_default(&node);
    assert_eq!(
        result.template.segments(),
        &[lit("<input type=\"text\" disabled />")]
    );
}

#[test]
fn test_dangerous_html_bypasses_escaping() {
    // <div dangerouslySetInnerHTML={{__html: raw}}>ignored</div>
    let raw = SmolStr::new("raw");
    let node: Node = Element::new("div")
        .with_attribute(Attribute::expression(
            "dangerouslySetInnerHTML",
            Expression::Object(vec![ObjectProperty::new(
                "__html",
                Expression::Host(raw.clone()),
            )]),
        ))
        .with_child(Node::text("ignored"))
        .into();
    let result = compile_default(&node);
    assert_eq!(
        result.template.segments(),
        &[
            lit("<div>"),
            Segment::Expression(Expr::Unsafe(Box::new(Expr::Host(&raw)))),
            lit("</div>"),
        ]
    );
}

#[test]
fn test_component_reduces_to_call() {
    // <Card title="A" />
    let node: Node = Element::new("Card")
        .self_closing()
        .with_attribute(Attribute::text("title", "A"))
        .into();
    let result = compile_default(&node);

    let mut props = ObjectExpr::new();
    props.push_field("title", Expr::Str("A".to_string()));
    assert_eq!(
        result.template.segments(),
        &[
            lit(""),
            Segment::Expression(Expr::Call {
                callee: SmolStr::new("Card"),
                props,
            }),
            lit(""),
        ]
    );
}

#[test]
fn test_nested_fragment_markers() {
    // <div><><p>a</p><p>b</p></></div>
    let items: Vec<Node> = vec![
        Element::new("p").with_child(Node::text("a")).into(),
        Element::new("p").with_child(Node::text("b")).into(),
    ];
    let node: Node = Element::new("div")
        .with_child(Node::fragment(items))
        .into();
    let result = compile_default(&node);

    let segments = result.template.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], lit("<div><!-- Fragment Start -->"));
    assert!(matches!(&segments[1], Segment::Expression(Expr::List(list)) if list.len() == 2));
    assert_eq!(segments[2], lit("<!-- Fragment End --></div>"));
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_void_elements_end_self_closed() {
    for tag in VOID_ELEMENTS {
        assert!(is_void_element(tag));
        let node: Node = Element::new(*tag)
            .with_attribute(Attribute::host("title", SmolStr::new("t")))
            .with_child(Node::text("child"))
            .with_child(Node::expression(SmolStr::new("y")))
            .into();
        let result = compile_default(&node);
        let literals = result.template.literals();
        assert_eq!(literals.last(), Some(&"\" />"), "tag {tag}");
        assert_eq!(result.template.expressions().count(), 1, "tag {tag}");
        assert!(literals.iter().all(|l| !l.contains("child")));
        assert_eq!(result.diagnostics.len(), 1);
    }
}

#[test]
fn test_false_attributes_never_render() {
    let node: Node = Element::new("button")
        .with_attribute(Attribute::expression("disabled", Expression::Bool(false)))
        .with_attribute(Attribute::expression("checked", Expression::Bool(true)))
        .with_child(Element::new("Icon").with_attribute(Attribute::expression(
            "spin",
            Expression::Bool(false),
        )))
        .into();
    let result = compile_default(&node);
    let scope: MapScope<SmolStr> =
        MapScope::new().with_component("Icon", |props| Ok(props.to_string().into()));
    let html = render(&result.template, &scope).unwrap();
    assert!(!html.contains("disabled"));
    assert!(!html.contains("spin"));
    assert!(html.starts_with("<button checked>"));
}

#[test]
fn test_exactly_one_marker_pair() {
    let inner: Vec<Node> = vec![
        Node::expression(SmolStr::new("a")),
        Node::fragment(vec![Node::text("b"), Node::expression(SmolStr::new("c"))]),
    ];
    let node: Node = Element::new("section")
        .with_child(Node::fragment(inner))
        .into();
    let result = compile_default(&node);
    let markup = result.template.literals().concat();
    assert_eq!(markup.matches(FRAGMENT_START_MARKER).count(), 1);
    assert_eq!(markup.matches(FRAGMENT_END_MARKER).count(), 1);

    // Nested fragments are spliced into one list.
    let Some(Expr::List(items)) = result.template.expressions().next() else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn test_custom_fragment_markers() {
    let items: Vec<Node> = vec![Node::text("a"), Node::text("b")];
    let node: Node = Element::new("div")
        .with_child(Node::fragment(items))
        .into();
    let options = CompileOptions {
        fragment_start_marker: "<!--[-->".to_string(),
        fragment_end_marker: "<!--]-->".to_string(),
        ..Default::default()
    };
    let result = compile(&node, options);
    assert_eq!(result.template.literals(), vec!["<div><!--[-->", "<!--]--></div>"]);
}

#[test]
fn test_components_have_no_markup() {
    for tag in ["Card", "Nav", "X"] {
        let node: Node = Element::new(tag)
            .with_attribute(Attribute::text("className", "c"))
            .with_child(Element::new("span"))
            .into();
        let result = compile_default(&node);
        assert_eq!(result.template.literals(), vec!["", ""], "tag {tag}");
        assert_eq!(result.template.expressions().count(), 1);
    }
}

#[test]
fn test_templates_alternate_segments() {
    let node: Node = Element::new("div")
        .with_attribute(Attribute::host("a", SmolStr::new("a")))
        .with_attribute(Attribute::host("b", SmolStr::new("b")))
        .with_child(Node::expression(SmolStr::new("c")))
        .with_child(Node::expression(SmolStr::new("d")))
        .with_child(
            Element::new("span")
                .with_child(Node::expression(SmolStr::new("e")))
                .with_child(Element::new("br")),
        )
        .into();
    assert_alternating(&compile_default(&node).template);
}

#[test]
fn test_bare_fragment_values() {
    let empty: Fragment = Fragment::default();
    assert_eq!(
        compile_fragment(&empty, CompileOptions::default()).value,
        Expr::List(vec![])
    );

    let single: Fragment = Fragment {
        children: vec![Node::text("  "), Element::new("hr").into()],
    };
    assert_eq!(
        compile_fragment(&single, CompileOptions::default()).value,
        Expr::Template(Template::literal("<hr />"))
    );
}

#[test]
fn test_outputs_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompileResult<'static, SmolStr>>();
    assert_send_sync::<jsx_template::FragmentResult<'static, SmolStr>>();
}
