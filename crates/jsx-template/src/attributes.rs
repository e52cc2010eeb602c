//! Attribute classification.
//!
//! Turns the raw attributes of one opening tag into [`ClassifiedAttribute`]s.
//! Classification is a pure function of the attributes and the
//! [`AttributeRules`] of the tag kind being emitted.

use crate::transform::CompileOptions;
use jsx_ast::{Attribute, AttributeValue, Expression, SmolStr};

/// A classified attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedAttribute<'a, H> {
    /// `name="value"`, emitted verbatim.
    Static {
        /// The output name.
        name: SmolStr,
        /// The literal value.
        value: &'a str,
    },
    /// `name={expr}` with a value only known at render time.
    Dynamic {
        /// The output name.
        name: SmolStr,
        /// The value expression.
        value: &'a Expression<H>,
    },
    /// A bare `name` or `name={true}`.
    Boolean {
        /// The output name.
        name: SmolStr,
        /// Always `true`; `false` attributes are dropped during
        /// classification.
        present: bool,
    },
    /// `{...expr}`.
    Spread(&'a H),
    /// The payload of the raw HTML attribute.
    DangerousHtml(&'a Expression<H>),
}

/// Name handling that differs between host elements and components.
#[derive(Debug, Clone, Copy)]
pub struct AttributeRules<'r> {
    /// The raw HTML attribute name and the object key holding its payload.
    /// `None` treats the attribute like any other.
    pub dangerous_html: Option<(&'r str, &'r str)>,
    /// An attribute name that is emitted as `class`. `None` disables the
    /// rename.
    pub class_alias: Option<&'r str>,
}

impl<'r> AttributeRules<'r> {
    /// Rules for host elements.
    pub fn host(options: &'r CompileOptions) -> Self {
        Self {
            dangerous_html: Some((
                options.dangerous_html_attribute.as_str(),
                options.dangerous_html_key.as_str(),
            )),
            class_alias: Some(options.class_name_alias.as_str()),
        }
    }

    /// Rules for components: props are passed through by name.
    pub fn component(options: &'r CompileOptions) -> Self {
        Self {
            dangerous_html: None,
            class_alias: options
                .rename_class_name_on_components
                .then_some(options.class_name_alias.as_str()),
        }
    }
}

/// The classified attributes of one opening tag, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedAttributes<'a, H> {
    /// The attributes.
    pub attributes: Vec<ClassifiedAttribute<'a, H>>,
    /// Whether a raw HTML attribute was dropped because its value was not an
    /// object literal with the payload key.
    pub malformed_dangerous_html: bool,
}

impl<'a, H> ClassifiedAttributes<'a, H> {
    /// Returns true if any attribute is a spread.
    pub fn has_spread(&self) -> bool {
        self.attributes
            .iter()
            .any(|attr| matches!(attr, ClassifiedAttribute::Spread(_)))
    }

    /// Returns the raw HTML payload. When the attribute is repeated the last
    /// occurrence wins, as with any other repeated attribute.
    pub fn dangerous_html(&self) -> Option<&'a Expression<H>> {
        self.attributes.iter().rev().find_map(|attr| match attr {
            ClassifiedAttribute::DangerousHtml(payload) => Some(*payload),
            _ => None,
        })
    }
}

/// Classifies the attributes of one opening tag.
pub fn classify_attributes<'a, H>(
    attributes: &'a [Attribute<H>],
    rules: &AttributeRules<'_>,
) -> ClassifiedAttributes<'a, H> {
    let mut classified = ClassifiedAttributes {
        attributes: Vec::with_capacity(attributes.len()),
        malformed_dangerous_html: false,
    };

    for attr in attributes {
        let named = match attr {
            Attribute::Spread(spread) => {
                classified
                    .attributes
                    .push(ClassifiedAttribute::Spread(&spread.handle));
                continue;
            }
            Attribute::Named(named) => named,
        };

        if let Some((attribute, key)) = rules.dangerous_html {
            if named.name == attribute {
                match dangerous_html_payload(named.value.as_ref(), key) {
                    Some(payload) => classified
                        .attributes
                        .push(ClassifiedAttribute::DangerousHtml(payload)),
                    None => classified.malformed_dangerous_html = true,
                }
                continue;
            }
        }

        let name = match rules.class_alias {
            Some(alias) if named.name == alias => SmolStr::new_static("class"),
            _ => named.name.clone(),
        };

        let attribute = match &named.value {
            None => ClassifiedAttribute::Boolean {
                name,
                present: true,
            },
            Some(AttributeValue::Text(value)) => ClassifiedAttribute::Static {
                name,
                value: value.as_str(),
            },
            Some(AttributeValue::Expression(Expression::Bool(true))) => {
                ClassifiedAttribute::Boolean {
                    name,
                    present: true,
                }
            }
            Some(AttributeValue::Expression(Expression::Bool(false))) => continue,
            Some(AttributeValue::Expression(value)) => ClassifiedAttribute::Dynamic { name, value },
        };
        classified.attributes.push(attribute);
    }

    classified
}

fn dangerous_html_payload<'a, H>(
    value: Option<&'a AttributeValue<H>>,
    key: &str,
) -> Option<&'a Expression<H>> {
    match value? {
        AttributeValue::Expression(object @ Expression::Object(_)) => object.property(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsx_ast::ObjectProperty;
    use pretty_assertions::assert_eq;

    fn host<'a>(attributes: &'a [Attribute]) -> ClassifiedAttributes<'a, SmolStr> {
        let options = CompileOptions::default();
        classify_attributes(attributes, &AttributeRules::host(&options))
    }

    fn component<'a>(attributes: &'a [Attribute]) -> ClassifiedAttributes<'a, SmolStr> {
        let options = CompileOptions::default();
        classify_attributes(attributes, &AttributeRules::component(&options))
    }

    #[test]
    fn test_value_kinds() {
        let attributes = vec![
            Attribute::boolean("disabled"),
            Attribute::text("type", "text"),
            Attribute::expression("checked", Expression::Bool(true)),
            Attribute::host("id", SmolStr::new("x")),
        ];
        let classified = host(&attributes);
        assert_eq!(
            classified.attributes,
            vec![
                ClassifiedAttribute::Boolean {
                    name: SmolStr::new("disabled"),
                    present: true,
                },
                ClassifiedAttribute::Static {
                    name: SmolStr::new("type"),
                    value: "text",
                },
                ClassifiedAttribute::Boolean {
                    name: SmolStr::new("checked"),
                    present: true,
                },
                ClassifiedAttribute::Dynamic {
                    name: SmolStr::new("id"),
                    value: &Expression::Host(SmolStr::new("x")),
                },
            ]
        );
    }

    #[test]
    fn test_false_literal_is_dropped() {
        let attributes = vec![
            Attribute::expression("hidden", Expression::Bool(false)),
            Attribute::text("id", "a"),
        ];
        let classified = host(&attributes);
        assert_eq!(classified.attributes.len(), 1);
        assert!(matches!(
            classified.attributes[0],
            ClassifiedAttribute::Static { ref name, .. } if name == "id"
        ));
    }

    #[test]
    fn test_string_expression_stays_dynamic() {
        let attributes = vec![Attribute::expression(
            "title",
            Expression::Str("A".to_string()),
        )];
        assert!(matches!(
            host(&attributes).attributes[0],
            ClassifiedAttribute::Dynamic { .. }
        ));
    }

    #[test]
    fn test_spread_keeps_position() {
        let attributes = vec![
            Attribute::text("a", "1"),
            Attribute::spread(SmolStr::new("rest")),
            Attribute::text("b", "2"),
        ];
        let classified = host(&attributes);
        assert!(classified.has_spread());
        assert!(matches!(
            classified.attributes[1],
            ClassifiedAttribute::Spread(handle) if handle == "rest"
        ));
    }

    #[test]
    fn test_class_name_alias() {
        let attributes = vec![Attribute::text("className", "card")];
        assert!(matches!(
            host(&attributes).attributes[0],
            ClassifiedAttribute::Static { ref name, .. } if name == "class"
        ));
        assert!(matches!(
            component(&attributes).attributes[0],
            ClassifiedAttribute::Static { ref name, .. } if name == "className"
        ));
    }

    #[test]
    fn test_class_name_alias_on_components_when_enabled() {
        let attributes: Vec<Attribute> = vec![Attribute::text("className", "card")];
        let options = CompileOptions {
            rename_class_name_on_components: true,
            ..Default::default()
        };
        let classified = classify_attributes(&attributes, &AttributeRules::component(&options));
        assert!(matches!(
            classified.attributes[0],
            ClassifiedAttribute::Static { ref name, .. } if name == "class"
        ));
    }

    #[test]
    fn test_dangerous_html_payload() {
        let attributes = vec![Attribute::expression(
            "dangerouslySetInnerHTML",
            Expression::Object(vec![
                ObjectProperty::new("__html", Expression::Host(SmolStr::new("raw"))),
                ObjectProperty::new("__html", Expression::Host(SmolStr::new("second"))),
            ]),
        )];
        let classified = host(&attributes);
        assert_eq!(
            classified.dangerous_html(),
            Some(&Expression::Host(SmolStr::new("raw")))
        );
        assert!(!classified.malformed_dangerous_html);
    }

    #[test]
    fn test_malformed_dangerous_html_is_dropped() {
        let cases = vec![
            Attribute::host("dangerouslySetInnerHTML", SmolStr::new("raw")),
            Attribute::text("dangerouslySetInnerHTML", "<b>x</b>"),
            Attribute::boolean("dangerouslySetInnerHTML"),
            Attribute::expression(
                "dangerouslySetInnerHTML",
                Expression::Object(vec![ObjectProperty::new(
                    "html",
                    Expression::Host(SmolStr::new("raw")),
                )]),
            ),
        ];
        for attr in cases {
            let attributes = vec![attr];
            let classified = host(&attributes);
            assert!(classified.attributes.is_empty());
            assert!(classified.malformed_dangerous_html);
        }
    }

    #[test]
    fn test_dangerous_html_is_a_plain_prop_on_components() {
        let attributes = vec![Attribute::host(
            "dangerouslySetInnerHTML",
            SmolStr::new("raw"),
        )];
        let classified = component(&attributes);
        assert!(classified.dangerous_html().is_none());
        assert!(matches!(
            classified.attributes[0],
            ClassifiedAttribute::Dynamic { ref name, .. } if name == "dangerouslySetInnerHTML"
        ));
    }
}
