//! AST types for JSX markup.
//!
//! This module defines the node and attribute types an external parser hands
//! to the template compiler. Expressions embedded in the markup are opaque
//! handles of type `H`; only literal booleans, literal strings and object
//! literals are visible to the compiler.

use smol_str::SmolStr;

/// A node in a JSX tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node<H = SmolStr> {
    /// An element `<tag ...>...</tag>` or `<tag ... />`.
    Element(Element<H>),
    /// A bare fragment `<>...</>`.
    Fragment(Fragment<H>),
    /// Text content.
    Text(Text),
    /// An expression container `{expr}`.
    Expression(ExpressionSlot<H>),
    /// An empty expression container, usually holding a comment `{/* ... */}`.
    EmptyExpression,
}

impl<H> Node<H> {
    /// Creates a text node.
    pub fn text(raw: impl Into<String>) -> Self {
        Node::Text(Text { raw: raw.into() })
    }

    /// Creates an expression node.
    pub fn expression(handle: H) -> Self {
        Node::Expression(ExpressionSlot { handle })
    }

    /// Creates a fragment node.
    pub fn fragment(children: Vec<Node<H>>) -> Self {
        Node::Fragment(Fragment { children })
    }

    /// Returns the fragment payload if this node is a fragment.
    pub fn as_fragment(&self) -> Option<&Fragment<H>> {
        match self {
            Node::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Returns a short name for the kind of this node.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Element(_) => "element",
            Node::Fragment(_) => "fragment",
            Node::Text(_) => "text",
            Node::Expression(_) => "expression",
            Node::EmptyExpression => "empty expression",
        }
    }
}

impl<H> From<Element<H>> for Node<H> {
    fn from(element: Element<H>) -> Self {
        Node::Element(element)
    }
}

impl<H> From<Fragment<H>> for Node<H> {
    fn from(fragment: Fragment<H>) -> Self {
        Node::Fragment(fragment)
    }
}

/// An element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element<H = SmolStr> {
    /// The tag name as written (`div`, `my-widget`, `Card`, `Foo.Bar`).
    pub tag: SmolStr,
    /// The attributes in source order.
    pub attributes: Vec<Attribute<H>>,
    /// The child nodes.
    pub children: Vec<Node<H>>,
    /// Whether the source had a closing tag (`false` for `<tag />`).
    pub explicitly_closed: bool,
}

impl<H> Element<H> {
    /// Creates an element with a closing tag and no attributes or children.
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            explicitly_closed: true,
        }
    }

    /// Marks the element as written without a closing tag.
    pub fn self_closing(mut self) -> Self {
        self.explicitly_closed = false;
        self
    }

    /// Appends an attribute.
    pub fn with_attribute(mut self, attribute: Attribute<H>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: impl Into<Node<H>>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A bare fragment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment<H = SmolStr> {
    /// The child nodes.
    pub children: Vec<Node<H>>,
}

impl<H> Default for Fragment<H> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

/// Text content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    /// The raw text, including surrounding whitespace.
    pub raw: String,
}

/// An expression container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpressionSlot<H = SmolStr> {
    /// The host expression.
    pub handle: H,
}

/// An attribute on an opening tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute<H = SmolStr> {
    /// A named attribute `name`, `name="value"` or `name={expr}`.
    Named(NamedAttribute<H>),
    /// A spread attribute `{...obj}`.
    Spread(SpreadAttribute<H>),
}

impl<H> Attribute<H> {
    /// Creates a named attribute without a value.
    pub fn boolean(name: impl Into<SmolStr>) -> Self {
        Attribute::Named(NamedAttribute {
            name: name.into(),
            value: None,
        })
    }

    /// Creates a named attribute with a string literal value.
    pub fn text(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Attribute::Named(NamedAttribute {
            name: name.into(),
            value: Some(AttributeValue::Text(value.into())),
        })
    }

    /// Creates a named attribute with an expression value.
    pub fn expression(name: impl Into<SmolStr>, expression: Expression<H>) -> Self {
        Attribute::Named(NamedAttribute {
            name: name.into(),
            value: Some(AttributeValue::Expression(expression)),
        })
    }

    /// Creates a named attribute whose value is an opaque host expression.
    pub fn host(name: impl Into<SmolStr>, handle: H) -> Self {
        Self::expression(name, Expression::Host(handle))
    }

    /// Creates a spread attribute.
    pub fn spread(handle: H) -> Self {
        Attribute::Spread(SpreadAttribute { handle })
    }

    /// Returns the attribute name, or `None` for spreads.
    pub fn name(&self) -> Option<&str> {
        match self {
            Attribute::Named(attr) => Some(attr.name.as_str()),
            Attribute::Spread(_) => None,
        }
    }
}

/// A named attribute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedAttribute<H = SmolStr> {
    /// The attribute name.
    pub name: SmolStr,
    /// The value, or `None` when the name stands alone.
    pub value: Option<AttributeValue<H>>,
}

/// The value of a named attribute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue<H = SmolStr> {
    /// A quoted string literal `name="value"`.
    Text(String),
    /// An expression container `name={expr}`.
    Expression(Expression<H>),
}

/// An expression inside an attribute value.
///
/// Parsers report literal booleans, literal strings and plain object literals
/// structurally. Anything else, including object literals with spreads or
/// computed keys, is handed over as [`Expression::Host`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression<H = SmolStr> {
    /// A literal `true` or `false`.
    Bool(bool),
    /// A literal string `"..."`.
    Str(String),
    /// An object literal `{ key: value, ... }`.
    Object(Vec<ObjectProperty<H>>),
    /// Any other expression.
    Host(H),
}

impl<H> Expression<H> {
    /// Returns the value of the first property named `key`, if this is an
    /// object literal.
    pub fn property(&self, key: &str) -> Option<&Expression<H>> {
        match self {
            Expression::Object(properties) => properties
                .iter()
                .find(|property| property.key == key)
                .map(|property| &property.value),
            _ => None,
        }
    }
}

/// A `key: value` property of an object literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectProperty<H = SmolStr> {
    /// The property key.
    pub key: SmolStr,
    /// The property value.
    pub value: Expression<H>,
}

impl<H> ObjectProperty<H> {
    /// Creates a property.
    pub fn new(key: impl Into<SmolStr>, value: Expression<H>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A spread attribute `{...obj}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadAttribute<H = SmolStr> {
    /// The expression being spread.
    pub handle: H,
}
