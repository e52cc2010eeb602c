//! Template representation and the segment builder.
//!
//! A [`Template`] is a "string with holes": literal HTML text interleaved with
//! embedded expressions. Templates are only produced by [`TemplateBuilder`],
//! which keeps literals and expressions strictly alternating so a finished
//! template always holds `2k + 1` segments, starting and ending with a
//! literal.

use jsx_ast::{Expression, SmolStr};

/// A compiled template.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Template<'a, H> {
    segments: Vec<Segment<'a, H>>,
}

impl<'a, H> Template<'a, H> {
    /// Creates a template with a single empty literal.
    pub fn empty() -> Self {
        Self::literal(String::new())
    }

    /// Creates a template consisting of one literal.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Literal(text.into())],
        }
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[Segment<'a, H>] {
        &self.segments
    }

    /// Consumes the template and returns its segments.
    pub fn into_segments(self) -> Vec<Segment<'a, H>> {
        self.segments
    }

    /// Returns the literal segments in order. There is always one more
    /// literal than there are expressions.
    pub fn literals(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(text) => Some(text.as_str()),
                Segment::Expression(_) => None,
            })
            .collect()
    }

    /// Returns the expression segments in order.
    pub fn expressions(&self) -> impl Iterator<Item = &Expr<'a, H>> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Literal(_) => None,
            Segment::Expression(expr) => Some(expr),
        })
    }

    /// Returns the text if the template has no expressions.
    pub fn as_static(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [Segment::Literal(text)] => Some(text),
            _ => None,
        }
    }

    /// Returns true if the template renders to the empty string.
    pub fn is_empty(&self) -> bool {
        self.as_static().map_or(false, str::is_empty)
    }
}

/// A template segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Segment<'a, H> {
    /// Literal HTML text, emitted as-is at render time.
    Literal(String),
    /// An embedded expression, escaped at render time unless it is marked
    /// as raw HTML.
    Expression(Expr<'a, H>),
}

/// The value of an expression segment.
///
/// Host handles are borrowed from the input tree; everything else is a value
/// the compiler synthesized around them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr<'a, H> {
    /// An opaque host expression.
    Host(&'a H),
    /// A string literal.
    Str(String),
    /// A boolean literal.
    Bool(bool),
    /// A nested template.
    Template(Template<'a, H>),
    /// An ordered list of values (flattened fragment items).
    List(Vec<Expr<'a, H>>),
    /// An object literal.
    Object(ObjectExpr<'a, H>),
    /// A value rendered without HTML escaping.
    Unsafe(Box<Expr<'a, H>>),
    /// The attribute list of a host element with spreads: the merged object
    /// rendered as space separated `key` / `key="value"` pairs, skipping
    /// `null`, `undefined` and `false` values.
    SpreadAttributes(ObjectExpr<'a, H>),
    /// A component invocation `callee(props)`.
    Call {
        /// The component name, resolved by the host at the call site.
        callee: SmolStr,
        /// The props object passed as the only argument.
        props: ObjectExpr<'a, H>,
    },
}

impl<'a, H> Expr<'a, H> {
    /// Converts an attribute expression from the input tree.
    pub fn from_expression(expression: &'a Expression<H>) -> Self {
        match expression {
            Expression::Host(handle) => Expr::Host(handle),
            Expression::Str(value) => Expr::Str(value.clone()),
            Expression::Bool(value) => Expr::Bool(*value),
            Expression::Object(properties) => Expr::Object(ObjectExpr {
                entries: properties
                    .iter()
                    .map(|property| ObjectEntry::Field {
                        key: property.key.clone(),
                        value: Expr::from_expression(&property.value),
                    })
                    .collect(),
            }),
        }
    }

    /// Wraps this value so it is rendered without escaping.
    pub fn into_unsafe(self) -> Self {
        Expr::Unsafe(Box::new(self))
    }
}

/// An object literal built by the compiler.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObjectExpr<'a, H> {
    /// Fields and spreads in evaluation order. Later entries override
    /// earlier ones on key collision.
    pub entries: Vec<ObjectEntry<'a, H>>,
}

impl<'a, H> ObjectExpr<'a, H> {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a `key: value` field.
    pub fn push_field(&mut self, key: impl Into<SmolStr>, value: Expr<'a, H>) {
        self.entries.push(ObjectEntry::Field {
            key: key.into(),
            value,
        });
    }

    /// Appends a `...handle` spread.
    pub fn push_spread(&mut self, handle: &'a H) {
        self.entries.push(ObjectEntry::Spread(handle));
    }

    /// Returns the value of the last field named `key`.
    pub fn field(&self, key: &str) -> Option<&Expr<'a, H>> {
        self.entries.iter().rev().find_map(|entry| match entry {
            ObjectEntry::Field { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Returns true if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, H> Default for ObjectExpr<'a, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// An entry of an [`ObjectExpr`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ObjectEntry<'a, H> {
    /// A `key: value` field.
    Field {
        /// The key.
        key: SmolStr,
        /// The value.
        value: Expr<'a, H>,
    },
    /// A `...handle` spread.
    Spread(&'a H),
}

/// Accumulates literal text and expressions into a [`Template`].
#[derive(Debug)]
pub struct TemplateBuilder<'a, H> {
    buffer: String,
    segments: Vec<Segment<'a, H>>,
}

impl<'a, H> TemplateBuilder<'a, H> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            segments: Vec::new(),
        }
    }

    /// Appends literal text to the pending literal.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Flushes the pending literal (even when empty) and appends an
    /// expression segment.
    pub fn push_expr(&mut self, expr: Expr<'a, H>) {
        let literal = std::mem::take(&mut self.buffer);
        self.segments.push(Segment::Literal(literal));
        self.segments.push(Segment::Expression(expr));
    }

    /// Flushes the pending literal and returns the finished template.
    pub fn finish(mut self) -> Template<'a, H> {
        self.segments.push(Segment::Literal(self.buffer));
        Template {
            segments: self.segments,
        }
    }
}

impl<'a, H> Default for TemplateBuilder<'a, H> {
    fn default() -> Self {
        Self::new()
    }
}
