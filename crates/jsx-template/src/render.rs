//! A reference runtime for compiled templates.
//!
//! [`render`] evaluates a [`Template`] the way the JavaScript templating
//! runtime does: literals are emitted as-is, expression values are HTML
//! escaped unless they are already trusted HTML, and component calls are
//! resolved through a [`Scope`]. It exists so compiled output can be checked
//! without a JavaScript engine.

use crate::error::RenderError;
use crate::template::{Expr, ObjectEntry, ObjectExpr, Segment, Template};
use indexmap::IndexMap;
use jsx_ast::SmolStr;
use rustc_hash::FxHashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use tracing::debug;

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `undefined`.
    #[default]
    Undefined,
    /// `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string, escaped when interpolated.
    String(String),
    /// Trusted HTML, interpolated verbatim.
    Html(String),
    /// An array. Interpolating it concatenates its items.
    List(Vec<Value>),
    /// An object with keys in insertion order.
    Object(IndexMap<SmolStr, Value>),
}

impl Value {
    /// Creates a trusted HTML value.
    pub fn html(markup: impl Into<String>) -> Self {
        Value::Html(markup.into())
    }

    /// Creates an object from key/value pairs. Later pairs override earlier
    /// ones without moving the key.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<SmolStr>,
        V: Into<Value>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the property `key` of an object, or `Undefined`.
    pub fn get(&self, key: &str) -> &Value {
        const UNDEFINED: &Value = &Value::Undefined;
        match self {
            Value::Object(map) => map.get(key).unwrap_or(UNDEFINED),
            _ => UNDEFINED,
        }
    }

    /// Returns true for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Returns the value as interpolated into a template: escaped, except for
    /// trusted HTML. `null`, `undefined` and `false` produce nothing.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Value::Undefined | Value::Null | Value::Bool(false) => {}
            Value::Html(markup) => out.push_str(markup),
            Value::List(items) => {
                for item in items {
                    item.write_html(out);
                }
            }
            other => out.push_str(&escape_html(&other.to_string())),
        }
    }
}

/// The string conversion of the runtime.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Number(value) => f.write_str(&format_number(*value)),
            Value::String(value) | Value::Html(value) => f.write_str(value),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Resolves host expressions and components during rendering.
pub trait Scope<H> {
    /// Evaluates a host expression.
    fn value(&self, handle: &H) -> Result<Value, RenderError>;

    /// Invokes the component `name` with its props object.
    fn component(&self, name: &str, props: Value) -> Result<Value, RenderError>;
}

type ComponentFn = Box<dyn Fn(&Value) -> Result<Value, RenderError>>;

/// A [`Scope`] backed by maps.
pub struct MapScope<H> {
    values: FxHashMap<H, Value>,
    components: FxHashMap<SmolStr, ComponentFn>,
}

impl<H: Eq + Hash> MapScope<H> {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
            components: FxHashMap::default(),
        }
    }

    /// Binds a host expression to a value.
    pub fn with_value(mut self, handle: impl Into<H>, value: impl Into<Value>) -> Self {
        self.values.insert(handle.into(), value.into());
        self
    }

    /// Registers a component render function. It receives the props object.
    pub fn with_component<F>(mut self, name: impl Into<SmolStr>, render: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, RenderError> + 'static,
    {
        self.components.insert(name.into(), Box::new(render));
        self
    }
}

impl<H: Eq + Hash> Default for MapScope<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Debug> Debug for MapScope<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapScope")
            .field("values", &self.values)
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<H: Eq + Hash + Debug> Scope<H> for MapScope<H> {
    fn value(&self, handle: &H) -> Result<Value, RenderError> {
        self.values
            .get(handle)
            .cloned()
            .ok_or_else(|| RenderError::UnboundExpression {
                expression: format!("{handle:?}"),
            })
    }

    fn component(&self, name: &str, props: Value) -> Result<Value, RenderError> {
        let render = self
            .components
            .get(name)
            .ok_or_else(|| RenderError::UnknownComponent {
                name: SmolStr::new(name),
            })?;
        render(&props)
    }
}

/// Renders a template to an HTML string.
pub fn render<H, S>(template: &Template<'_, H>, scope: &S) -> Result<String, RenderError>
where
    S: Scope<H> + ?Sized,
{
    let mut out = String::new();
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Expression(expr) => evaluate(expr, scope)?.write_html(&mut out),
        }
    }
    Ok(out)
}

/// Evaluates a single compiled value.
pub fn evaluate<H, S>(expr: &Expr<'_, H>, scope: &S) -> Result<Value, RenderError>
where
    S: Scope<H> + ?Sized,
{
    Ok(match expr {
        Expr::Host(handle) => scope.value(handle)?,
        Expr::Str(value) => Value::String(value.clone()),
        Expr::Bool(value) => Value::Bool(*value),
        Expr::Template(template) => Value::Html(render(template, scope)?),
        Expr::List(items) => Value::List(
            items
                .iter()
                .map(|item| evaluate(item, scope))
                .collect::<Result<_, _>>()?,
        ),
        Expr::Object(object) => Value::Object(evaluate_object(object, scope)?),
        Expr::Unsafe(inner) => Value::Html(raw_html(&evaluate(inner, scope)?)),
        Expr::SpreadAttributes(object) => {
            Value::Html(join_attributes(&evaluate_object(object, scope)?))
        }
        Expr::Call { callee, props } => {
            let props = Value::Object(evaluate_object(props, scope)?);
            scope.component(callee, props)?
        }
    })
}

fn evaluate_object<H, S>(
    object: &ObjectExpr<'_, H>,
    scope: &S,
) -> Result<IndexMap<SmolStr, Value>, RenderError>
where
    S: Scope<H> + ?Sized,
{
    let mut map = IndexMap::with_capacity(object.entries.len());
    for entry in &object.entries {
        match entry {
            ObjectEntry::Field { key, value } => {
                map.insert(key.clone(), evaluate(value, scope)?);
            }
            ObjectEntry::Spread(handle) => match scope.value(handle)? {
                Value::Object(spread) => map.extend(spread),
                Value::Undefined | Value::Null => {}
                other => debug!(value = %other, "ignoring spread of a non-object value"),
            },
        }
    }
    Ok(map)
}

/// The raw HTML wrapper's conversion: the string form without escaping.
fn raw_html(value: &Value) -> String {
    match value {
        Value::Undefined | Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Renders a merged attribute object as space separated `key` and
/// `key="value"` pairs.
fn join_attributes(attributes: &IndexMap<SmolStr, Value>) -> String {
    attributes
        .iter()
        .filter(|(_, value)| !value.is_nullish() && *value != &Value::Bool(false))
        .map(|(key, value)| match value {
            Value::Bool(true) => key.to_string(),
            _ => format!("{}=\"{}\"", key, value.to_html()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&value.abs()) {
        value.to_string()
    } else {
        // Shortest digits with an explicitly signed exponent: 1e+21, 1.5e-7.
        let exp = format!("{value:e}");
        match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exp,
        }
    }
}
