//! Tag name classification.

/// How an element is emitted, decided by the shape of its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// A host element (`div`, `my-widget`), emitted as markup.
    Host,
    /// A component (`Card`), emitted as a call.
    Component,
    /// A shape the compiler cannot render (`Foo.Bar`, `svg:rect`).
    Unsupported,
}

/// Classifies a tag name.
///
/// Names starting with an uppercase ASCII letter are components unless they
/// contain a hyphen, in which case they are custom elements. Member
/// expressions, namespaced names and names not starting with a letter are
/// unsupported.
pub fn classify_tag(tag: &str) -> TagKind {
    let Some(first) = tag.chars().next() else {
        return TagKind::Unsupported;
    };

    if !first.is_ascii_alphabetic() || tag.contains(|c: char| c == '.' || c == ':') {
        return TagKind::Unsupported;
    }

    if first.is_ascii_uppercase() && !tag.contains('-') {
        TagKind::Component
    } else {
        TagKind::Host
    }
}
