use crate::FragmentChild;
use crate::FragmentRef;
use crate::Template;
use std::sync::Arc;

/// Incrementally assembles a [`Template`] from alternating pieces of text
/// and interpolated values.
///
/// Adjacent calls to [`text`](Self::text) are concatenated and adjacent
/// values are separated by an empty segment, so [`build`](Self::build)
/// cannot fail.
///
/// ```
/// use libgraphql_compose::Template;
///
/// let template = Template::builder()
///     .text("query Things { thing(foo: ")
///     .value(12)
///     .text(", bar: \"")
///     .value("baz")
///     .text("\") }")
///     .build();
///
/// assert_eq!(template.segments().len(), 3);
/// assert_eq!(template.values().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TemplateBuilder {
    segments: Vec<String>,
    values: Vec<FragmentChild>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self {
            segments: vec![String::new()],
            values: vec![],
        }
    }

    pub fn build(self) -> Template {
        Template {
            segments: self.segments,
            values: self.values,
        }
    }

    /// Interpolates `fragment` at the current position.
    pub fn fragment(self, fragment: &FragmentRef) -> Self {
        self.value(Arc::clone(fragment))
    }

    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        if let Some(segment) = self.segments.last_mut() {
            segment.push_str(text.as_ref());
        }
        self
    }

    /// Interpolates `value` at the current position. Anything other than a
    /// fragment is spliced in as plain text.
    pub fn value(mut self, value: impl Into<FragmentChild>) -> Self {
        self.values.push(value.into());
        self.segments.push(String::new());
        self
    }
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
