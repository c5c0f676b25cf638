use crate::FragmentChild;
use crate::TemplateBuilder;
use crate::TemplateError;

/// A piece of GraphQL text with values interpolated into it: ordered
/// literal `segments` with one value between each adjacent pair.
///
/// Every `Template` holds exactly one more segment than it holds values.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    pub(crate) segments: Vec<String>,
    pub(crate) values: Vec<FragmentChild>,
}

impl Template {
    /// Pairs literal `segments` with the `values` interpolated between them.
    ///
    /// Fails unless there is exactly one more segment than there are
    /// values.
    pub fn new<S: Into<String>>(
        segments: impl IntoIterator<Item = S>,
        values: Vec<FragmentChild>,
    ) -> Result<Self, TemplateError> {
        let segments: Vec<String> =
            segments.into_iter().map(Into::into).collect();

        if segments.len() != values.len() + 1 {
            return Err(TemplateError::SegmentCountMismatch {
                num_segments: segments.len(),
                num_values: values.len(),
            });
        }

        Ok(Self {
            segments,
            values,
        })
    }

    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::new()
    }

    /// A template of literal text with nothing interpolated.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            values: vec![],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn values(&self) -> &[FragmentChild] {
        &self.values
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<FragmentChild>) {
        (self.segments, self.values)
    }
}
