use std::fmt;

/// An interpolated value that is not a [`Fragment`](crate::Fragment).
///
/// Only the value's text survives: it is spliced verbatim into the
/// surrounding template and never emits a fragment definition of its own.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LeafValue {
    name: String,
}

impl LeafValue {
    pub fn new(value: impl fmt::Display) -> Self {
        Self {
            name: value.to_string(),
        }
    }

    /// The textual form of the wrapped value.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())
    }
}
