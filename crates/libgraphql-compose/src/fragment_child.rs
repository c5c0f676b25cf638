use crate::FragmentRef;
use crate::LeafValue;
use std::sync::Arc;

/// One interpolated value within a [`Template`](crate::Template), and
/// therefore one child of the [`Fragment`](crate::Fragment) built from it.
#[derive(Clone, Debug, PartialEq)]
pub enum FragmentChild {
    /// Spliced as the fragment's generated name; its definition is emitted
    /// separately when the enclosing query is assembled.
    Fragment(FragmentRef),

    /// Spliced as plain text.
    Leaf(LeafValue),
}

impl FragmentChild {
    /// The text this child contributes when interleaved with template
    /// segments.
    pub fn name(&self) -> &str {
        match self {
            Self::Fragment(fragment) => fragment.name(),
            Self::Leaf(leaf) => leaf.name(),
        }
    }

    pub fn as_fragment(&self) -> Option<&FragmentRef> {
        match self {
            Self::Fragment(fragment) => Some(fragment),
            Self::Leaf(_) => None,
        }
    }

    /// Appends every fragment reachable through this child to `acc`. Leaf
    /// values hand `acc` back untouched.
    pub fn collect_fragments(&self, acc: Vec<FragmentRef>) -> Vec<FragmentRef> {
        match self {
            Self::Fragment(fragment) => fragment.collect_fragments(acc),
            Self::Leaf(_) => acc,
        }
    }
}

impl From<FragmentRef> for FragmentChild {
    fn from(fragment: FragmentRef) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<&FragmentRef> for FragmentChild {
    fn from(fragment: &FragmentRef) -> Self {
        Self::Fragment(Arc::clone(fragment))
    }
}

impl From<LeafValue> for FragmentChild {
    fn from(leaf: LeafValue) -> Self {
        Self::Leaf(leaf)
    }
}

macro_rules! impl_from_display_for_fragment_child {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FragmentChild {
                fn from(value: $ty) -> Self {
                    Self::Leaf(LeafValue::new(value))
                }
            }
        )*
    };
}

impl_from_display_for_fragment_child!(
    &str, &String, String, char, bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);
