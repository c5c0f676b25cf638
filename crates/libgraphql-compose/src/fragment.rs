use crate::content_hash::fragment_name_for;
use crate::interleave;
use crate::FragmentChild;
use crate::Template;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// Shared handle to an immutable [`Fragment`].
///
/// The same fragment may be interpolated into any number of other
/// fragments and queries, so fragment trees are really DAGs of these
/// handles.
pub type FragmentRef = Arc<Fragment>;

/// A GraphQL fragment definition under construction.
///
/// The fragment's template is expected to start with an inline-fragment
/// marker (e.g. `... on User { id }`). When the fragment is
/// [formatted](Fragment::format) that first `...` is dropped and the
/// generated name is put in front of it, producing
/// `fragment fragment_1x2y3z on User { id }`.
///
/// Two fragments are equal iff their names are equal. Names are derived
/// from content only: the template's literal segments followed by the
/// names of its interpolated children, hashed with
/// [`content_hash`](crate::content_hash).
#[derive(Clone, Debug)]
pub struct Fragment {
    pub(crate) children: Vec<FragmentChild>,
    pub(crate) name: String,
    pub(crate) segments: Vec<String>,
}

impl Fragment {
    pub fn new(template: Template) -> Self {
        let (segments, children) = template.into_parts();

        let mut content = segments.concat();
        for child in &children {
            content.push_str(child.name());
        }
        let name = fragment_name_for(&content);
        log::trace!(
            "Created fragment `{name}` with {} interpolated values.",
            children.len(),
        );

        Self {
            children,
            name,
            segments,
        }
    }

    pub fn children(&self) -> &[FragmentChild] {
        &self.children
    }

    /// The name of each child, in interpolation order. Leaf values
    /// contribute their literal text.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(FragmentChild::name).collect()
    }

    /// Appends this fragment and then, depth-first and in interpolation
    /// order, every fragment reachable from its children.
    ///
    /// Nothing is deduplicated here: a fragment reachable along two paths
    /// is appended twice.
    pub fn collect_fragments(
        self: &Arc<Self>,
        mut acc: Vec<FragmentRef>,
    ) -> Vec<FragmentRef> {
        acc.push(Arc::clone(self));
        self.children
            .iter()
            .fold(acc, |acc, child| child.collect_fragments(acc))
    }

    /// Renders this fragment's `fragment <name> on <Type> { ... }`
    /// definition.
    pub fn format(&self) -> String {
        let body = interleave(&self.segments, &self.child_names());
        format!("fragment {} {}", self.name, body.replacen("...", "", 1))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Fragment {}

impl Hash for Fragment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

/// Builds a new [`Fragment`] from `template`.
///
/// Nothing beyond naming happens here; the fragment's descendants are only
/// walked once it is consumed by [`create_query`](crate::create_query).
pub fn create_fragment(template: Template) -> FragmentRef {
    Arc::new(Fragment::new(template))
}
