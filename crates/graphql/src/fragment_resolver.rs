use crate::template_source::TemplateSource;
use libgraphql_compose::create_fragment;
use libgraphql_compose::FragmentChild;
use libgraphql_compose::FragmentRef;
use libgraphql_compose::LeafValue;
use libgraphql_compose::Template;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, FragmentResolveError>;

/// Turns [`TemplateSource`]s into [`Template`]s by resolving each
/// placeholder key to either a named fragment template or a plain value.
///
/// Each fragment key is built at most once, so every reference to it shares
/// a single [`FragmentRef`].
#[derive(Debug)]
pub(crate) struct FragmentResolver<'a> {
    fragment_sources: &'a HashMap<String, TemplateSource>,
    resolved: HashMap<String, FragmentRef>,
    resolving: Vec<String>,
    vars: &'a HashMap<String, String>,
}

impl<'a> FragmentResolver<'a> {
    pub fn new(
        fragment_sources: &'a HashMap<String, TemplateSource>,
        vars: &'a HashMap<String, String>,
    ) -> Result<Self> {
        let mut ambiguous_keys: Vec<String> = vars.keys()
            .filter(|key| fragment_sources.contains_key(*key))
            .cloned()
            .collect();
        if !ambiguous_keys.is_empty() {
            ambiguous_keys.sort();
            return Err(FragmentResolveError::AmbiguousKeys(ambiguous_keys));
        }

        Ok(Self {
            fragment_sources,
            resolved: HashMap::new(),
            resolving: vec![],
            vars,
        })
    }

    pub fn resolve_template(
        &mut self,
        source: &TemplateSource,
    ) -> Result<Template> {
        let mut values = Vec::with_capacity(source.keys.len());
        for key in &source.keys {
            values.push(self.resolve_key(key)?);
        }

        Template::new(source.segments.iter().cloned(), values)
            .map_err(FragmentResolveError::MalformedTemplate)
    }

    fn resolve_key(&mut self, key: &str) -> Result<FragmentChild> {
        if let Some(value) = self.vars.get(key) {
            return Ok(FragmentChild::Leaf(LeafValue::new(value)));
        }
        Ok(FragmentChild::Fragment(self.resolve_fragment(key)?))
    }

    fn resolve_fragment(&mut self, key: &str) -> Result<FragmentRef> {
        if let Some(fragment) = self.resolved.get(key) {
            return Ok(Arc::clone(fragment));
        }

        if let Some(cycle_start) = self.resolving.iter().position(|k| k == key) {
            let mut cycle_path = self.resolving[cycle_start..].to_vec();
            cycle_path.push(key.to_string());
            return Err(FragmentResolveError::FragmentCycleDetected { cycle_path });
        }

        let fragment_sources = self.fragment_sources;
        let source = fragment_sources.get(key).ok_or_else(
            || FragmentResolveError::UndefinedKey(key.to_string()),
        )?;

        self.resolving.push(key.to_string());
        let template = self.resolve_template(source);
        self.resolving.pop();

        let fragment = create_fragment(template?);
        log::debug!("Resolved fragment key `{key}` to `{}`.", fragment.name());
        self.resolved.insert(key.to_string(), Arc::clone(&fragment));
        Ok(fragment)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub(crate) enum FragmentResolveError {
    #[error("Keys defined both as a fragment and as a --var: {0:?}")]
    AmbiguousKeys(Vec<String>),

    #[error("Fragment cycle detected: {}", .cycle_path.join(" -> "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error(transparent)]
    MalformedTemplate(libgraphql_compose::TemplateError),

    #[error("No fragment file or --var defines the key `{0}`")]
    UndefinedKey(String),
}
