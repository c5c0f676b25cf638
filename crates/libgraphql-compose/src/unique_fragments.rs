use crate::FragmentRef;
use std::collections::BTreeMap;

/// Reduces `fragments` to one entry per fragment name, ordered by name.
///
/// When several entries share a name the last one wins. Names are derived
/// from content, so which instance survives never changes the output
/// text.
pub fn unique_fragments(
    fragments: impl IntoIterator<Item = FragmentRef>,
) -> Vec<FragmentRef> {
    let mut by_name: BTreeMap<String, FragmentRef> = BTreeMap::new();
    let mut num_collected = 0;
    for fragment in fragments {
        num_collected += 1;
        by_name.insert(fragment.name().to_string(), fragment);
    }

    log::debug!(
        "Deduplicated {num_collected} collected fragments down to {} unique \
        fragments.",
        by_name.len(),
    );
    by_name.into_values().collect()
}
