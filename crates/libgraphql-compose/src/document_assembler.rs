use crate::ast;
use crate::interleave;
use crate::unique_fragments;
use crate::ComposeError;
use crate::FragmentChild;
use crate::FragmentRef;
use crate::Template;

/// Assembles `template` into a query document and parses it.
///
/// Every fragment reachable from the template's interpolated values,
/// directly or through other fragments, is emitted exactly once after the
/// operation, ordered by fragment name.
pub fn create_query(
    template: Template,
) -> Result<ast::query::Document, ComposeError> {
    let document_text = compose_query_text(template);
    Ok(ast::query::parse(document_text.as_str())?)
}

/// Same as [`create_query`], but returns the assembled document text
/// without parsing it.
pub fn compose_query_text(template: Template) -> String {
    let (mut segments, root_children) = template.into_parts();

    // The query itself is never emitted as a fragment, so collection starts
    // at its children rather than at a node of its own.
    let collected = collect_descendants(&root_children);
    log::trace!(
        "Collected {} fragment references from query template.",
        collected.len(),
    );

    let fragments_text = unique_fragments(collected)
        .iter()
        .map(|fragment| fragment.format())
        .collect::<Vec<_>>()
        .join("\n");
    if let Some(last_segment) = segments.last_mut() {
        last_segment.push_str(fragments_text.as_str());
    }

    let root_names: Vec<&str> =
        root_children.iter().map(FragmentChild::name).collect();
    let document_text = interleave(&segments, &root_names);
    log::debug!(
        "Assembled query document ({} bytes).",
        document_text.len(),
    );
    document_text
}

fn collect_descendants(children: &[FragmentChild]) -> Vec<FragmentRef> {
    children
        .iter()
        .fold(vec![], |acc, child| child.collect_fragments(acc))
}
