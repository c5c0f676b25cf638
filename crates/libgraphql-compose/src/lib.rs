//! Compose GraphQL query documents out of small, reusable fragment
//! templates.
//!
//! Each fragment is named after its own content (see [`Fragment::name`]),
//! so the same fragment text built in two unrelated places collapses into a
//! single fragment definition when both end up in one query.
//!
//! ```
//! use libgraphql_compose::create_fragment;
//! use libgraphql_compose::create_query;
//! use libgraphql_compose::Template;
//!
//! let button = create_fragment(Template::from_text("... on Button { id }"));
//! let query = create_query(
//!     Template::builder()
//!         .text("query Test { button { ...")
//!         .fragment(&button)
//!         .text(" } }")
//!         .build(),
//! ).unwrap();
//!
//! assert_eq!(query.to_string(), format!(
//!     "query Test {{\n  button {{\n    ...{0}\n  }}\n}}\n\n\
//!      fragment {0} on Button {{\n  id\n}}\n",
//!     button.name(),
//! ));
//! ```

pub mod ast;
mod compose_error;
mod content_hash;
mod document_assembler;
mod fragment;
mod fragment_child;
mod interleave;
mod leaf_value;
mod template;
mod template_builder;
mod template_error;
mod unique_fragments;

pub use compose_error::ComposeError;
pub use content_hash::content_hash;
pub use document_assembler::compose_query_text;
pub use document_assembler::create_query;
pub use fragment::create_fragment;
pub use fragment::Fragment;
pub use fragment::FragmentRef;
pub use fragment_child::FragmentChild;
pub use interleave::interleave;
pub use leaf_value::LeafValue;
pub use template::Template;
pub use template_builder::TemplateBuilder;
pub use template_error::TemplateError;
pub use unique_fragments::unique_fragments;
