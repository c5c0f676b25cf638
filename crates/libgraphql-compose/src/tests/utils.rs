use crate::create_fragment;
use crate::FragmentRef;
use crate::Template;

/// `... on Button { id }`, laid out across several lines.
pub fn button_fragment() -> FragmentRef {
    create_fragment(Template::from_text(
        "\n      ... on Button {\n        id\n    }",
    ))
}

/// `... on Image { id button { ...<button> } }`, laid out across several
/// lines.
pub fn image_fragment(button: &FragmentRef) -> FragmentRef {
    create_fragment(
        Template::builder()
            .text("\n      ... on Image {\n          id\n          button {\n              ...")
            .fragment(button)
            .text(" \n          }\n      }")
            .build(),
    )
}

/// `query Test { id image { ...<fragment> } }`
pub fn image_query_template(fragment: &FragmentRef) -> Template {
    Template::builder()
        .text("\n    query Test {\n        id\n        image {\n            ...")
        .fragment(fragment)
        .text("\n        }\n        \n    }")
        .build()
}

pub fn single_line_fragment(text: &str) -> FragmentRef {
    create_fragment(Template::from_text(text))
}
