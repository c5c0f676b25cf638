use crate::ast;
use crate::compose_query_text;
use crate::create_fragment;
use crate::create_query;
use crate::tests::utils::button_fragment;
use crate::tests::utils::image_fragment;
use crate::tests::utils::image_query_template;
use crate::tests::utils::single_line_fragment;
use crate::ComposeError;
use crate::Template;

fn print_query(template: Template) -> String {
    create_query(template).unwrap().to_string()
}

#[test]
fn plain_text_query_round_trips() {
    assert_eq!(
        print_query(Template::from_text("query Foo { name }")),
        "query Foo {\n  name\n}\n",
    );
}

#[test]
fn plain_values_are_spliced_verbatim() {
    let template = Template::new(
        ["query Things { thing(foo: ", ", bar: \"", "\") }"],
        vec![12_i32.into(), "baz".into()],
    ).unwrap();

    assert_eq!(
        print_query(template),
        "query Things {\n  thing(foo: 12, bar: \"baz\")\n}\n",
    );
}

#[test]
fn single_fragment_is_spread_and_defined() {
    let button = single_line_fragment("... on Button { id }");
    let name = button.name().to_string();
    let template = Template::builder()
        .text("query Q { button { ...")
        .fragment(&button)
        .text(" } }")
        .build();

    assert_eq!(print_query(template), format!(
        "query Q {{\n  button {{\n    ...{name}\n  }}\n}}\n\n\
         fragment {name} on Button {{\n  id\n}}\n",
    ));
}

#[test]
fn nested_fragments_are_all_defined() {
    let button = button_fragment();
    let image = image_fragment(&button);

    assert_eq!(
        print_query(image_query_template(&image)),
        concat!(
            "query Test {\n",
            "  id\n",
            "  image {\n",
            "    ...fragment_paqd3t\n",
            "  }\n",
            "}\n",
            "\n",
            "fragment fragment_paqd3t on Image {\n",
            "  id\n",
            "  button {\n",
            "    ...fragment_rqt2wq\n",
            "  }\n",
            "}\n",
            "\n",
            "fragment fragment_rqt2wq on Button {\n",
            "  id\n",
            "}\n",
        ),
    );
}

#[test]
fn plain_values_inside_fragments() {
    let fragment = create_fragment(
        Template::builder()
            .text("... on Thing { hello(where: \"")
            .value("world")
            .text("\", amount: ")
            .value(42)
            .text(") }")
            .build(),
    );
    let template = Template::builder()
        .text("query Things { thing { ...")
        .fragment(&fragment)
        .text(" }}")
        .build();

    assert_eq!(
        print_query(template),
        concat!(
            "query Things {\n",
            "  thing {\n",
            "    ...fragment_uiclhv\n",
            "  }\n",
            "}\n",
            "\n",
            "fragment fragment_uiclhv on Thing {\n",
            "  hello(where: \"world\", amount: 42)\n",
            "}\n",
        ),
    );
}

#[test]
fn equivalent_fragment_instances_print_identically() {
    let first = print_query(image_query_template(&button_fragment()));
    let second = print_query(image_query_template(&button_fragment()));
    assert_eq!(first, second);
}

#[test]
fn repeated_fragment_content_is_defined_once() {
    let first = button_fragment();
    let second = button_fragment();
    let template = Template::builder()
        .text("query Test { id image { ...")
        .fragment(&first)
        .text(" } button { ...")
        .fragment(&second)
        .text(" } }")
        .build();

    let printed = print_query(template);
    assert_eq!(printed.matches("fragment fragment_rqt2wq").count(), 1);
    assert_eq!(printed.matches("...fragment_rqt2wq").count(), 2);
}

#[test]
fn fragment_reachable_along_two_paths_is_defined_once() {
    let button = button_fragment();
    let image = image_fragment(&button);
    let template = Template::builder()
        .text("query Test { image { ...")
        .fragment(&image)
        .text(" } button { ...")
        .fragment(&button)
        .text(" } }")
        .build();

    let document = create_query(template).unwrap();
    let fragment_names: Vec<&str> = document.definitions
        .iter()
        .filter_map(|def| match def {
            ast::query::Definition::Fragment(frag) => Some(frag.name.as_str()),
            ast::query::Definition::Operation(_) => None,
        })
        .collect();
    assert_eq!(fragment_names, vec!["fragment_paqd3t", "fragment_rqt2wq"]);
}

#[test]
fn fragment_definitions_are_ordered_by_name() {
    let user = single_line_fragment("... on User { id }");
    let button = single_line_fragment("... on Button { id }");
    let image = single_line_fragment("... on Image { id }");
    let template = Template::builder()
        .text("{ user { ...")
        .fragment(&user)
        .text(" } button { ...")
        .fragment(&button)
        .text(" } image { ...")
        .fragment(&image)
        .text(" } }")
        .build();

    let printed = print_query(template);
    let image_pos = printed.find("fragment fragment_1qhj1t on Image").unwrap();
    let button_pos = printed.find("fragment fragment_bgqnr0 on Button").unwrap();
    let user_pos = printed.find("fragment fragment_njpxdv on User").unwrap();
    assert!(image_pos < button_pos);
    assert!(button_pos < user_pos);
}

#[test]
fn assembled_text_appends_fragments_to_last_segment() {
    let button = single_line_fragment("... on Button { id }");
    let template = Template::builder()
        .text("{ b { ...")
        .fragment(&button)
        .text(" } }")
        .build();

    assert_eq!(
        compose_query_text(template),
        format!("{{ b {{ ...{0} }} }}fragment {0}  on Button {{ id }}", button.name()),
    );
}

#[test]
fn multiple_fragments_are_joined_by_newline() {
    let button = button_fragment();
    let image = image_fragment(&button);
    let text = compose_query_text(image_query_template(&image));

    assert!(text.contains(&format!("{}\n{}", image.format(), button.format())));
}

#[test]
fn mutations_can_be_composed() {
    let button = single_line_fragment("... on Button { id }");
    let template = Template::builder()
        .text("mutation Press($id: ID!) { press(id: $id) { ...")
        .fragment(&button)
        .text(" } }")
        .build();

    let document = create_query(template).unwrap();
    assert_eq!(document.definitions.len(), 2);
    assert!(matches!(
        &document.definitions[0],
        ast::query::Definition::Operation(ast::query::OperationDefinition::Mutation(_)),
    ));
}

#[test]
fn malformed_graphql_surfaces_parse_error() {
    let result = create_query(Template::from_text("query Broken { name"));
    assert!(matches!(result, Err(ComposeError::Parse(_))));
}

#[test]
fn parse_error_message_is_passed_through() {
    let text = "query { field(arg: ) }";
    let expected = ast::query::parse(text).unwrap_err().to_string();
    let err = create_query(Template::from_text(text)).unwrap_err();
    assert_eq!(err.to_string(), expected);
}
