use crate::tests::utils::button_fragment;
use crate::FragmentChild;
use crate::Template;
use crate::TemplateBuilder;
use crate::TemplateError;

#[test]
fn new_accepts_one_more_segment_than_values() {
    let template = Template::new(["a(x: ", ")"], vec![3_i32.into()]).unwrap();
    assert_eq!(template.segments(), &["a(x: ".to_string(), ")".to_string()]);
    assert_eq!(template.values(), &[FragmentChild::from("3")]);
}

#[test]
fn new_rejects_too_few_segments() {
    let err = Template::new(["only"], vec![1_i32.into()]).unwrap_err();
    assert_eq!(err, TemplateError::SegmentCountMismatch {
        num_segments: 1,
        num_values: 1,
    });
    assert_eq!(
        err.to_string(),
        "A template with 1 interpolated values needs 2 literal segments, but \
        1 were given.",
    );
}

#[test]
fn new_rejects_too_many_segments() {
    let result = Template::new(["a", "b", "c"], vec![1_i32.into()]);
    assert!(matches!(
        result,
        Err(TemplateError::SegmentCountMismatch {
            num_segments: 3,
            num_values: 1,
        }),
    ));
}

#[test]
fn new_rejects_zero_segments() {
    let result = Template::new(Vec::<String>::new(), vec![]);
    assert!(result.is_err());
}

#[test]
fn from_text_has_no_values() {
    let template = Template::from_text("query Foo { name }");
    assert_eq!(template.segments().len(), 1);
    assert!(template.values().is_empty());
}

#[test]
fn builder_merges_adjacent_text() {
    let template = Template::builder()
        .text("query ")
        .text("Foo { name }")
        .build();
    assert_eq!(template, Template::from_text("query Foo { name }"));
}

#[test]
fn builder_separates_adjacent_values_with_empty_segments() {
    let button = button_fragment();
    let template = TemplateBuilder::default()
        .value("a")
        .fragment(&button)
        .build();

    assert_eq!(template.segments(), &["", "", ""]);
    assert_eq!(template.values().len(), 2);
    assert!(template.values()[1].as_fragment().is_some());
}

#[test]
fn empty_builder_yields_single_empty_segment() {
    let template = Template::builder().build();
    assert_eq!(template.segments(), &[""]);
}
