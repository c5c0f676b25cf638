#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error(
        "A template with {num_values} interpolated values needs {} literal \
        segments, but {num_segments} were given.",
        .num_values + 1,
    )]
    SegmentCountMismatch {
        num_segments: usize,
        num_values: usize,
    },
}
