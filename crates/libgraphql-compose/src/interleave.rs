/// Alternates `segments` with `names` the way a template's literal text
/// alternates with its interpolated values:
/// `s[0] + n[0] + s[1] + n[1] + ... + s[len - 1]`.
///
/// Missing names contribute nothing and names past the last segment are
/// dropped.
pub fn interleave<S, N>(segments: &[S], names: &[N]) -> String
where
    S: AsRef<str>,
    N: AsRef<str>,
{
    let mut output = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        output.push_str(segment.as_ref());
        if let Some(name) = names.get(idx) {
            output.push_str(name.as_ref());
        }
    }
    output
}
