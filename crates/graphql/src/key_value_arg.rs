/// Parses a `KEY=VALUE` command-line argument. Everything after the first
/// `=` belongs to the value, which may be empty.
pub(crate) fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg.split_once('=').ok_or_else(
        || format!("expected `KEY=VALUE`, got `{arg}`"),
    )?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{arg}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
