use crate::ast;

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The assembled document is not valid GraphQL. The parser's error is
    /// passed through as-is.
    #[error(transparent)]
    Parse(#[from] ast::query::ParseError),
}
