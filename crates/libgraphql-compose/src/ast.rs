pub mod query {
    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;

    pub type ParseError = graphql_parser::query::ParseError;

    pub fn parse(query_src: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::query::parse_query::<String>(query_src)?.into_static())
    }
}
