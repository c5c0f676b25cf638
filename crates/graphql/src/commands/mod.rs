mod compose;

use crate::Cli;
use crate::CommandResult;
use compose::ComposeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Assemble a query template and the fragment templates it references
    /// into a single GraphQL document.
    Compose(Box<ComposeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Compose(cmd) => cmd.run(cli).await
        }
    }
}
