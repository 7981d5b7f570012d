mod check;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlexec")]
pub(crate) enum CommandEnum {
    Check(Box<CheckCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await
        }
    }
}
