use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use cue_converto::convert::{cue_to_document, document_to_cue};

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(cmd) => {
            cue_to_document(&cmd.input_cue, cmd.output, cmd.format, cmd.force).await?
        }
        Commands::Unparse(cmd) => {
            document_to_cue(&cmd.input_document, cmd.output, cmd.format, cmd.force).await?
        }
    }

    Ok(())
}
