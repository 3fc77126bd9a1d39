pub mod dev;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "duet", version, about = "Runs a development server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run development servers (frontend + backend). This is the default.
    Dev,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Dev) => dev::run(),
        Some(Commands::Completions { shell }) => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "duet", &mut std::io::stdout());
            Ok(())
        }
    }
}
