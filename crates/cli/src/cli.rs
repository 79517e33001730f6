use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{rerun_command, select_command, sinks_command, SinksAction};

/// Pick a project task and run it
#[derive(Parser)]
#[command(name = "taskpick")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct TaskPickCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a task from the project catalog and run it
    #[command(visible_alias = "s")]
    Select {
        /// Run in the directory of FILE instead of the project root
        #[arg(short = 'f', long = "file")]
        file: Option<String>,

        /// Run in the file's directory rather than the project root
        #[arg(long = "here", requires = "file")]
        here: bool,

        /// Prompt for extra command arguments before running
        #[arg(short = 'p', long = "prompt-args")]
        prompt_args: bool,
    },
    /// Rediscover the project's tasks, then pick and run one
    #[command(visible_alias = "r")]
    Refresh {
        /// Run in the directory of FILE instead of the project root
        #[arg(short = 'f', long = "file")]
        file: Option<String>,

        /// Run in the file's directory rather than the project root
        #[arg(long = "here", requires = "file")]
        here: bool,

        /// Prompt for extra command arguments before running
        #[arg(short = 'p', long = "prompt-args")]
        prompt_args: bool,
    },
    /// Run the project's most recent task again, unchanged
    Rerun,
    /// Inspect or tear down live task sinks
    Sinks {
        #[command(subcommand)]
        action: SinksCmd,
    },
}

#[derive(Subcommand, Debug)]
pub enum SinksCmd {
    /// List live sinks in creation order
    List,
    /// Print the buffered output of one sink
    Focus {
        /// Sink name as shown by `sinks list`
        name: String,
    },
    /// Kill one sink by name
    Kill {
        /// Sink name as shown by `sinks list`
        name: String,
    },
    /// Kill every live sink
    KillAll,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Select {
                file,
                here,
                prompt_args,
            } => select_command(file.as_deref(), here, prompt_args, false),
            Commands::Refresh {
                file,
                here,
                prompt_args,
            } => select_command(file.as_deref(), here, prompt_args, true),
            Commands::Rerun => rerun_command(),
            Commands::Sinks { action } => match action {
                SinksCmd::List => sinks_command(SinksAction::List),
                SinksCmd::Focus { name } => sinks_command(SinksAction::Focus(name)),
                SinksCmd::Kill { name } => sinks_command(SinksAction::Kill(name)),
                SinksCmd::KillAll => sinks_command(SinksAction::KillAll),
            },
        }
    }
}
