use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "envgate",
    version,
    about = "Validate .env files against required keys and value policies"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Per-key trace output (debug log level unless ENVGATE_LOG is set)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an env file
    Check(CheckArgs),
    /// List the policies a check would consult, in order
    Policies(PoliciesArgs),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(long, default_value = ".env")]
    pub file: PathBuf,

    /// Config file; `envgate.yaml` in the working directory is used when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Required key (repeatable), added to the config's `required` list
    #[arg(long = "require", value_name = "KEY")]
    pub require: Vec<String>,

    /// Every assignment must quote its value
    #[arg(long)]
    pub enforce_quoting: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PoliciesArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
