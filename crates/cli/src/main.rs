mod cmd;
mod completions;
mod logging;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pass2csv", version, about = "Export a pass password store to CSV")]
pub struct Cli {
    /// Config file (defaults to ~/.config/pass2csv/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Config profile to use
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Log debug output, including skipped lines, to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decrypt every entry of a password store and write a CSV file
    Export(ExportArgs),

    /// Parse already-decrypted entry text and print the record as JSON
    Inspect(InspectArgs),

    /// Validate configuration and print resolved settings
    Doctor,

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Path to the password store folder to use
    pub path: Option<PathBuf>,

    /// Ask gpg to use its auth agent
    #[arg(short = 'a', long = "agent")]
    pub use_agent: bool,

    /// Path to the gpg binary to use
    #[arg(short = 'b', long)]
    pub gpgbinary: Option<String>,

    /// Output file, or "-" for stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Extra regex for metadata lines to drop (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Extension of encrypted entries
    #[arg(long)]
    pub extension: Option<String>,

    /// Decrypt entries in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// File holding decrypted text (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Entry path inside the store, used for name and folder (e.g. "work/email.gpg")
    #[arg(long)]
    pub entry: Option<PathBuf>,

    /// Extra regex for metadata lines to drop (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Completions { shell } => completions::print(shell),
        Commands::Export(args) => {
            let rc = cmd::load_config(cli.config.as_deref(), cli.profile.as_deref());
            let _guard = logging::init(&rc.logging, cli.verbose);
            cmd::export::run(&rc, args, cli.verbose);
        }
        Commands::Inspect(args) => {
            let rc = cmd::load_config(cli.config.as_deref(), cli.profile.as_deref());
            let _guard = logging::init(&rc.logging, cli.verbose);
            cmd::inspect::run(&rc, args);
        }
    }
}
