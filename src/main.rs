use clap::{Parser as ClapParser, Subcommand};
use jacq::cli::{self, CliError, GetOptions};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "jacq")]
#[command(about = "jacq - parse JSON and resolve dotted-path queries against it")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a query path against a JSON document
    Get {
        /// Dotted query path, e.g. 'servers.[0].host'
        path: String,

        /// JSON input file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Parse a JSON document and report whether it is valid
    Check {
        /// JSON input file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Get {
            path,
            input,
            pretty,
        } => run_get(path, input, pretty),
        Commands::Check { input } => run_check(input),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn load_input(file: Option<PathBuf>) -> Result<Option<String>, CliError> {
    match file {
        Some(path) => Ok(Some(std::fs::read_to_string(path).map_err(CliError::Io)?)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_get(path: String, input: Option<PathBuf>, pretty: bool) -> Result<(), CliError> {
    let options = GetOptions {
        path,
        input: load_input(input)?,
        pretty,
    };

    println!("{}", cli::execute_get(&options)?);
    Ok(())
}

fn run_check(input: Option<PathBuf>) -> Result<(), CliError> {
    let text = load_input(input)?;
    let report = cli::execute_check(text.as_deref())?;
    println!("Valid JSON ({} containers)", report.depth);
    Ok(())
}
