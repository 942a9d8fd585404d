//! Command line tool for the FNS decay heat benchmark

// standard library
use std::path::PathBuf;
use std::process::ExitCode;

// external crates
use actools_benchmark::{build_docs, Benchmark, ExperimentCatalog, Outcome, PageOptions, FNS_URL};
use clap::{Parser, Subcommand};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(name = "fns", version, about = "FNS decay heat benchmark tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download and unpack the benchmark archive
    Download {
        /// Directory for the archive and its extracted contents
        #[arg(long, default_value = "docs")]
        dir: PathBuf,

        /// Remote archive location
        #[arg(long, default_value = FNS_URL)]
        url: String,
    },

    /// Write a markdown page per element and print the chapter index
    Docs {
        /// Extracted benchmark folder
        #[arg(long, default_value = "docs/fns")]
        source: PathBuf,

        /// Output directory for the pages
        #[arg(long, default_value = "docs")]
        out: PathBuf,

        /// Embed interactive HTML plots
        #[arg(long)]
        iframe: bool,

        /// Include full element names in page titles
        #[arg(long)]
        element_names: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> actools_benchmark::Result<()> {
    match command {
        Command::Download { dir, url } => {
            let report = Benchmark::new(&url, dir).install()?;
            if report.download == Outcome::Skipped && report.extraction == Outcome::Skipped {
                info!("Benchmark already installed");
            }
        }
        Command::Docs {
            source,
            out,
            iframe,
            element_names,
        } => {
            let catalog = ExperimentCatalog::scan(source)?;
            let options = PageOptions {
                iframe,
                element_names,
            };
            for line in build_docs(&catalog, out, options)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    // warnings are shown by default
    let verbosity = 1 + verbose as usize;

    // failure only means a logger is already set
    let _ = stderrlog::new()
        .modules(["fns", "actools_benchmark"])
        .quiet(false)
        .verbosity(if quiet { 0 } else { verbosity })
        .show_module_names(false)
        .init();
}
