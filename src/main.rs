use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use seedloc::dataset;
use seedloc::index::Reference;
use seedloc::locate::{self, LocateOpt, OutputFormat};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "seedloc",
    author,
    version,
    about = "Locate reads in a reference tolerating one substitution per read",
    arg_required_else_help = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Tsv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Tsv => OutputFormat::Tsv,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Locate reads (FASTQ, FASTA or one sequence per line)
    Locate {
        /// Reads file, `-` for stdin
        reads: String,
        /// Reference FASTA (first record is used); built-in ABO fragment if omitted
        #[arg(short, long)]
        reference: Option<String>,
        /// Seed length; reads must be at least twice as long
        #[arg(short = 'k', long = "key-length", default_value_t = dataset::ABO_KEY_LENGTH)]
        key_length: usize,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Tsv)]
        format: Format,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Locate the built-in ABO reads and check their expected positions
    Selftest {
        /// Seed length; the expected positions hold for the default of 7
        #[arg(short = 'k', long = "key-length", default_value_t = dataset::ABO_KEY_LENGTH)]
        key_length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    match cli.command {
        Commands::Locate { reads, reference, key_length, out, format, threads } => {
            let reference = load_reference(reference.as_deref())?;
            let opt = LocateOpt { key_length, threads, format: format.into() };
            locate::locate_reads_with_opt(&reference, &reads, out.as_deref(), opt)?;
            Ok(())
        }
        Commands::Selftest { key_length } => {
            let stdout = std::io::stdout();
            locate::run_selftest(key_length, &mut stdout.lock())
        }
    }
}

fn load_reference(path: Option<&str>) -> Result<Reference> {
    match path {
        Some(path) => Reference::from_fasta_path(path),
        None => {
            log::info!("no reference given, using built-in {}", dataset::ABO_NAME);
            Ok(Reference::new(dataset::ABO_NAME, dataset::abo_reference()))
        }
    }
}
