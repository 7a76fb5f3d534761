use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pairwise_json_core::{generate, Properties};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "pairwise-json")]
#[command(about = "Generate pairwise-covering JSON test cases from a value schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate test cases from a schema file
    Generate {
        /// Input schema JSON file
        input: PathBuf,

        /// Properties JSON file (cardinality restrictions and object flags)
        #[arg(short, long)]
        properties: Option<PathBuf>,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            input,
            properties,
            output,
            format,
        } => {
            let schema: serde_json::Value = read_json(&input)
                .with_context(|| format!("Failed to load schema from: {}", input.display()))?;

            let props: Properties = match &properties {
                Some(path) => read_json(path)
                    .with_context(|| format!("Failed to load properties from: {}", path.display()))?,
                None => Properties::default(),
            };

            let results = generate(&schema, &props)
                .map_err(|e| anyhow::Error::from(e).context("Generation failed"))?;

            tracing::debug!(count = results.len(), "generated test cases");
            write_json(&results, output.as_ref(), format)?;
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;

    Ok(())
}
