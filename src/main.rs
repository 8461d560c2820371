//! @ai:module:intent CLI entry point for report generation
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on service, record, config, output

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use report_factory::{
    load_records, output, AppConfig, Destination, OutputFormat, ReportFactory, ReportService,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "report-factory")]
#[command(about = "Generate CSV, PDF and JSON reports from JSON records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report from a JSON array of records
    Generate {
        /// Report type (csv, pdf, json); case-insensitive
        report_type: Option<String>,

        /// Path to a JSON file holding an array of {id, name} records
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the report into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File name without extension
        #[arg(long)]
        stem: Option<String>,

        /// Print the report instead of writing a file
        #[arg(long)]
        print: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List supported report types
    Types {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "report-factory.toml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("report_factory=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            report_type,
            input,
            output,
            stem,
            print,
            format,
            config,
        } => generate(GenerateArgs {
            report_type,
            input,
            output,
            stem,
            print,
            format,
            config,
        }),
        Commands::Types { format } => {
            let factory = ReportFactory::new();
            println!(
                "{}",
                output::format_report_types(factory.supported_types(), format.into())
            );
            Ok(())
        }
        Commands::Init { output } => init_config(output),
    }
}

struct GenerateArgs {
    report_type: Option<String>,
    input: PathBuf,
    output: Option<PathBuf>,
    stem: Option<String>,
    print: bool,
    format: Format,
    config: Option<PathBuf>,
}

/// @ai:intent Generate one report and save or print it
/// @ai:effects fs:read, fs:write
fn generate(args: GenerateArgs) -> Result<()> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    let report_type = config.resolve_report_type(args.report_type);

    let records = load_records(&args.input)?;

    tracing::info!("Loaded {} records from {}", records.len(), args.input.display());

    let service = ReportService::new(ReportFactory::new());
    let report = service.generate_report(&report_type, &records)?;

    let saved_to = match config.resolve_destination(args.print, args.output, args.stem) {
        Destination::Stdout => None,
        Destination::File { dir, stem } => Some(report.save(&dir, &stem)?),
    };

    println!(
        "{}",
        output::format_generated_report(&report, saved_to.as_deref(), args.format.into())
    );

    Ok(())
}

/// @ai:intent Write a default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    if output.exists() {
        anyhow::bail!("Config file already exists: {}", output.display());
    }

    AppConfig::default().save(&output)?;
    tracing::info!("Default configuration written to {}", output.display());
    Ok(())
}
