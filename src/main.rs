//! Markdown to Word batch converter CLI

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use colored::*;
use md2docx::config::{Settings, CONFIG_ENV, CONVERTER_ENV};
use md2docx::converter::probe_converter;
use md2docx::models::{FileOutcome, OutcomeKind, OverwritePolicy};
use md2docx::report::{self, COMPLETION_LINE};
use md2docx::{convert_files, ConversionJob, ConversionOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "md2docx")]
#[command(about = "Batch-convert markdown files to Word documents with an external converter", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to $MD2DOCX_CONFIG, then ./md2docx.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a list of markdown files
    Convert(ConvertArgs),

    /// List the jobs defined in the settings file
    Jobs,

    /// Check that the configured converter can be launched
    Check {
        /// Converter executable (overrides $MD2DOCX_CONVERTER and settings)
        #[arg(long)]
        converter: Option<PathBuf>,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["files", "job", "job_file"])))]
struct ConvertArgs {
    /// Markdown files to convert, in order
    files: Vec<PathBuf>,

    /// Run a job defined in the settings file
    #[arg(short, long)]
    job: Option<String>,

    /// Read the file list from a text or JSON file
    #[arg(long)]
    job_file: Option<PathBuf>,

    /// Converter executable (overrides $MD2DOCX_CONVERTER and settings)
    #[arg(long)]
    converter: Option<PathBuf>,

    /// Directory the files are resolved against
    #[arg(short = 'C', long)]
    dir: Option<PathBuf>,

    /// Output extension
    #[arg(long = "to")]
    target_extension: Option<String>,

    /// Leave inputs alone whose output already exists
    #[arg(long)]
    skip_existing: bool,

    /// Write a markdown report of the batch to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Print a JSON summary instead of status lines
    #[arg(long)]
    json: bool,

    /// Exit with status 1 if any file was missing or failed, or the batch aborted
    #[arg(long)]
    fail_on_error: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = Settings::load(cli.config.as_deref(), env_var(CONFIG_ENV).as_deref()).and_then(
        |settings| match cli.command {
            Commands::Convert(args) => run_convert(&settings, args),
            Commands::Jobs => run_jobs(&settings).map(|_| 0),
            Commands::Check { converter } => run_check(&settings, converter.as_deref()).map(|_| 0),
        },
    );

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn run_convert(settings: &Settings, args: ConvertArgs) -> Result<i32> {
    let converter =
        settings.resolve_converter(args.converter.as_deref(), env_var(CONVERTER_ENV).as_deref())?;

    let mut options = ConversionOptions::new(converter);
    options.target_extension = settings.resolve_extension(args.target_extension.as_deref())?;
    if let Some(dir) = args.dir {
        options.work_dir = dir;
    }
    if args.skip_existing {
        options.overwrite = OverwritePolicy::Skip;
    }

    let job = if let Some(name) = &args.job {
        settings.job(name)?
    } else if let Some(path) = &args.job_file {
        md2docx::parser::load_job_file(path)?
    } else {
        ConversionJob::new(args.files)
    };

    tracing::debug!(job = job.label(), files = job.len(), converter = %options.converter.program.display(), "starting batch");

    let json = args.json;
    let summary = convert_files(&job, &options, |outcome| {
        if !json {
            print_outcome(outcome);
        }
    })?;

    if json {
        println!("{}", report::to_json(&summary)?);
    } else {
        println!();
        println!("{}", COMPLETION_LINE.bold());
    }

    if let Some(report_path) = &args.report {
        let content = report::generate_report(&summary)?;
        std::fs::write(report_path, content)?;
        if !json {
            println!("Report: {}", report_path.display());
        }
    }

    if args.fail_on_error && !summary.is_clean() {
        return Ok(1);
    }
    Ok(0)
}

fn print_outcome(outcome: &FileOutcome) {
    let line = report::status_line(outcome);
    match outcome.kind {
        OutcomeKind::Converted { .. } => println!("{}", line.green()),
        OutcomeKind::SkippedExisting { .. } => println!("{}", line.yellow()),
        OutcomeKind::MissingInput | OutcomeKind::ConversionFailed { .. } => println!("{}", line.red()),
        OutcomeKind::ExecutableUnavailable { .. } => println!("{}", line.red().bold()),
    }
}

fn run_jobs(settings: &Settings) -> Result<()> {
    if settings.jobs.is_empty() {
        println!("{}", "No jobs configured.".yellow());
        println!("Add [jobs.<name>] tables with a `files` list to md2docx.toml.");
        return Ok(());
    }

    println!("{}", "Configured jobs".bold().blue());
    println!("{}", "=".repeat(50).blue());
    for (name, job) in &settings.jobs {
        let dir = job
            .dir
            .as_deref()
            .map(|d| format!(" (in {})", d.display()))
            .unwrap_or_default();
        println!("{} - {} file(s){}", name.bold(), job.files.len(), dir);
        for file in &job.files {
            println!("    {}", file.display());
        }
    }
    Ok(())
}

fn run_check(settings: &Settings, converter: Option<&Path>) -> Result<()> {
    let converter = settings.resolve_converter(converter, env_var(CONVERTER_ENV).as_deref())?;
    println!("Converter: {}", converter.program.display());
    if !converter.extra_args.is_empty() {
        println!("Extra arguments: {}", converter.extra_args.join(" "));
    }

    let info = probe_converter(&converter.program)?;
    match &info.version {
        Some(version) => println!("{}", format!("✅ {} {}", info.name, version).green().bold()),
        None => println!("{}", format!("✅ {}", info.banner).green().bold()),
    }
    Ok(())
}
