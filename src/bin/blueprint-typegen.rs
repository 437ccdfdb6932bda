use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use blueprint_typegen::{
    generate_snippet, render_snippet_text, BufferSink, Dialect, FileSchemaSource,
    GeneratorConfig, TypegenError, WriterSink,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blueprint-typegen", version)]
#[command(about = "Generate TypeScript data types from a contract blueprint")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log detail (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON-schema-faithful types (ConStr<i>)
    Canonical(RunArgs),
    /// Generate Mesh SDK types (MConStr<i>, M-prefixed names)
    Mesh(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Blueprint JSON file (for example plutus.json)
    schema: PathBuf,

    /// TOML file overriding type tables, builtin titles or symbol pattern
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write generated text here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), TypegenError> {
    let (dialect, args) = match command {
        Commands::Canonical(args) => (Dialect::Canonical, args),
        Commands::Mesh(args) => (Dialect::Mesh, args),
    };

    let config = match &args.config {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };

    let source = FileSchemaSource::new(&args.schema);
    let count = match &args.output {
        // The output file is only written after generation succeeds.
        Some(path) => {
            let mut sink = BufferSink::new();
            let count = generate_snippet(&source, &mut sink, dialect, &config)?;
            fs::write(path, render_snippet_text(sink.lines()))?;
            count
        }
        None => {
            let mut sink = WriterSink::new(io::stdout().lock());
            generate_snippet(&source, &mut sink, dialect, &config)?
        }
    };
    tracing::info!(lines = count, schema = %source.path().display(), "inserted generated types");
    Ok(())
}
