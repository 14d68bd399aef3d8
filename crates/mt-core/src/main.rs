//! morphtag - UD morphological tagging decision support
//!
//! The main entry point, handling:
//! - Browsing the built-in tagging guidance catalog
//! - Reviewing one analysis type with selectable recommendation ids
//! - Building a selection and exporting the copyable report
//! - An interactive line-oriented selection session

use clap::{Args, Parser, Subcommand};
use mt_catalog::{try_load_catalog, Catalog, CATALOG_SCHEMA_VERSION};
use mt_common::{Error, OutputFormat, RecommendationId, Result, StructuredError};
use mt_core::browse::{find_category, list_ids, render_category, render_overview};
use mt_core::config::{CliOverrides, ConfigResolution, RuntimeConfig};
use mt_core::exit_codes::ExitCode;
use mt_core::logging::{init_logging, LogFormat};
use mt_core::session::Session;
use mt_report::generate_report;
use mt_selection::{list_selection, toggle_selection, SelectionSet};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// morphtag - Universal Dependencies morphological tagging decision support
#[derive(Parser)]
#[command(name = "morphtag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Pin the report timestamp (env: MORPHTAG_NOW)
    #[arg(long, global = true, value_name = "YYYY-MM-DD HH:MM:SS")]
    now: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every analysis type and the morphological feature overview
    Catalog,

    /// Review one analysis type with its selectable recommendation ids
    Show(ShowArgs),

    /// List valid recommendation ids
    Ids(IdsArgs),

    /// Build a selection and print the copyable report
    Report(ReportArgs),

    /// Interactive selection session on stdin/stdout
    Session,

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Category key, e.g. VERB or VERB_analysis
    key: String,
}

#[derive(Args, Debug)]
struct IdsArgs {
    /// Restrict to one category
    key: Option<String>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Recommendation to select (repeatable, applied in order)
    #[arg(long = "select", short = 's', value_name = "ID", num_args = 1..)]
    select: Vec<String>,

    /// Recommendation to deselect after all selects are applied
    #[arg(long = "deselect", short = 'd', value_name = "ID", num_args = 1..)]
    deselect: Vec<String>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Success
            };
            let _ = err.print();
            std::process::exit(code.as_i32());
        }
    };

    let overrides = CliOverrides {
        format: cli.global.format,
        verbose: cli.global.verbose,
        quiet: cli.global.quiet,
        log_format: cli.global.log_format,
        now: cli.global.now.clone(),
    };
    let config = match RuntimeConfig::resolve(&overrides) {
        Ok(config) => config,
        Err(err) => std::process::exit(output_error(cli.global.format, &err).as_i32()),
    };

    init_logging(&config.log);
    debug!(
        format = %config.format,
        log_level = %config.log.level,
        now = %config.now,
        now_source = %config.now_source,
        "Runtime configuration resolved"
    );

    let catalog = match try_load_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            let err = Error::from(err);
            std::process::exit(output_error(config.format, &err).as_i32());
        }
    };

    let result = match &cli.command {
        Commands::Catalog => run_catalog(&config, catalog),
        Commands::Show(args) => run_show(&config, catalog, args),
        Commands::Ids(args) => run_ids(&config, catalog, args),
        Commands::Report(args) => run_report(&config, catalog, args),
        Commands::Session => run_session(&config, catalog),
        Commands::Version => print_version(&config),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(err) => output_error(config.format, &err),
    };
    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Commands
// ============================================================================

fn run_catalog(config: &RuntimeConfig, catalog: &Catalog) -> Result<()> {
    match config.format {
        OutputFormat::Json => emit(&serde_json::to_string_pretty(catalog)?),
        OutputFormat::Text => emit(&render_overview(catalog)),
    }
}

fn run_show(config: &RuntimeConfig, catalog: &Catalog, args: &ShowArgs) -> Result<()> {
    let category = find_category(catalog, &args.key)?;
    match config.format {
        OutputFormat::Json => emit(&serde_json::to_string_pretty(category)?),
        OutputFormat::Text => emit(&render_category(category, None)),
    }
}

fn run_ids(config: &RuntimeConfig, catalog: &Catalog, args: &IdsArgs) -> Result<()> {
    let ids = list_ids(catalog, args.key.as_deref())?;
    match config.format {
        OutputFormat::Json => emit(&serde_json::to_string_pretty(&ids)?),
        OutputFormat::Text => {
            let lines: Vec<String> = ids.iter().map(RecommendationId::to_string).collect();
            emit(&lines.join("\n"))
        }
    }
}

fn run_report(config: &RuntimeConfig, catalog: &Catalog, args: &ReportArgs) -> Result<()> {
    let mut set = SelectionSet::new();
    for (raw, selected) in args
        .select
        .iter()
        .map(|raw| (raw, true))
        .chain(args.deselect.iter().map(|raw| (raw, false)))
    {
        let id: RecommendationId = raw.parse()?;
        toggle_selection(catalog, &mut set, &id, selected)?;
    }

    let report = generate_report(set.list(), config.now);
    let payload = match config.format {
        OutputFormat::Text => report,
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "count": set.count(),
            "entries": list_selection(&set),
            "report": report,
        }))?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &payload)?;
            info!(
                path = %path.display(),
                bytes = payload.len(),
                selected = set.count(),
                "Report written"
            );
            Ok(())
        }
        None => emit(&payload),
    }
}

fn run_session(config: &RuntimeConfig, catalog: &Catalog) -> Result<()> {
    let pinned = (config.now_source != ConfigResolution::Default).then_some(config.now);
    let mut session = Session::new(catalog, pinned);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;
    Ok(())
}

fn print_version(config: &RuntimeConfig) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "morphtag_version": env!("CARGO_PKG_VERSION"),
                "catalog_schema_version": CATALOG_SCHEMA_VERSION,
                "rust_version": env!("CARGO_PKG_RUST_VERSION"),
            });
            emit(&serde_json::to_string_pretty(&info)?)
        }
        OutputFormat::Text => emit(&format!(
            "morphtag {}\ncatalog schema: {}",
            env!("CARGO_PKG_VERSION"),
            CATALOG_SCHEMA_VERSION
        )),
    }
}

// ============================================================================
// Output helpers
// ============================================================================

/// Write a command payload to stdout, newline-terminated.
fn emit(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Report an error on stderr in the requested format.
fn output_error(format: OutputFormat, err: &Error) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", StructuredError::from(err).to_json()),
        OutputFormat::Text => eprintln!("{}", err.to_human()),
    }
    ExitCode::from(err)
}
