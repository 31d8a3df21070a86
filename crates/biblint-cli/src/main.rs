//! CLI entry point for biblint.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and
//! exit codes. All business logic lives in the `biblint-app` crate.

use anyhow::Context;
use biblint_app::{
    CheckInput, ExplainOutput, OutputFormat, list_checks, render_report, report_exit_code,
    run_check, run_explain,
};
use biblint_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "biblint.toml";

#[derive(Parser, Debug)]
#[command(
    name = "biblint",
    version,
    about = "Static checks for BibTeX databases and the LaTeX documents citing them"
)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). BIBLINT_LOG or RUST_LOG take precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Quickfix,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Quickfix => OutputFormat::Quickfix,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint bibliography files (and optionally the documents citing them).
    Check {
        /// Bibliography files, merged in the order given.
        #[arg(required = true)]
        bib: Vec<Utf8PathBuf>,

        /// LaTeX document to scan for citations and text checks (repeatable).
        #[arg(long = "tex", value_name = "FILE")]
        tex: Vec<Utf8PathBuf>,

        /// Check selection, e.g. 'DEFAULT:-misformatted-month:+repeated-words'.
        #[arg(long)]
        checks: Option<String>,

        /// Ignore `% LINT` suppression directives.
        #[arg(long)]
        no_suppressions: bool,

        /// Only check entries cited from the documents.
        #[arg(long)]
        only_cited: bool,

        /// Directory holding <key>.pdf / <key>.txt copies for check-local-copies.
        #[arg(long, value_name = "DIR")]
        local_dir: Option<Utf8PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Maximum complaints to emit.
        #[arg(long)]
        max_complaints: Option<u32>,

        /// Path to the config TOML. A missing biblint.toml is fine; an explicit path must exist.
        #[arg(long)]
        config: Option<Utf8PathBuf>,
    },

    /// List every available check.
    ListChecks,

    /// Describe one check.
    Explain {
        /// Check name, e.g. "check-isbn".
        check: String,
    },
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = std::env::var("BIBLINT_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Check {
            bib,
            tex,
            checks,
            no_suppressions,
            only_cited,
            local_dir,
            format,
            max_complaints,
            config,
        } => {
            let overrides = Overrides {
                checks,
                no_suppressions,
                only_cited,
                max_complaints,
            };
            let result = cmd_check(
                &bib,
                &tex,
                overrides,
                local_dir.as_deref(),
                format.into(),
                config.as_deref(),
            );
            match result {
                Ok(code) => {
                    if code != 0 {
                        std::process::exit(code);
                    }
                    Ok(())
                }
                Err(err) => {
                    eprintln!("biblint error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        Commands::ListChecks => {
            print!("{}", list_checks());
            Ok(())
        }
        Commands::Explain { check } => cmd_explain(&check),
    }
}

fn read_config(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
        }
        // Missing default config is allowed (defaults apply).
        None => Ok(std::fs::read_to_string(DEFAULT_CONFIG).unwrap_or_default()),
    }
}

fn cmd_check(
    bib: &[Utf8PathBuf],
    tex: &[Utf8PathBuf],
    overrides: Overrides,
    local_dir: Option<&Utf8Path>,
    format: OutputFormat,
    config: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let config_text = read_config(config)?;

    let output = run_check(CheckInput {
        bib_files: bib,
        tex_files: tex,
        config_text: &config_text,
        overrides,
        local_dir,
    })?;

    let rendered = render_report(&output.report, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("write output")?;
    stdout.flush().context("flush output")?;

    Ok(report_exit_code(&output.report))
}

fn cmd_explain(check: &str) -> anyhow::Result<()> {
    match run_explain(check) {
        ExplainOutput::Found(descriptor) => {
            print!("{}", biblint_app::format_explanation(descriptor));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", biblint_app::format_not_found(&identifier, &available));
            std::process::exit(1);
        }
    }
}
