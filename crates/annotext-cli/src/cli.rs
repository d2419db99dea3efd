//! Command dispatch for the `annotext` entrypoint.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use annotext::{AnnotatedText, FilterQuery};
use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use tracing::{debug, info};

use crate::config::{CliConfig, LogLevel};
use crate::error::CliError;
use crate::logging::init_logging;
use crate::output::{write_line, write_sentence, write_tag, write_tags_json, write_token};

/// Inspect and filter annotated-text documents stored as JSON.
#[derive(Parser)]
#[command(name = "annotext", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Test whether any tag matches a filter query; exits 1 when none does.
    Filter(FilterArgs),
    /// List every lemma in document order.
    Tokens(OrderArgs),
    /// List every tag in document order.
    Tags(TagsArgs),
    /// List sentence numbers and text.
    Sentences(OrderArgs),
    /// Validate a filter query strictly and print its normalised form.
    Check(CheckArgs),
}

#[derive(Args)]
pub(crate) struct FilterArgs {
    /// Annotated document in JSON form.
    pub file: PathBuf,
    /// Query such as `Nice/Location, attack`.
    pub query: String,
    /// Keep whitespace around query segments.
    #[arg(long)]
    pub verbatim: bool,
    /// Reject malformed queries instead of matching permissively.
    #[arg(long)]
    pub strict: bool,
    /// Print every matching tag instead of stopping at the first.
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub(crate) struct OrderArgs {
    /// Annotated document in JSON form.
    pub file: PathBuf,
    /// Visit sentences in sentence-number order.
    #[arg(long)]
    pub sorted: bool,
}

#[derive(Args)]
pub(crate) struct TagsArgs {
    /// Annotated document in JSON form.
    pub file: PathBuf,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Query to validate.
    pub query: String,
    /// Keep whitespace around query segments.
    #[arg(long)]
    pub verbatim: bool,
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The command succeeded.
    Success,
    /// A filter found no matching tag.
    NoMatch,
}

pub(crate) fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    let verbatim = match &cli.command {
        Commands::Filter(args) => args.verbatim,
        Commands::Check(args) => args.verbatim,
        Commands::Tokens(_) | Commands::Tags(_) | Commands::Sentences(_) => false,
    };
    let config = CliConfig::from_env()?.apply_overrides(cli.log_level, verbatim);
    init_logging(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, &config, &mut out)
}

fn dispatch(command: Commands, config: &CliConfig, out: &mut dyn Write) -> Result<Outcome> {
    match command {
        Commands::Filter(args) => handle_filter(&args, config, out),
        Commands::Tokens(args) => handle_tokens(&args, out),
        Commands::Tags(args) => handle_tags(&args, out),
        Commands::Sentences(args) => handle_sentences(&args, out),
        Commands::Check(args) => handle_check(&args, config, out),
    }
}

fn load_document(path: &Path) -> Result<AnnotatedText> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let text: AnnotatedText = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse annotated text in {}", path.display()))?;
    info!(
        path = %path.display(),
        sentences = text.len(),
        terms = text.num_terms(),
        "loaded annotated text"
    );
    Ok(text)
}

fn parse_query(query: &str, strict: bool, config: &CliConfig) -> Result<FilterQuery, CliError> {
    if strict {
        Ok(FilterQuery::parse_strict(query, config.trim_policy)?)
    } else {
        Ok(FilterQuery::parse(query, config.trim_policy))
    }
}

fn handle_filter(args: &FilterArgs, config: &CliConfig, out: &mut dyn Write) -> Result<Outcome> {
    let text = load_document(&args.file)?;
    let query = parse_query(&args.query, args.strict, config)?;
    debug!(query = %query, terms = query.len(), policy = %config.trim_policy, "parsed filter");

    let matched = if args.all {
        let hits = text.matching_tags(&query);
        for tag in &hits {
            write_tag(out, tag)?;
        }
        !hits.is_empty()
    } else {
        text.filter_query(&query)
    };

    if matched {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::NoMatch)
    }
}

fn handle_tokens(args: &OrderArgs, out: &mut dyn Write) -> Result<Outcome> {
    let mut text = load_document(&args.file)?;
    if args.sorted {
        text.sort_in_place();
    }
    for lemma in text.tokens() {
        write_token(out, lemma)?;
    }
    Ok(Outcome::Success)
}

fn handle_tags(args: &TagsArgs, out: &mut dyn Write) -> Result<Outcome> {
    let text = load_document(&args.file)?;
    let tags = text.tags();
    if args.json {
        write_tags_json(out, &tags)?;
    } else {
        for tag in tags {
            write_tag(out, tag)?;
        }
    }
    Ok(Outcome::Success)
}

fn handle_sentences(args: &OrderArgs, out: &mut dyn Write) -> Result<Outcome> {
    let text = load_document(&args.file)?;
    let sentences = if args.sorted {
        text.sorted_view()
    } else {
        text.sentences().iter().collect()
    };
    for sentence in sentences {
        write_sentence(out, sentence)?;
    }
    Ok(Outcome::Success)
}

fn handle_check(args: &CheckArgs, config: &CliConfig, out: &mut dyn Write) -> Result<Outcome> {
    let query = parse_query(&args.query, true, config)?;
    write_line(out, &query.to_string())?;
    Ok(Outcome::Success)
}
