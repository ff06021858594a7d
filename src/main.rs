//! retext command-line interface.
//!
//! Every subcommand reads its text from the positional argument or, when it
//! is omitted, from stdin, and prints JSON on stdout. Logs go to stderr.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use retext::{
    Granularity, Intensity, RetextConfig, RewriteOptions, SimilarityEstimator, SimilarityMethod,
    Style, estimate_similarity_with, humanize, rewrite, run_reversal, run_transform,
};

#[derive(Debug, Parser)]
#[command(name = "retext", version, about = "Rewrite, humanize and reverse text")]
struct Cli {
    /// YAML file with tool defaults
    #[arg(long, global = true, env = "RETEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Single rule pass at one granularity
    Transform {
        #[command(flatten)]
        shared: RewriteArgs,
        #[arg(long)]
        granularity: Option<Granularity>,
        /// Similarity method used for the uniqueness score
        #[arg(long)]
        method: Option<SimilarityMethod>,
        text: Option<String>,
    },
    /// Word pass then sentence pass
    Rewrite {
        #[command(flatten)]
        shared: RewriteArgs,
        text: Option<String>,
    },
    /// Casual rewrite with contractions
    Humanize {
        #[arg(long)]
        level: Option<Intensity>,
        #[arg(long)]
        seed: Option<u64>,
        text: Option<String>,
    },
    /// Reverse characters, words, sentences or paragraphs
    Reverse {
        #[arg(long)]
        mode: Option<String>,
        #[arg(long)]
        preserve_spaces: bool,
        #[arg(long)]
        maintain_case: bool,
        #[arg(long)]
        preserve_numbers: bool,
        #[arg(long)]
        preserve_paragraphs: bool,
        #[arg(long)]
        mirror_words: bool,
        text: Option<String>,
    },
    /// Score two texts against each other
    Similarity {
        #[arg(long)]
        method: Option<SimilarityMethod>,
        a: String,
        b: String,
    },
}

#[derive(Debug, Args)]
struct RewriteArgs {
    #[arg(long)]
    style: Option<Style>,
    #[arg(long)]
    intensity: Option<Intensity>,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match &cli.config {
        Some(path) => RetextConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RetextConfig::default(),
    };

    let output = run(cli.command, &config)?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

fn run(command: Command, config: &RetextConfig) -> Result<serde_json::Value> {
    let section = &config.transform;
    match command {
        Command::Transform {
            shared,
            granularity,
            method,
            text,
        } => {
            let text = input_text(text)?;
            let mut cfg = section.to_transform_config();
            if let Some(style) = shared.style {
                cfg = cfg.with_style(style);
            }
            if let Some(intensity) = shared.intensity {
                cfg = cfg.with_intensity(intensity);
            }
            if let Some(granularity) = granularity {
                cfg = cfg.with_granularity(granularity);
            }
            if let Some(method) = method {
                cfg = cfg.with_similarity_method(method);
            }
            let result = run_transform(&text, &cfg, shared.seed.or(section.seed))?;
            Ok(serde_json::to_value(result)?)
        }
        Command::Rewrite { shared, text } => {
            let text = input_text(text)?;
            let opts = RewriteOptions {
                style: shared.style.unwrap_or(section.style),
                intensity: shared.intensity.unwrap_or(section.intensity),
                seed: shared.seed.or(section.seed),
                preserve_spaces: section.preserve_spaces,
                maintain_case: section.maintain_case,
                preserve_numbers: section.preserve_numbers,
                uniqueness_threshold: section.uniqueness_threshold,
                similarity_method: section.similarity_method,
            };
            let result = rewrite(&text, &opts)?;
            Ok(serde_json::to_value(result)?)
        }
        Command::Humanize { level, seed, text } => {
            let text = input_text(text)?;
            let result = humanize(
                &text,
                level.unwrap_or(section.intensity),
                seed.or(section.seed),
            )?;
            Ok(serde_json::to_value(result)?)
        }
        Command::Reverse {
            mode,
            preserve_spaces,
            maintain_case,
            preserve_numbers,
            preserve_paragraphs,
            mirror_words,
            text,
        } => {
            let text = input_text(text)?;
            let defaults = config.reverse.to_reverse_options();
            let opts = defaults
                .with_preserve_spaces(defaults.preserve_spaces || preserve_spaces)
                .with_maintain_case(defaults.maintain_case || maintain_case)
                .with_preserve_numbers(defaults.preserve_numbers || preserve_numbers)
                .with_preserve_paragraphs(defaults.preserve_paragraphs || preserve_paragraphs)
                .with_mirror_words(defaults.mirror_words || mirror_words);
            let mode = mode.unwrap_or_else(|| config.reverse.mode.clone());
            let reversed = run_reversal(&text, &mode, &opts)?;
            Ok(json!({ "reversedText": reversed, "mode": mode }))
        }
        Command::Similarity { method, a, b } => {
            let estimator = SimilarityEstimator::new(config.similarity.to_similarity_config())?;
            let method = method.unwrap_or(config.similarity.method);
            let estimate = estimate_similarity_with(&estimator, &a, &b, method);
            Ok(json!({ "score": estimate.score, "method": estimate.method }))
        }
    }
}

fn input_text(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading text from stdin")?;
    if buf.is_empty() {
        bail!("no text given on the command line or stdin");
    }
    Ok(buf)
}
