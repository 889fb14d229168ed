//! Command line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};
use sample_diff::{AlignmentAlgorithm, InlineGranularity};
use sample_diff_config::{OutputFormat, ReviewConfig};

pub const NAME: &str = "sample-review";

/// Everything a review run needs, after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewArgs {
    pub languages: Vec<String>,
    pub reference: Option<PathBuf>,
    pub result: PathBuf,
    pub config: ReviewConfig,
}

pub fn command() -> Command {
    Command::new(NAME)
        .version(crate_version!())
        .about("Shows how a filter stage changed a parallel text sample")
        .arg(
            Arg::new("languages")
                .long("languages")
                .short('l')
                .help("Language codes of the sample columns, comma separated")
                .required(true)
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .short('r')
                .help("Sample before the filter stage (.tsv or .tsv.gz)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("result")
                .long("result")
                .short('o')
                .help("Sample after the filter stage (.tsv or .tsv.gz)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["text", "json"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .value_parser(["myers", "patience", "lcs"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("granularity")
                .long("granularity")
                .value_parser(["words", "chars", "graphemes"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("context")
                .long("context")
                .short('C')
                .help("Unchanged rows shown around each change")
                .value_parser(clap::value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-inline")
                .long("no-inline")
                .help("Skip word-level highlighting of changed rows")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sort-languages")
                .long("sort-languages")
                .help("Sort language codes; sample files store columns in sorted order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file to use instead of .sample-review.toml")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Resolve the config (explicit path or default lookup) and apply flags on top.
pub fn review_args(args: &ArgMatches) -> Result<ReviewArgs> {
    let base = match args.get_one::<PathBuf>("config") {
        Some(path) => ReviewConfig::load_from(path)?,
        None => ReviewConfig::load(),
    };
    merge_args(args, base)
}

/// Apply command line flags over a base config.
pub fn merge_args(args: &ArgMatches, mut config: ReviewConfig) -> Result<ReviewArgs> {
    let languages: Vec<String> = args
        .get_many::<String>("languages")
        .context("Missing --languages")?
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect();

    let reference = args.get_one::<PathBuf>("reference").cloned();
    let result = args
        .get_one::<PathBuf>("result")
        .cloned()
        .context("Missing --result")?;

    if let Some(format) = args.get_one::<String>("format") {
        config.format = format.parse::<OutputFormat>()?;
    }
    if let Some(algorithm) = args.get_one::<String>("algorithm") {
        config.diff.algorithm = algorithm.parse::<AlignmentAlgorithm>()?;
    }
    if let Some(granularity) = args.get_one::<String>("granularity") {
        config.diff.granularity = granularity.parse::<InlineGranularity>()?;
    }
    if let Some(context) = args.get_one::<usize>("context") {
        config.context = *context;
    }
    if args.get_flag("no-inline") {
        config.diff.inline = false;
    }
    if args.get_flag("sort-languages") {
        config.sort_languages = true;
    }

    Ok(ReviewArgs {
        languages,
        reference,
        result,
        config,
    })
}
