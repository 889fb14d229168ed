use std::io::{self, Write};

use anyhow::{Context, Result};
use sample_diff::{compare, Languages, Row, SampleDiff};
use sample_diff_config::{OutputFormat, ReviewConfig};

mod cli;
mod json;
mod render;
mod sample_file;

use cli::ReviewArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli::command().get_matches();
    let args = cli::review_args(&matches)?;
    log::info!("Starting {}", cli::NAME);

    let diff = run(&args)?;
    let output = format_output(&diff, &args.config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run(args: &ReviewArgs) -> Result<SampleDiff> {
    let languages = if args.config.sort_languages {
        Languages::sorted(args.languages.iter().cloned())
    } else {
        Languages::new(args.languages.iter().cloned())
    }
    .context("Invalid --languages")?;

    let result = sample_file::read_sample(&args.result, &languages)?;

    match &args.reference {
        Some(path) => {
            let compared = sample_file::read_sample(path, &languages).and_then(|reference| {
                compare(&languages, Some(&reference), &result, &args.config.diff)
                    .map_err(anyhow::Error::from)
            });
            match compared {
                Ok(diff) => Ok(diff),
                Err(err) => {
                    // Show the result on its own rather than failing the review.
                    log::warn!("Comparison failed: {:#}", err);
                    eprintln!("diff unavailable: {:#}", err);
                    result_only(&languages, &result, &args.config)
                }
            }
        }
        None => result_only(&languages, &result, &args.config),
    }
}

fn result_only(languages: &Languages, result: &[Row], config: &ReviewConfig) -> Result<SampleDiff> {
    Ok(compare(languages, None, result, &config.diff)?)
}

fn format_output(diff: &SampleDiff, config: &ReviewConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render::render_text(diff, config.context)),
        OutputFormat::Json => json::render_json(diff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_sample(name: &str, content: &str) -> PathBuf {
        let name = format!("sample-review-main-{}-{}", std::process::id(), name);
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(reference: Option<PathBuf>, result: PathBuf) -> ReviewArgs {
        ReviewArgs {
            languages: vec!["en".to_string(), "fr".to_string()],
            reference,
            result,
            config: ReviewConfig::default(),
        }
    }

    #[test]
    fn test_run_compares_samples() {
        let reference = temp_sample("ref.tsv", "Hi there\tSalut\nBye\tAu revoir\n");
        let result = temp_sample("res.tsv", "Hi you\tSalut\n");

        let diff = run(&args(Some(reference.clone()), result.clone())).unwrap();
        std::fs::remove_file(reference).unwrap();
        std::fs::remove_file(result).unwrap();

        assert!(diff.compared);
        assert_eq!(diff.stats.changes, 1);
        assert_eq!(diff.stats.deletions, 1);
    }

    #[test]
    fn test_broken_reference_falls_back_to_result() {
        let reference = temp_sample("broken-ref.tsv", "only one column\n");
        let result = temp_sample("fallback-res.tsv", "Hi\tSalut\n");

        let diff = run(&args(Some(reference.clone()), result.clone())).unwrap();
        std::fs::remove_file(reference).unwrap();
        std::fs::remove_file(result).unwrap();

        assert!(!diff.compared);
        assert!(!diff.has_changes());
        assert_eq!(diff.result_len(), 1);
    }

    #[test]
    fn test_broken_result_is_an_error() {
        let result = temp_sample("broken-res.tsv", "only one column\n");
        let outcome = run(&args(None, result.clone()));
        std::fs::remove_file(result).unwrap();
        assert!(outcome.is_err());
    }

    #[test]
    fn test_json_output() {
        let languages = Languages::new(["en", "fr"]).unwrap();
        let result = vec![languages.row_from_fields(["Hi", "Salut"]).unwrap()];
        let diff = compare(&languages, None, &result, &Default::default()).unwrap();

        let config = ReviewConfig {
            format: OutputFormat::Json,
            ..ReviewConfig::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&format_output(&diff, &config).unwrap()).unwrap();
        assert_eq!(json["languages"], serde_json::json!(["en", "fr"]));
        assert_eq!(json["chunks"][0]["kind"], "unchanged");
        assert_eq!(
            json["chunks"][0]["value"][0],
            serde_json::json!({"en": "Hi", "fr": "Salut"})
        );
        assert_eq!(json["stats"]["additions"], 0);
    }
}
