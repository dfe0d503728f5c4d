//! Subcommand implementations.

use crate::config::{Config, OutputFormat};
use crate::output::{format_count, format_score, Status};
use anyhow::{Context, Result};
use serde_json::json;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use techtrend_fuzzy::{calculate_relevance, edit_distance, FuzzyMatcher, MatcherConfig};

/// Effective settings after merging flags, environment and config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub matcher: FuzzyMatcher,
    pub format: OutputFormat,
    pub limit: Option<usize>,
}

impl Settings {
    pub fn resolve(config: &Config, threshold: Option<f64>, json: bool) -> Result<Self> {
        let matcher_config = MatcherConfig {
            threshold: threshold.unwrap_or(config.schema.matcher.threshold),
        };
        matcher_config.validate().with_context(|| match &config.path {
            Some(path) => format!("Invalid threshold (config file {})", path.display()),
            None => "Invalid threshold".to_string(),
        })?;

        let format = if json {
            OutputFormat::Json
        } else {
            config.schema.output.format
        };

        Ok(Self {
            matcher: FuzzyMatcher::new(matcher_config),
            format,
            limit: config.schema.output.limit,
        })
    }
}

pub fn distance(settings: &Settings, source: &str, target: &str) -> Result<ExitCode> {
    let distance = edit_distance(source, target);

    match settings.format {
        OutputFormat::Json => println!("{}", json!({ "distance": distance })),
        OutputFormat::Text => println!("{}", distance),
    }

    Ok(ExitCode::SUCCESS)
}

pub fn score(settings: &Settings, source: &str, target: &str) -> Result<ExitCode> {
    let score = settings.matcher.score(source, target);

    match settings.format {
        OutputFormat::Json => println!("{}", json!({ "score": score })),
        OutputFormat::Text => println!("{}", format_score(score)),
    }

    Ok(ExitCode::SUCCESS)
}

pub fn matches(settings: &Settings, source: &str, target: &str) -> Result<ExitCode> {
    let decision = settings.matcher.decide(source, target);

    match settings.format {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "matched": decision.matched,
                "score": decision.score,
                "threshold": settings.matcher.threshold(),
            })
        ),
        OutputFormat::Text => {
            let detail = format!("(score {})", format_score(decision.score));
            if decision.matched {
                Status::success(&format!("match {}", detail));
            } else {
                Status::miss(&format!("no match {}", detail));
            }
        }
    }

    Ok(if decision.matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub fn filter(
    settings: &Settings,
    query: &str,
    file: Option<&Path>,
    limit: Option<usize>,
) -> Result<ExitCode> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidates from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read candidates from stdin")?;
            buf
        }
    };

    // (1-based line number, text) for every non-blank line
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
        .collect();
    let texts: Vec<&str> = lines.iter().map(|(_, text)| *text).collect();

    let mut hits = settings.matcher.filter_candidates(query, &texts);
    if let Some(max) = limit.or(settings.limit) {
        hits.truncate(max);
    }

    match settings.format {
        OutputFormat::Json => {
            let results: Vec<_> = hits
                .iter()
                .map(|hit| {
                    let (line, text) = lines[hit.index];
                    json!({ "line": line, "text": text, "score": hit.score })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Text => {
            for hit in &hits {
                println!("{}  {}", format_score(hit.score), lines[hit.index].1);
            }
            Status::info(&format!(
                "{} in {}",
                format_count(hits.len(), "match", "matches"),
                format_count(lines.len(), "candidate", "candidates")
            ));
        }
    }

    Ok(ExitCode::SUCCESS)
}

pub fn relevance(settings: &Settings, text: &str, query: &str) -> Result<ExitCode> {
    let tier = calculate_relevance(text, query, settings.matcher.threshold());

    match settings.format {
        OutputFormat::Json => println!("{}", json!({ "tier": tier, "weight": tier.weight() })),
        OutputFormat::Text => println!("{:?} ({})", tier, tier.weight()),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigSchema;
    use std::path::PathBuf;

    fn config_with(threshold: f64, format: OutputFormat) -> Config {
        let mut schema = ConfigSchema::default();
        schema.matcher.threshold = threshold;
        schema.output.format = format;
        Config { schema, path: None }
    }

    #[test]
    fn test_flag_overrides_file() {
        let config = config_with(0.1, OutputFormat::Text);
        let settings = Settings::resolve(&config, Some(0.5), false).unwrap();
        assert_eq!(settings.matcher.threshold(), 0.5);
    }

    #[test]
    fn test_file_threshold_used_without_flag() {
        let config = config_with(0.1, OutputFormat::Text);
        let settings = Settings::resolve(&config, None, false).unwrap();
        assert_eq!(settings.matcher.threshold(), 0.1);
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let config = config_with(0.35, OutputFormat::Text);
        assert_eq!(Settings::resolve(&config, None, true).unwrap().format, OutputFormat::Json);

        let config = config_with(0.35, OutputFormat::Json);
        assert_eq!(Settings::resolve(&config, None, false).unwrap().format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_non_finite_threshold() {
        let config = Config::default();
        assert!(Settings::resolve(&config, Some(f64::NAN), false).is_err());
    }

    #[test]
    fn test_threshold_error_names_config_file() {
        let config = Config {
            schema: ConfigSchema::default(),
            path: Some(PathBuf::from("shop/techtrend-fuzzy.toml")),
        };
        let err = Settings::resolve(&config, Some(f64::INFINITY), false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid threshold (config file shop/techtrend-fuzzy.toml)");
    }

    #[test]
    fn test_negative_threshold_accepted() {
        let settings = Settings::resolve(&Config::default(), Some(-0.1), false).unwrap();
        assert!(!settings.matcher.is_match("mouse", "mouse"));
    }
}
