use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::generation::generator::DEFAULT_CARD_NAME;
use crate::layout::fit::{DEFAULT_MIN_SIZE, DEFAULT_START_SIZE};
use crate::layout::{CardDimensions, FitRange, FontFallback, FontSpec};

/// Command-line flags. Anything left unset keeps its environment/default value.
#[derive(Parser, Debug, Default)]
#[command(name = "bingo", about = "Generate printable bingo cards from a list of questions")]
pub struct Cli {
    /// Base file name of the generated cards (without extension).
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Number of cards to generate.
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Seed for the question shuffle; omit for a random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Question file, one question per line.
    #[arg(short, long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Directory the cards are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Title printed above the grid.
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Application configuration loaded from environment variables, then
/// overridden by command-line flags. Every variable is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub questions_path: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
    pub title_font: FontSpec,
    pub body_font: FontSpec,
    pub dims: CardDimensions,
    pub body_range: FitRange,
    pub name: String,
    pub count: usize,
    pub seed: Option<u64>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = CardDimensions::default();
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            questions_path: text("BINGO_QUESTIONS", "questions.txt").into(),
            output_dir: text("BINGO_OUTPUT_DIR", "generated_bingocards").into(),
            title: text("BINGO_TITLE", "Christmas Bingo"),
            title_font: FontSpec::new(
                text("BINGO_TITLE_FONT", "roboto.ttf"),
                parse_var(&lookup, "BINGO_TITLE_FONT_FALLBACK", FontFallback::Builtin)?,
            ),
            body_font: FontSpec::new(
                text("BINGO_BODY_FONT", "roboto.ttf"),
                parse_var(&lookup, "BINGO_BODY_FONT_FALLBACK", FontFallback::Error)?,
            ),
            dims: CardDimensions {
                cell_size: parse_var(&lookup, "BINGO_CELL_SIZE", defaults.cell_size)?,
                title_height: parse_var(&lookup, "BINGO_TITLE_HEIGHT", defaults.title_height)?,
                padding: parse_var(&lookup, "BINGO_PADDING", defaults.padding)?,
                ..defaults
            },
            body_range: FitRange::new(
                parse_var(&lookup, "BINGO_BODY_FONT_SIZE", DEFAULT_START_SIZE)?,
                parse_var(&lookup, "BINGO_MIN_FONT_SIZE", DEFAULT_MIN_SIZE)?,
            )
            .context("Invalid body font size range")?,
            name: DEFAULT_CARD_NAME.to_string(),
            count: 1,
            seed: None,
            rust_log: text("RUST_LOG", "info"),
        })
    }

    /// Applies command-line overrides.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(name) = cli.name {
            self.name = name;
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(path) = cli.questions {
            self.questions_path = path;
        }
        if let Some(dir) = cli.output_dir {
            self.output_dir = dir;
        }
        if let Some(title) = cli.title {
            self.title = title;
        }
        self.seed = cli.seed.or(self.seed);
        self
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| {
                format!("Environment variable '{key}' has an invalid value '{raw}'")
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.questions_path, PathBuf::from("questions.txt"));
        assert_eq!(config.output_dir, PathBuf::from("generated_bingocards"));
        assert_eq!(config.title, "Christmas Bingo");
        assert_eq!(config.title_font.fallback, FontFallback::Builtin);
        assert_eq!(config.body_font.fallback, FontFallback::Error);
        assert_eq!(config.dims, CardDimensions::default());
        assert_eq!(config.body_range, FitRange::default());
        assert_eq!(config.name, "card_bingo");
        assert_eq!(config.count, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("BINGO_TITLE", "Office Bingo"),
            ("BINGO_CELL_SIZE", "200"),
            ("BINGO_BODY_FONT", "fonts/body.ttf"),
            ("BINGO_BODY_FONT_FALLBACK", "builtin"),
        ]))
        .unwrap();
        assert_eq!(config.title, "Office Bingo");
        assert_eq!(config.dims.cell_size, 200);
        assert_eq!(config.dims.padding, 20);
        assert_eq!(config.body_font.path, PathBuf::from("fonts/body.ttf"));
        assert_eq!(config.body_font.fallback, FontFallback::Builtin);
    }

    #[test]
    fn test_bad_number_names_the_variable() {
        let err = Config::from_lookup(lookup(&[("BINGO_PADDING", "wide")])).unwrap_err();
        assert!(err.to_string().contains("BINGO_PADDING"), "got {err}");
    }

    #[test]
    fn test_bad_fallback_is_rejected() {
        let err =
            Config::from_lookup(lookup(&[("BINGO_TITLE_FONT_FALLBACK", "system")])).unwrap_err();
        assert!(err.to_string().contains("BINGO_TITLE_FONT_FALLBACK"), "got {err}");
    }

    #[test]
    fn test_min_size_above_start_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("BINGO_BODY_FONT_SIZE", "10"),
            ("BINGO_MIN_FONT_SIZE", "12"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("font size range"), "got {err}");
    }

    #[test]
    fn test_no_cli_arguments_keep_defaults() {
        let cli = Cli::try_parse_from(["bingo"]).unwrap();
        let config = Config::from_lookup(lookup(&[])).unwrap().with_cli(cli);
        assert_eq!(config.name, "card_bingo");
        assert_eq!(config.count, 1);
    }

    #[test]
    fn test_cli_overrides_environment() {
        let cli = Cli::try_parse_from([
            "bingo", "--name", "office", "--count", "3", "--seed", "9", "--title", "Hi",
        ])
        .unwrap();
        let config = Config::from_lookup(lookup(&[("BINGO_TITLE", "Env")]))
            .unwrap()
            .with_cli(cli);
        assert_eq!(config.name, "office");
        assert_eq!(config.count, 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.title, "Hi");
    }
}
