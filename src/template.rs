//! Solution source files generated from a template.
//!
//! Templates and the `source` path pattern may use `{year}`, `{day}`,
//! `{title}` and `{url}`, optionally with a width such as `{day:02}`.
//! Any other braces are left as they are.

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::app::Result;
use crate::domain::PuzzleKey;
use crate::puzzle::Puzzle;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(year|day|title|url)(?::(0)?(\d+)d?)?\}").expect("valid placeholder regex")
});

pub const DEFAULT_TEMPLATE: &str = r#"//! Advent of Code {year}.
//!
//! Day {day}: {title}
//!
//! {url}

use adventus::{AppContext, Config, Part, PuzzleKey, StdinConfirm};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let ctx = AppContext::new(Config::load()?)?;
    let puzzle = ctx.puzzle(PuzzleKey::new({year}, {day})?);
    let _input = puzzle.input().await?;

    // solve part one
    let answer_one: Option<u64> = None;
    puzzle.submit(Part::One, answer_one, &StdinConfirm).await?;

    // solve part two
    let answer_two: Option<u64> = None;
    puzzle.submit(Part::Two, answer_two, &StdinConfirm).await?;

    Ok(())
}
"#;

pub fn render(template: &str, key: PuzzleKey, title: &str, url: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let value = match &caps[1] {
                "year" => key.year().to_string(),
                "day" => key.day().to_string(),
                "title" => title.to_string(),
                _ => url.to_string(),
            };
            let width = caps
                .get(3)
                .and_then(|w| w.as_str().parse::<usize>().ok())
                .unwrap_or(0);
            if caps.get(2).is_some() {
                format!("{:0>width$}", value, width = width)
            } else {
                format!("{:>width$}", value, width = width)
            }
        })
        .into_owned()
}

/// Expand the `source` pattern for a puzzle.
pub fn source_path(pattern: &str, key: PuzzleKey) -> PathBuf {
    PathBuf::from(render(pattern, key, "", ""))
}

/// Write the solution file for `puzzle` unless it already exists.
///
/// Returns the path written, or `None` when the file was left alone.
pub async fn generate(puzzle: &Puzzle<'_>) -> Result<Option<PathBuf>> {
    let config = &puzzle.context().config;
    let source = source_path(&config.source, puzzle.key());
    if source.exists() {
        tracing::debug!("{} already exists", source.display());
        return Ok(None);
    }

    let template = if config.template.exists() {
        fs::read_to_string(&config.template)?
    } else {
        DEFAULT_TEMPLATE.to_string()
    };

    let code = render(&template, puzzle.key(), &puzzle.title().await?, &puzzle.url());
    if let Some(parent) = source.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&source, code)?;
    tracing::info!("Created {}", source.display());

    Ok(Some(source))
}
