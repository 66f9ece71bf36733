pub mod commands;

use chrono::{DateTime, Datelike, Utc};
use clap::Parser;

use crate::domain::key::{FIRST_YEAR, LAST_DAY};
use crate::domain::Part;

#[derive(Parser, Debug)]
#[command(name = "adventus")]
#[command(about = "Download Advent of Code puzzle input and submit answers", long_about = None)]
pub struct Cli {
    /// Year of the puzzle (default: the latest event)
    #[arg(value_parser = parse_year)]
    pub year: Option<i32>,

    /// Day of the puzzle, 1 to 25 (default: the latest unlocked day)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=LAST_DAY as i64))]
    pub day: Option<u32>,

    /// Print the puzzle input
    #[arg(long)]
    pub fetch: bool,

    /// Print the puzzle description as markdown
    #[arg(long)]
    pub show: bool,

    /// Submit an answer
    #[arg(long, value_name = "ANSWER")]
    pub submit: Option<String>,

    /// Part to submit for, 1 or 2 (default: the first unsolved part)
    #[arg(long, requires = "submit")]
    pub part: Option<Part>,

    /// Discard the cached puzzle page before doing anything else
    #[arg(long)]
    pub refresh: bool,

    /// Create the solution source file from the template
    #[arg(long)]
    pub template: bool,

    /// Only log warnings and errors
    #[arg(short, long, visible_alias = "silent", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log requests and cache activity
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    pub fn year_or_default(&self, now: DateTime<Utc>) -> i32 {
        self.year.unwrap_or_else(|| latest_year(now))
    }

    pub fn day_or_default(&self, year: i32, now: DateTime<Utc>) -> u32 {
        self.day.unwrap_or_else(|| {
            if year == now.year() && now.month() == 12 {
                now.day().min(LAST_DAY)
            } else {
                LAST_DAY
            }
        })
    }
}

/// The most recent event that has started.
pub fn latest_year(now: DateTime<Utc>) -> i32 {
    if now.month() == 12 {
        now.year()
    } else {
        now.year() - 1
    }
}

fn parse_year(s: &str) -> Result<i32, String> {
    let year: i32 = s
        .parse()
        .map_err(|_| format!("Invalid year: {}", s))?;
    let latest = latest_year(Utc::now());
    if (FIRST_YEAR..=latest).contains(&year) {
        Ok(year)
    } else {
        Err(format!("Year must be between {} and {}", FIRST_YEAR, latest))
    }
}
