//! Answer submission.
//!
//! An answer only reaches the site after it passes every guard:
//!
//! ```text
//! already solved? → unset? → seen in an example? → confirmed? → POST
//! ```
//!
//! The POST goes through the content cache, so the same answer to the same
//! part is never sent twice.

pub mod confirm;
pub mod verdict;

pub use confirm::{Confirm, StdinConfirm};
pub use verdict::Verdict;

use std::fmt;

use crate::app::Result;
use crate::converter::code_snippets;
use crate::domain::Part;
use crate::puzzle::Puzzle;

/// A value offered as an answer. `Unset` stands for "not computed yet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Unset,
    Value(String),
}

impl Candidate {
    /// The answer text, or `None` when there is nothing worth sending.
    pub fn value(&self) -> Option<&str> {
        match self {
            Candidate::Value(v) if !v.trim().is_empty() => Some(v.trim()),
            _ => None,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Unset => f.write_str("None"),
            Candidate::Value(v) => f.write_str(v.trim()),
        }
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::Value(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::Value(value)
    }
}

macro_rules! candidate_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Candidate {
                fn from(value: $t) -> Self {
                    Candidate::Value(value.to_string())
                }
            }
        )*
    };
}

candidate_from_number!(i32, i64, i128, u32, u64, u128, usize, isize);

impl<T: Into<Candidate>> From<Option<T>> for Candidate {
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::Unset, Into::into)
    }
}

/// What happened to a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The part was already solved with this value.
    AlreadySolvedMatch,
    /// The part was already solved with a different value.
    AlreadySolvedMismatch { recorded: String },
    SkippedEmpty,
    /// The value appears in the puzzle's worked example.
    LooksLikeExample,
    UserAborted,
    Correct { message: String },
    Incorrect { message: String },
    /// The response could not be read; treated as a failure.
    Unrecognized,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::AlreadySolvedMatch | Outcome::Correct { .. })
    }
}

pub async fn submit_answer(
    puzzle: &Puzzle<'_>,
    part: Part,
    candidate: Candidate,
    confirm: &dyn Confirm,
) -> Result<Outcome> {
    let answers = puzzle.answers().await?;
    if let Some(recorded) = answers.get(part) {
        if candidate.value() == Some(recorded) {
            tracing::info!("{} solved, your answer is {}", part, recorded);
            return Ok(Outcome::AlreadySolvedMatch);
        }
        tracing::warn!("{} solved, but {} != {}", part, candidate, recorded);
        return Ok(Outcome::AlreadySolvedMismatch {
            recorded: recorded.to_string(),
        });
    }

    let Some(value) = candidate.value() else {
        tracing::info!("Skipping {} submission while answer is {}", part, candidate);
        return Ok(Outcome::SkippedEmpty);
    };

    let page = puzzle.page().await?;
    if code_snippets(&page).iter().any(|code| code.contains(value)) {
        tracing::warn!(
            "Refusing to submit {} for {} - answer detected in puzzle example",
            value,
            part
        );
        return Ok(Outcome::LooksLikeExample);
    }

    let prompt = format!(
        "Are you sure you want to submit {} as your answer to {} (y/N)? ",
        value, part
    );
    if !confirm.confirm(&prompt) {
        tracing::info!("User aborted answer submission");
        return Ok(Outcome::UserAborted);
    }

    tracing::info!("Submitting answer for {}: {}", part, value);
    let ctx = puzzle.context();
    let resource = ctx.layout.answer(puzzle.key(), part, value);
    let response = ctx.cache.read(&resource).await?;

    let outcome = match Verdict::parse(&response) {
        Verdict::Correct(message) => {
            tracing::info!("{}", message);
            puzzle.refresh()?;
            Outcome::Correct { message }
        }
        Verdict::Incorrect(message) => {
            tracing::info!("{}", message);
            Outcome::Incorrect { message }
        }
        Verdict::Unrecognized => {
            tracing::warn!("Could not find a verdict in the response for {}", part);
            // Not a judgement; allow the same answer to be sent again.
            ctx.cache.purge(&resource)?;
            Outcome::Unrecognized
        }
    };

    Ok(outcome)
}
