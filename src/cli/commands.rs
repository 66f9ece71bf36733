use crate::app::{AppContext, Result};
use crate::domain::{Part, PuzzleKey};
use crate::submit::{Confirm, Outcome};
use crate::template;

pub async fn fetch_input(ctx: &AppContext, key: PuzzleKey) -> Result<()> {
    println!("{}", ctx.puzzle(key).input().await?);
    Ok(())
}

pub async fn show_document(ctx: &AppContext, key: PuzzleKey) -> Result<()> {
    print!("{}", ctx.puzzle(key).document().await?);
    Ok(())
}

pub fn refresh(ctx: &AppContext, key: PuzzleKey) -> Result<()> {
    ctx.puzzle(key).refresh()?;
    println!("Purged cached page for {}", key);
    Ok(())
}

pub async fn generate_template(ctx: &AppContext, key: PuzzleKey) -> Result<()> {
    match template::generate(&ctx.puzzle(key)).await? {
        Some(path) => println!("Created {}", path.display()),
        None => println!("Solution file already exists"),
    }
    Ok(())
}

pub async fn status(ctx: &AppContext, key: PuzzleKey) -> Result<()> {
    let puzzle = ctx.puzzle(key);
    let answers = puzzle.answers().await?;

    println!("{}: {}\n  {}", key, puzzle.title().await?, puzzle.url());
    for part in [Part::One, Part::Two] {
        println!("  {}: {}", part, answers.get(part).unwrap_or("unsolved"));
    }
    Ok(())
}

/// Submit `answer`, to the first unsolved part unless `part` is given.
pub async fn submit_answer(
    ctx: &AppContext,
    key: PuzzleKey,
    answer: &str,
    part: Option<Part>,
    confirm: &dyn Confirm,
) -> Result<Outcome> {
    let puzzle = ctx.puzzle(key);
    let part = match part {
        Some(part) => part,
        None => match puzzle.answers().await?.first_unsolved() {
            Some(part) => part,
            None => {
                println!("Both parts of {} are already solved", key);
                // Still check the value against part two.
                Part::Two
            }
        },
    };

    let outcome = puzzle.submit(part, answer, confirm).await?;
    match &outcome {
        Outcome::AlreadySolvedMatch => println!("{} already solved with {}", part, answer),
        Outcome::AlreadySolvedMismatch { recorded } => {
            println!("{} already solved with {}, not {}", part, recorded, answer)
        }
        Outcome::SkippedEmpty => println!("Nothing to submit"),
        Outcome::LooksLikeExample => println!("Not submitted: {} appears in the puzzle example", answer),
        Outcome::UserAborted => println!("Not submitted"),
        Outcome::Correct { message } | Outcome::Incorrect { message } => println!("{}", message),
        Outcome::Unrecognized => println!("Submitted, but the response could not be read"),
    }

    Ok(outcome)
}
