use std::io::{self, BufRead, Write};

/// Asks the operator before an answer is sent.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Prompts on stdout and reads the reply from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{}", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut reply = String::new();
        match io::stdin().lock().read_line(&mut reply) {
            Ok(_) => is_affirmative(&reply),
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}

pub fn is_affirmative(reply: &str) -> bool {
    matches!(reply.trim().to_uppercase().as_str(), "Y" | "YES")
}
