use crate::converter::first_article_paragraph;

const SUCCESS_MARKER: &str = "That's the right answer!";

/// The site's reaction to a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct(String),
    Incorrect(String),
    /// The response had no message where one was expected.
    Unrecognized,
}

impl Verdict {
    pub fn parse(html: &str) -> Self {
        match first_article_paragraph(html) {
            Some(message) if message.contains(SUCCESS_MARKER) => Verdict::Correct(message),
            Some(message) => Verdict::Incorrect(message),
            None => Verdict::Unrecognized,
        }
    }
}
