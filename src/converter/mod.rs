//! Puzzle page parsing and conversion to a markdown document.

pub mod markdown;

pub use markdown::MarkdownRenderer;

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;
use scraper::{Html, Selector};

use crate::app::{AdventusError, Result};
use crate::domain::PuzzleKey;

pub const AUTHOR: &str = "Eric Wastl";

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--- Day \d+: (.+?) ---").expect("valid title regex"));

static DAY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## --- Day (\d+): (.*) ---\n").expect("valid heading regex")
});

static DESCRIPTIONS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.day-desc").expect("valid selector"));
static ARTICLES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("valid selector"));
static PARAGRAPHS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));
static CODE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("code").expect("valid selector"));

const ANSWER_PREFIX: &str = "Your puzzle answer was";

/// The title from a `--- Day N: Title ---` heading.
pub fn extract_title(html: &str) -> Result<String> {
    TITLE
        .captures(html)
        .map(|caps| decode_html_entities(&caps[1]).to_string())
        .ok_or_else(|| AdventusError::Parse("puzzle title not found in page".into()))
}

/// Answers already recorded on the page, in part order.
pub fn recorded_answers(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&PARAGRAPHS)
        .filter(|p| p.text().collect::<String>().starts_with(ANSWER_PREFIX))
        .filter_map(|p| p.select(&CODE).next())
        .map(|code| code.text().collect::<String>())
        .collect()
}

/// Text of every `<code>` element inside an `<article>`.
pub fn code_snippets(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ARTICLES)
        .flat_map(|article| {
            article
                .select(&CODE)
                .map(|code| code.text().collect::<String>())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Text of the first paragraph of the first article, the site's usual place
/// for a response message. Returned as it appears in the page.
pub fn first_article_paragraph(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let article = document.select(&ARTICLES).next()?;
    let paragraph = article.select(&PARAGRAPHS).next()?;
    Some(paragraph.text().collect())
}

/// Converts puzzle pages into markdown documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    renderer: MarkdownRenderer,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_document(&self, html: &str, key: PuzzleKey, url: &str) -> Result<String> {
        let title = extract_title(html)?;

        let document = Html::parse_document(html);
        let parts = document
            .select(&DESCRIPTIONS)
            .map(|article| self.renderer.render(article).trim().to_string())
            .collect::<Vec<_>>()
            .join("\n\n");
        let parts = DAY_HEADING.replace_all(&parts, "# Day $1: $2\n\n## --- Part One ---\n");

        Ok(format!(
            "---\ntitle: {}\ndate: {}\nauthor: {}\nurl: {}\n---\n\n{}\n",
            title,
            key.date(),
            AUTHOR,
            url,
            parts
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SOLVED_PAGE as PAGE;

    fn key() -> PuzzleKey {
        PuzzleKey::new(2015, 6).unwrap()
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title(PAGE).unwrap(), "Probably a Fire Hazard");
    }

    #[test]
    fn test_extract_title_decodes_entities() {
        let html = "<h2>--- Day 3: Perfectly Spherical Houses &amp; Vacuum ---</h2>";
        assert_eq!(extract_title(html).unwrap(), "Perfectly Spherical Houses & Vacuum");
    }

    #[test]
    fn test_extract_title_missing() {
        let html = "<html><body><p>Please don't repeatedly request this endpoint before it unlocks!</p></body></html>";
        assert!(matches!(extract_title(html), Err(AdventusError::Parse(_))));
    }

    #[test]
    fn test_recorded_answers() {
        assert_eq!(recorded_answers(PAGE), vec!["377891", "14110788"]);
    }

    #[test]
    fn test_code_snippets() {
        let snippets = code_snippets(PAGE);
        assert!(snippets.contains(&"turn on 0,0 through 999,999".to_string()));
        assert!(snippets.contains(&"2000000".to_string()));
        // Answers live outside the articles.
        assert!(!snippets.contains(&"377891".to_string()));
    }

    #[test]
    fn test_first_article_paragraph_is_verbatim() {
        let html = "<html><body><main><article><p>That's the right answer!  You are\n one gold star closer.</p><p>more</p></article></main></body></html>";
        assert_eq!(
            first_article_paragraph(html).as_deref(),
            Some("That's the right answer!  You are\n one gold star closer.")
        );
        assert_eq!(first_article_paragraph("<html><body></body></html>"), None);
    }

    #[test]
    fn test_to_document() {
        let url = "https://adventofcode.com/2015/day/6";
        let document = Converter::new().to_document(PAGE, key(), url).unwrap();

        assert!(document.starts_with(
            "---\ntitle: Probably a Fire Hazard\ndate: 2015-12-06\nauthor: Eric Wastl\nurl: https://adventofcode.com/2015/day/6\n---\n\n"
        ));
        assert!(document.contains("# Day 6: Probably a Fire Hazard\n\n## --- Part One ---\n"));
        assert!(document.contains("## --- Part Two ---"));
        assert!(document.contains("- `turn on 0,0 through 999,999` would turn on"));
        assert!(document.contains("*how many lights are lit*?"));
        // Page chrome and recorded answers are not part of the descriptions.
        assert!(!document.contains("Advent of Code"));
        assert!(!document.contains("377891"));
        assert!(document.ends_with('\n'));
    }

    #[test]
    fn test_to_document_is_deterministic() {
        let url = "https://adventofcode.com/2015/day/6";
        let converter = Converter::new();
        assert_eq!(
            converter.to_document(PAGE, key(), url).unwrap(),
            converter.to_document(PAGE, key(), url).unwrap()
        );
    }

    #[test]
    fn test_to_document_requires_title() {
        let result = Converter::new().to_document("<html></html>", key(), "u");
        assert!(result.is_err());
    }
}
