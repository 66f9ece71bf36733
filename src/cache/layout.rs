use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::cache::Resource;
use crate::config::Config;
use crate::domain::{Part, PuzzleKey};

/// Maps puzzles onto site URLs and cache paths.
///
/// ```text
/// <cache>/<year:04>/<day:02>/input.txt
/// <cache>/<year:04>/<day:02>/page.html
/// <cache>/<year:04>/<day:02>/puzzle.md
/// <cache>/<year:04>/<day:02>/answer/<part>/<url-encoded answer>.html
/// ```
///
/// Encoded answers longer than [`MAX_ANSWER_NAME`] are shortened to a prefix
/// plus the SHA-256 of the full answer, keeping file names within the usual
/// 255 byte limit.
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
    base_url: String,
    cache_input: bool,
    cache_answers: bool,
}

impl CacheLayout {
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.cache.clone(),
            base_url: config.url.trim_end_matches('/').to_string(),
            cache_input: config.cache_input,
            cache_answers: config.cache_answers,
        }
    }

    pub fn puzzle_url(&self, key: PuzzleKey) -> String {
        format!("{}/{}/day/{}", self.base_url, key.year(), key.day())
    }

    pub fn day_dir(&self, key: PuzzleKey) -> PathBuf {
        self.root
            .join(format!("{:04}", key.year()))
            .join(format!("{:02}", key.day()))
    }

    pub fn input(&self, key: PuzzleKey) -> Resource {
        Resource::get(
            format!("{}/input", self.puzzle_url(key)),
            self.day_dir(key).join("input.txt"),
        )
        .persist(self.cache_input)
    }

    pub fn page(&self, key: PuzzleKey) -> Resource {
        Resource::get(self.puzzle_url(key), self.day_dir(key).join("page.html"))
    }

    /// Where the markdown rendering of the page is kept.
    pub fn document_path(&self, key: PuzzleKey) -> PathBuf {
        self.day_dir(key).join("puzzle.md")
    }

    pub fn answer(&self, key: PuzzleKey, part: Part, answer: &str) -> Resource {
        let file = format!("{}.html", encode(answer));
        let form = vec![
            ("level".to_string(), part.level().to_string()),
            ("answer".to_string(), answer.to_string()),
        ];
        Resource::post(
            format!("{}/answer", self.puzzle_url(key)),
            self.day_dir(key)
                .join("answer")
                .join(part.level().to_string())
                .join(file),
            form,
        )
        .persist(self.cache_answers)
    }
}

pub const MAX_ANSWER_NAME: usize = 200;
const ANSWER_PREFIX_LEN: usize = 64;

fn encode(value: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
    if encoded.len() <= MAX_ANSWER_NAME {
        return encoded;
    }

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!(
        "{}-{}",
        &encoded[..ANSWER_PREFIX_LEN],
        hex::encode(hasher.finalize())
    )
}
