use crate::app::{AppContext, Result};
use crate::cache::{remove, write_atomic};
use crate::converter::{extract_title, recorded_answers};
use crate::domain::{Answers, Part, PuzzleKey};
use crate::submit::{submit_answer, Candidate, Confirm, Outcome};

/// Read-only view of one puzzle.
///
/// Nothing is memoized here: every accessor goes back to the cache, so a
/// purge is seen by the next call.
pub struct Puzzle<'a> {
    ctx: &'a AppContext,
    key: PuzzleKey,
}

impl<'a> Puzzle<'a> {
    pub fn new(ctx: &'a AppContext, key: PuzzleKey) -> Self {
        Self { ctx, key }
    }

    pub fn key(&self) -> PuzzleKey {
        self.key
    }

    pub fn day(&self) -> u32 {
        self.key.day()
    }

    pub fn year(&self) -> i32 {
        self.key.year()
    }

    pub(crate) fn context(&self) -> &'a AppContext {
        self.ctx
    }

    pub fn url(&self) -> String {
        self.ctx.layout.puzzle_url(self.key)
    }

    /// Raw HTML of the puzzle page.
    ///
    /// When `cache-puzzle` is set, the markdown document is written next to
    /// the page the first time it is missing.
    pub async fn page(&self) -> Result<String> {
        let html = self.ctx.cache.read(&self.ctx.layout.page(self.key)).await?;

        if self.ctx.config.cache_puzzle {
            let path = self.ctx.layout.document_path(self.key);
            if !path.exists() {
                match self.ctx.converter.to_document(&html, self.key, &self.url()) {
                    Ok(document) => write_atomic(&path, &document)?,
                    Err(e) => tracing::warn!("Not saving {}: {}", path.display(), e),
                }
            }
        }

        Ok(html)
    }

    pub async fn title(&self) -> Result<String> {
        extract_title(&self.page().await?)
    }

    pub async fn input(&self) -> Result<String> {
        let input = self.ctx.cache.read(&self.ctx.layout.input(self.key)).await?;
        Ok(input.trim().to_string())
    }

    pub async fn answers(&self) -> Result<Answers> {
        Ok(Answers::from_found(recorded_answers(&self.page().await?)))
    }

    pub async fn answer_one(&self) -> Result<Option<String>> {
        Ok(self.answers().await?.get(Part::One).map(String::from))
    }

    pub async fn answer_two(&self) -> Result<Option<String>> {
        Ok(self.answers().await?.get(Part::Two).map(String::from))
    }

    /// Markdown rendering of the puzzle description.
    pub async fn document(&self) -> Result<String> {
        let html = self.page().await?;
        self.ctx.converter.to_document(&html, self.key, &self.url())
    }

    /// Drop the cached page and its document so the next read re-fetches.
    pub fn refresh(&self) -> Result<()> {
        self.ctx.cache.purge(&self.ctx.layout.page(self.key))?;
        remove(&self.ctx.layout.document_path(self.key))?;
        Ok(())
    }

    pub async fn submit(
        &self,
        part: Part,
        candidate: impl Into<Candidate>,
        confirm: &dyn Confirm,
    ) -> Result<Outcome> {
        submit_answer(self, part, candidate.into(), confirm).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::app::AdventusError;
    use crate::config::Config;
    use crate::fetcher::mock::MockFetcher;
    use crate::testing::*;

    fn key() -> PuzzleKey {
        PuzzleKey::new(2015, 6).unwrap()
    }

    fn fetcher() -> Arc<MockFetcher> {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PAGE_URL, SOLVED_PAGE);
        fetcher.respond(INPUT_URL, "turn on 0,0 through 999,999\ntoggle 0,0 through 999,0\n");
        fetcher
    }

    #[tokio::test]
    async fn test_url() {
        let (_dir, ctx) = context(fetcher());
        assert_eq!(ctx.puzzle(key()).url(), PAGE_URL);
    }

    #[tokio::test]
    async fn test_title() {
        let (_dir, ctx) = context(fetcher());
        assert_eq!(ctx.puzzle(key()).title().await.unwrap(), "Probably a Fire Hazard");
    }

    #[tokio::test]
    async fn test_input_is_trimmed_and_cached() {
        let fetcher = fetcher();
        let (_dir, ctx) = context(fetcher.clone());
        let puzzle = ctx.puzzle(key());

        let input = puzzle.input().await.unwrap();
        assert_eq!(input, "turn on 0,0 through 999,999\ntoggle 0,0 through 999,0");
        puzzle.input().await.unwrap();

        assert_eq!(fetcher.get_count(), 1);
        assert!(ctx.layout.input(key()).is_cached());
    }

    #[tokio::test]
    async fn test_answers_from_solved_page() {
        let (_dir, ctx) = context(fetcher());
        let puzzle = ctx.puzzle(key());

        let answers = puzzle.answers().await.unwrap();
        assert_eq!(answers.get(Part::One), Some("377891"));
        assert_eq!(answers.get(Part::Two), Some("14110788"));
        assert_eq!(puzzle.answer_two().await.unwrap().as_deref(), Some("14110788"));
    }

    #[tokio::test]
    async fn test_answers_partially_solved() {
        let fetcher = Arc::new(MockFetcher::new());
        fetcher.respond(PAGE_URL, PART_ONE_PAGE);
        let (_dir, ctx) = context(fetcher);

        let answers = ctx.puzzle(key()).answers().await.unwrap();
        assert_eq!(answers.get(Part::One), Some("42"));
        assert_eq!(answers.get(Part::Two), None);
    }

    #[tokio::test]
    async fn test_accessors_share_one_page_fetch() {
        let fetcher = fetcher();
        let (_dir, ctx) = context(fetcher.clone());
        let puzzle = ctx.puzzle(key());

        puzzle.title().await.unwrap();
        puzzle.answers().await.unwrap();
        puzzle.document().await.unwrap();

        assert_eq!(fetcher.get_count(), 1);
    }

    #[tokio::test]
    async fn test_document_persisted_only_when_enabled() {
        let (_dir, ctx) = context(fetcher());
        ctx.puzzle(key()).document().await.unwrap();
        assert!(!ctx.layout.document_path(key()).exists());

        let (_dir, ctx) = context_with(fetcher(), |config| Config {
            cache_puzzle: true,
            ..config
        });
        let document = ctx.puzzle(key()).document().await.unwrap();
        let saved = std::fs::read_to_string(ctx.layout.document_path(key())).unwrap();
        assert_eq!(saved, document);
    }

    #[tokio::test]
    async fn test_refresh_refetches_page_but_keeps_input() {
        let fetcher = fetcher();
        let (_dir, ctx) = context(fetcher.clone());
        let puzzle = ctx.puzzle(key());

        puzzle.page().await.unwrap();
        puzzle.input().await.unwrap();
        puzzle.refresh().unwrap();

        assert!(!ctx.layout.page(key()).is_cached());
        assert!(ctx.layout.input(key()).is_cached());

        puzzle.page().await.unwrap();
        assert_eq!(fetcher.get_count(), 3);
    }

    #[tokio::test]
    async fn test_missing_session_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            cache: dir.path().to_path_buf(),
            url: "http://127.0.0.1:9".into(),
            ..Config::default()
        };
        let ctx = AppContext::new(config).unwrap();
        let puzzle = ctx.puzzle(key());

        assert!(matches!(puzzle.input().await, Err(AdventusError::Config(_))));
        assert!(matches!(puzzle.title().await, Err(AdventusError::Config(_))));
        assert!(matches!(puzzle.answers().await, Err(AdventusError::Config(_))));
    }

    #[tokio::test]
    async fn test_cached_files_work_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            cache: dir.path().to_path_buf(),
            url: "http://127.0.0.1:9".into(),
            ..Config::default()
        };
        let ctx = AppContext::new(config).unwrap();
        write_atomic(&ctx.layout.page(key()).path, SOLVED_PAGE).unwrap();

        assert_eq!(ctx.puzzle(key()).title().await.unwrap(), "Probably a Fire Hazard");
    }
}
