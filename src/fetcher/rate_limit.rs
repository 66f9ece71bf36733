//! Token bucket shared between processes.
//!
//! The bucket lives in `<cache>/ratelimit.json` and every update happens
//! under an exclusive lock on `<cache>/ratelimit.lock`, so two terminals
//! running the tool draw from the same budget.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::app::Result;

const STATE_FILE: &str = "ratelimit.json";
const LOCK_FILE: &str = "ratelimit.lock";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BucketState {
    tokens: f64,
    updated_at: DateTime<Utc>,
}

struct LimiterLock {
    file: File,
}

impl Drop for LimiterLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

pub struct RateLimiter {
    dir: PathBuf,
    capacity: f64,
    max_delay: Duration,
}

impl RateLimiter {
    /// A limiter allowing `requests_per_minute` calls. Zero disables limiting.
    pub fn new(dir: &Path, requests_per_minute: u32, max_delay: Duration) -> Self {
        Self {
            dir: dir.to_path_buf(),
            capacity: f64::from(requests_per_minute),
            max_delay,
        }
    }

    /// Wait for a token.
    ///
    /// Throttling is best-effort: once the accumulated wait would pass the
    /// maximum delay, the call is let through without a token.
    pub async fn acquire(&self) -> Result<()> {
        if self.capacity <= 0.0 {
            return Ok(());
        }

        let start = Instant::now();
        loop {
            let Some(wait) = self.try_take(Utc::now())? else {
                return Ok(());
            };

            if start.elapsed() + wait > self.max_delay {
                tracing::warn!(
                    "Rate limit exceeded for more than {}s, proceeding anyway",
                    self.max_delay.as_secs()
                );
                return Ok(());
            }

            tracing::debug!("Rate limited, waiting {:.1}s", wait.as_secs_f64());
            tokio::time::sleep(wait).await;
        }
    }

    /// Take a token if one is available, otherwise report how long until one is.
    fn try_take(&self, now: DateTime<Utc>) -> Result<Option<Duration>> {
        let _lock = self.lock()?;

        let mut state = self.load(now);
        let elapsed = (now - state.updated_at).to_std().unwrap_or_default();
        state.tokens = (state.tokens + elapsed.as_secs_f64() * self.per_second()).min(self.capacity);
        state.updated_at = now;

        let wait = if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            None
        } else {
            Some(Duration::from_secs_f64(
                (1.0 - state.tokens) / self.per_second(),
            ))
        };

        self.save(&state)?;
        Ok(wait)
    }

    fn per_second(&self) -> f64 {
        self.capacity / 60.0
    }

    fn lock(&self) -> Result<LimiterLock> {
        fs::create_dir_all(&self.dir)?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.dir.join(LOCK_FILE))?;
        file.lock_exclusive()?;
        Ok(LimiterLock { file })
    }

    fn load(&self, now: DateTime<Utc>) -> BucketState {
        let full = BucketState {
            tokens: self.capacity,
            updated_at: now,
        };

        let path = self.dir.join(STATE_FILE);
        let Ok(content) = fs::read_to_string(&path) else {
            return full;
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Ignoring corrupt rate limiter state {}: {}", path.display(), e);
                full
            }
        }
    }

    fn save(&self, state: &BucketState) -> Result<()> {
        let path = self.dir.join(STATE_FILE);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, serde_json::to_string(state)?)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
