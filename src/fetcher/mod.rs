pub mod http_fetcher;
pub mod rate_limit;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;
pub use rate_limit::RateLimiter;

/// Form fields sent with a POST request.
pub type Form = Vec<(String, String)>;

#[async_trait]
pub trait Fetcher {
    /// GET `url`, returning the response body.
    async fn get(&self, url: &str) -> Result<String>;

    /// POST `form` to `url` as `application/x-www-form-urlencoded`.
    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<String>;
}
