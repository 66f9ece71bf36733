use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::{Client, RequestBuilder};

use crate::app::{AdventusError, Result};
use crate::config::{Config, Session, SESSION_ENV, USER_AGENT};
use crate::fetcher::{Fetcher, RateLimiter};

/// Authenticated, rate-limited HTTP client for the puzzle site.
pub struct HttpFetcher {
    client: Client,
    session: Option<Session>,
    limiter: RateLimiter,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(USER_AGENT)
            .build()?;

        let limiter = RateLimiter::new(
            &config.cache,
            config.requests_per_minute,
            config.max_delay(),
        );

        Ok(Self {
            client,
            session: config.session.clone(),
            limiter,
        })
    }

    fn cookie(&self) -> Result<HeaderValue> {
        let session = self.session.as_ref().ok_or_else(|| {
            AdventusError::Config(format!("{} environment variable not set", SESSION_ENV))
        })?;
        let mut value = HeaderValue::from_str(&format!("session={}", session.expose()))
            .map_err(|_| AdventusError::Config(format!("{} is not a valid cookie", SESSION_ENV)))?;
        value.set_sensitive(true);
        Ok(value)
    }

    async fn send(&self, method: &'static str, url: &str, request: RequestBuilder) -> Result<String> {
        let cookie = self.cookie()?;
        self.limiter.acquire().await?;

        tracing::debug!("{} {}", method, url);
        let response = request.header(COOKIE, cookie).send().await?;

        let status = response.status();
        tracing::debug!(
            "{} {} -> {} {}",
            method,
            url,
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );

        if !status.is_success() {
            return Err(AdventusError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String> {
        self.send("GET", url, self.client.get(url)).await
    }

    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<String> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        self.send("POST", url, request).await
    }
}
