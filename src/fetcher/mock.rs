use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::{AdventusError, Result};
use crate::fetcher::Fetcher;

/// Canned responses keyed by URL, counting every call.
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, String>>,
    posts: Mutex<Vec<(String, Vec<(String, String)>)>>,
    gets: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn calls(&self) -> usize {
        self.get_count() + self.post_count()
    }

    pub fn posted(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.posts.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> Result<String> {
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| AdventusError::Status {
                method: "GET",
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get(&self, url: &str) -> Result<String> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.lookup(url)
    }

    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<String> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), form.to_vec()));
        self.lookup(url)
    }
}
