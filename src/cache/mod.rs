//! File-backed cache of puzzle site resources.
//!
//! A resource is served from its local file whenever that file exists.
//! Otherwise it is fetched, written to disk, and returned.

pub mod layout;

pub use layout::CacheLayout;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app::Result;
use crate::fetcher::{Fetcher, Form};

/// A remote resource and the file that caches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub url: String,
    pub path: PathBuf,
    /// Present for resources fetched with a POST.
    pub form: Option<Form>,
    /// Write the response to `path` on a miss.
    pub persist: bool,
}

impl Resource {
    pub fn get(url: String, path: PathBuf) -> Self {
        Self {
            url,
            path,
            form: None,
            persist: true,
        }
    }

    pub fn post(url: String, path: PathBuf, form: Form) -> Self {
        Self {
            url,
            path,
            form: Some(form),
            persist: true,
        }
    }

    pub fn persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn is_cached(&self) -> bool {
        self.path.exists()
    }
}

#[derive(Clone)]
pub struct ContentCache {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl ContentCache {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    pub async fn read(&self, resource: &Resource) -> Result<String> {
        if resource.is_cached() {
            tracing::debug!("Cache HIT: {}", resource.url);
            return Ok(fs::read_to_string(&resource.path)?);
        }

        tracing::debug!("Cache MISS: {}", resource.url);
        let body = match &resource.form {
            Some(form) => self.fetcher.post(&resource.url, form).await?,
            None => self.fetcher.get(&resource.url).await?,
        };

        if resource.persist {
            write_atomic(&resource.path, &body)?;
        }

        Ok(body)
    }

    /// Delete the cached file. Returns whether there was one.
    pub fn purge(&self, resource: &Resource) -> Result<bool> {
        tracing::debug!("Purging cache for {}", resource.url);
        remove(&resource.path)
    }
}

/// Remove `path` if present.
pub fn remove(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Write via a uniquely named sibling temporary file so readers never see a
/// partial file, even with several writers racing on the same path.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".")
        .suffix(".part")
        .tempfile_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    // The temporary file is deleted on drop if the rename fails.
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
