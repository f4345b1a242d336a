//! Where the roadmap document comes from

use crate::core::error::{LoadFailure, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use url::Url;

/// Default document location, relative to the page base
pub const DEFAULT_LOCATION: &str = "roadmap.json";

/// Something the loader can fetch the roadmap document from
pub trait DataSource {
    /// Retrieve the raw document text
    fn fetch(&self) -> impl Future<Output = Result<String>>;

    /// Human-readable location for logs and error messages
    fn describe(&self) -> String;
}

/// Document on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            LoadFailure::Io {
                location: self.describe(),
                source,
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Document served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    /// Source requesting the given URL
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// URL the source requests
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let network = |source| LoadFailure::Network {
            location: self.describe(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailure::Status {
                location: self.describe(),
                status: status.as_u16(),
            }
            .into());
        }

        Ok(response.text().await.map_err(network)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// A resolved document location
#[derive(Debug, Clone)]
pub enum SourceLocator {
    /// Local file
    File(FileSource),
    /// Remote URL
    Http(HttpSource),
}

impl SourceLocator {
    /// Resolve `location` against `base`, the way a page resolves a relative URL.
    ///
    /// - an absolute `http(s)` location is used as is
    /// - an `http(s)` base is joined with the location as a URL
    /// - otherwise the location is a path joined onto `base` (when non-empty)
    ///
    /// # Errors
    /// Returns a location failure when a URL cannot be parsed or joined
    pub fn resolve(base: &str, location: &str) -> Result<Self> {
        let location = if location.trim().is_empty() {
            DEFAULT_LOCATION
        } else {
            location.trim()
        };
        let invalid = |err: url::ParseError| LoadFailure::Location {
            location: location.to_string(),
            message: err.to_string(),
        };

        if is_http(location) {
            let url = Url::parse(location).map_err(invalid)?;
            return Ok(Self::Http(HttpSource::new(url)));
        }

        let base = base.trim();
        if is_http(base) {
            let base_url = Url::parse(&with_trailing_slash(base)).map_err(invalid)?;
            let url = base_url.join(location).map_err(invalid)?;
            return Ok(Self::Http(HttpSource::new(url)));
        }

        let path = if base.is_empty() {
            PathBuf::from(location)
        } else {
            Path::new(base).join(location)
        };
        Ok(Self::File(FileSource::new(path)))
    }
}

impl DataSource for SourceLocator {
    async fn fetch(&self) -> Result<String> {
        match self {
            Self::File(source) => source.fetch().await,
            Self::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(source) => source.describe(),
            Self::Http(source) => source.describe(),
        }
    }
}

fn is_http(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// A base without a trailing slash would have its last segment replaced on join
fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_without_base() {
        let locator = SourceLocator::resolve("", "roadmap.json").unwrap();
        assert_eq!(locator.describe(), "roadmap.json");
        assert!(matches!(locator, SourceLocator::File(_)));
    }

    #[test]
    fn test_empty_location_uses_default() {
        let locator = SourceLocator::resolve("site", "  ").unwrap();
        assert_eq!(
            locator.describe(),
            Path::new("site").join(DEFAULT_LOCATION).display().to_string()
        );
    }

    #[test]
    fn test_http_base_is_joined_as_url() {
        let locator = SourceLocator::resolve("https://example.com/roadmap", "data/roadmap.json").unwrap();
        assert_eq!(locator.describe(), "https://example.com/roadmap/data/roadmap.json");
    }

    #[test]
    fn test_absolute_url_ignores_base() {
        let locator = SourceLocator::resolve("/srv/site", "http://cdn.test/r.json").unwrap();
        match locator {
            SourceLocator::Http(source) => assert_eq!(source.url().as_str(), "http://cdn.test/r.json"),
            SourceLocator::File(_) => panic!("expected an HTTP source"),
        }
    }

    #[test]
    fn test_parent_segments_resolve_like_a_browser() {
        let locator = SourceLocator::resolve("https://example.com/a/b/", "../roadmap.json").unwrap();
        assert_eq!(locator.describe(), "https://example.com/a/roadmap.json");
    }

    #[test]
    fn test_invalid_url_is_location_failure() {
        let err = SourceLocator::resolve("", "http://").unwrap_err();
        assert!(err.is_load_failure());
    }
}
