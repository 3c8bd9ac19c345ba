//! Pretrained resource fetching
//!
//! Resolves a fixed resource name to a local file, downloading it into a
//! cache directory on first use. The download is blocking: the whole
//! program is synchronous and nothing can proceed without the table.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Resource name loaded when the command line does not override it
pub const DEFAULT_RESOURCE: &str = "word2vec-google-news-300";

/// A downloadable pretrained embedding table
struct ResourceSpec {
    name: &'static str,
    url: &'static str,
    sha256: Option<&'static str>,
}

const RESOURCES: &[ResourceSpec] = &[ResourceSpec {
    name: DEFAULT_RESOURCE,
    url: "https://s3.amazonaws.com/dl4j-distribution/GoogleNews-vectors-negative300.bin.gz",
    sha256: None,
}];

/// Resolves resource names or paths to local embedding files
pub struct ResourceFetcher {
    cache_dir: PathBuf,
}

impl ResourceFetcher {
    /// Fetcher over an explicit cache directory
    #[must_use]
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Fetcher over the default cache directory
    ///
    /// `$SEMRANK_CACHE` if set, otherwise `$XDG_CACHE_HOME/semrank`,
    /// otherwise `$HOME/.cache/semrank`.
    #[must_use]
    pub fn with_default_cache() -> Self {
        let cache_dir = std::env::var_os("SEMRANK_CACHE")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("XDG_CACHE_HOME").map(|base| PathBuf::from(base).join("semrank"))
            })
            .or_else(|| {
                std::env::var_os("HOME")
                    .map(|home| PathBuf::from(home).join(".cache").join("semrank"))
            })
            .unwrap_or_else(|| PathBuf::from(".semrank-cache"));
        Self::new(cache_dir)
    }

    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Resolve a resource name or filesystem path to a local file
    ///
    /// An existing path is returned as-is. Otherwise the argument must
    /// name a known resource, which is downloaded into the cache if not
    /// already present.
    pub fn resolve(&self, name_or_path: &str) -> Result<PathBuf> {
        let as_path = Path::new(name_or_path);
        if as_path.exists() {
            return Ok(as_path.to_path_buf());
        }

        let spec = RESOURCES
            .iter()
            .find(|r| r.name == name_or_path)
            .ok_or_else(|| Error::UnknownResource(name_or_path.to_string()))?;

        let filename = spec.url.rsplit('/').next().unwrap_or(spec.name);
        let target = self.cache_dir.join(filename);
        if target.exists() {
            return Ok(target);
        }

        fs::create_dir_all(&self.cache_dir)?;
        download(spec.url, &target, spec.sha256)?;
        Ok(target)
    }
}

/// Download a file, verify its checksum if one is pinned, write it out
fn download(url: &str, target: &Path, expected_sha256: Option<&str>) -> Result<()> {
    let response = reqwest::blocking::get(url).map_err(|e| Error::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "HTTP {} fetching {}",
            response.status(),
            url
        )));
    }

    let bytes = response.bytes().map_err(|e| Error::Http(e.to_string()))?;

    if let Some(expected) = expected_sha256 {
        let actual = format!("{:x}", Sha256::digest(&bytes));
        if actual != expected {
            return Err(Error::ChecksumMismatch {
                expected: expected.to_string(),
                actual,
            });
        }
    }

    fs::write(target, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_existing_path_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        fs::write(&path, "dog 1.0 0.0\n").unwrap();

        let fetcher = ResourceFetcher::new(dir.path());
        let resolved = fetcher.resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn test_resolve_cached_resource_skips_download() {
        let dir = tempfile::tempdir().unwrap();
        let cached = dir.path().join("GoogleNews-vectors-negative300.bin.gz");
        fs::write(&cached, b"stub").unwrap();

        let fetcher = ResourceFetcher::new(dir.path());
        let resolved = fetcher.resolve(DEFAULT_RESOURCE).unwrap();
        assert_eq!(resolved, cached);
    }

    #[test]
    fn test_resolve_unknown_name_errors() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ResourceFetcher::new(dir.path());
        let err = fetcher.resolve("no-such-table").unwrap_err();
        assert!(matches!(err, Error::UnknownResource(_)));
    }
}
