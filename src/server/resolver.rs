//! Mapping requests onto a directory tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::parser::Request;
use crate::server::error::Error;
use crate::server::listing::generate_listing;
use crate::server::response::{Response, StatusCode};

/// MIME type sent when none can be guessed from a file name.
pub const FALLBACK_MIME_TYPE: &str = "octet/stream";

/// File served in place of a listing when a directory contains it.
pub const INDEX_FILE: &str = "index.html";

/// How requested paths relate to the root directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Join the request path onto the root as-is. `..` segments and absolute
    /// paths can reach outside the root.
    #[default]
    Compatible,
    /// Answer 404 for any existing path whose canonical form lies outside
    /// the canonical root.
    Contained,
}

/// Serves files, index pages and listings from a root directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    policy: PathPolicy,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: PathPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PathPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> PathPolicy {
        self.policy
    }

    /// Produce the response for `request`.
    ///
    /// Filesystem failures other than a missing path are returned as errors.
    pub fn resolve(&self, request: &Request) -> Result<Response, Error> {
        let candidate = self.root.join(&request.path);

        if !exists(&candidate)? {
            return Ok(not_found(&candidate));
        }
        if self.policy == PathPolicy::Contained && !self.contains(&candidate)? {
            debug!("Refusing {} outside of {}", candidate.display(), self.root.display());
            return Ok(not_found(&candidate));
        }

        if candidate.is_dir() {
            let index = candidate.join(INDEX_FILE);
            if exists(&index)? {
                serve_file(&index)
            } else {
                generate_listing(&candidate)
            }
        } else {
            serve_file(&candidate)
        }
    }

    fn contains(&self, candidate: &Path) -> Result<bool, Error> {
        let root = self.root.canonicalize()?;
        Ok(candidate.canonicalize()?.starts_with(root))
    }
}

/// Resolve `request` against `root` with the compatible path policy.
pub fn resolve(request: &Request, root: impl AsRef<Path>) -> Result<Response, Error> {
    StaticFiles::new(root.as_ref()).resolve(request)
}

/// Guess a MIME type from a file name, falling back to [`FALLBACK_MIME_TYPE`].
pub fn guess_mime_type(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME_TYPE)
}

fn serve_file(path: &Path) -> Result<Response, Error> {
    let data = fs::read(path)?;
    Ok(Response::new(StatusCode::Ok, guess_mime_type(path), data))
}

fn not_found(candidate: &Path) -> Response {
    let body = format!("<h2>Path {} doesn't exist</h2>", candidate.display());
    Response::new(StatusCode::NotFound, "text/html", body.into_bytes())
}

// Like `Path::exists`, but only a missing path counts as absent; other
// metadata failures are reported.
fn exists(path: &Path) -> Result<bool, Error> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
