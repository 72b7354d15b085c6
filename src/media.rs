//! Resolution of icon and background-image paths.
//!
//! Validation only needs a yes/no answer ("can this path be turned into a
//! resource reference?"), so the resolver is a small trait. The default
//! implementation expands `~` and `${VAR}` and then insists on something
//! absolute: either a URI with a scheme or an absolute filesystem path.

use std::path::{Path, PathBuf};
use url::Url;

use crate::env_vars;

/// Why a media path could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("media path is empty")]
    Empty,

    #[error("unresolved environment variable in media path: {0}")]
    UnresolvedVariable(String),

    #[error("media path is relative: {0}")]
    RelativePath(String),

    #[error("invalid media URI {path}: {source}")]
    InvalidUri {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Turns a user-written media path into a resource URI.
pub trait MediaResolver {
    fn expand(&self, path: &str) -> Result<String, MediaError>;
}

/// Resolver used for real loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriMediaResolver {
    /// Substitute every environment variable, not just the allowlisted ones.
    pub allow_all_env_vars: bool,
}

impl UriMediaResolver {
    pub fn new(allow_all_env_vars: bool) -> Self {
        Self { allow_all_env_vars }
    }
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &str) -> String {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        rest
    } else {
        return path.to_string();
    };

    match dirs::home_dir() {
        Some(home) => {
            let expanded: PathBuf = if rest.is_empty() { home } else { home.join(rest) };
            expanded.to_string_lossy().into_owned()
        }
        None => path.to_string(),
    }
}

impl MediaResolver for UriMediaResolver {
    fn expand(&self, path: &str) -> Result<String, MediaError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(MediaError::Empty);
        }

        let substituted = env_vars::substitute_variables(trimmed, self.allow_all_env_vars);
        let expanded = expand_home(&substituted);
        if expanded.contains("${") {
            return Err(MediaError::UnresolvedVariable(expanded));
        }

        if Path::new(&expanded).is_absolute() {
            return Url::from_file_path(&expanded)
                .map(String::from)
                .map_err(|()| MediaError::RelativePath(expanded));
        }

        match Url::parse(&expanded) {
            Ok(url) => Ok(url.into()),
            Err(url::ParseError::RelativeUrlWithoutBase) => Err(MediaError::RelativePath(expanded)),
            Err(source) => Err(MediaError::InvalidUri {
                path: expanded,
                source,
            }),
        }
    }
}
