//! Parser Configuration
//!
//! [`ParseConfig`] holds the knobs of the URI parser. Every field has a default,
//! so a partially specified configuration (for example from a JSON or TOML file)
//! deserializes into a usable value.
//!
//! # Example
//! ```
//! use s3s_uri::{ParseConfig, UriConfig};
//!
//! let mut config = ParseConfig::default();
//! config.lowercase_host = false;
//!
//! let uri = UriConfig::parse_with("s3://MyBucket/object.data", &config).unwrap();
//! assert_eq!(uri.bucket.as_deref(), Some("MyBucket"));
//! ```

use serde::{Deserialize, Serialize};

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ParseConfig {
    /// Raw length of a secret access key that is percent-encoded before parsing.
    ///
    /// Secret access keys are usually 40 characters of base64-like text and may
    /// contain `/`, which would otherwise end the authority part of the URI.
    /// A secret of any other length that contains reserved characters must be
    /// percent-encoded by the caller.
    ///
    /// `None` disables the escaping step entirely.
    ///
    /// Default: `Some(40)`
    pub secret_escape_len: Option<usize>,

    /// Whether the host (the bucket of an `s3` URI) is lowercased.
    ///
    /// Default: `true`
    pub lowercase_host: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            secret_escape_len: Some(40),
            lowercase_host: true,
        }
    }
}
