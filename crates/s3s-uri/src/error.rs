//! Parse errors

/// The input string is not a well-formed connection URI.
///
/// Parsing never recovers from these: the caller has to supply a corrected string.
/// A query key that occurs more than once is *not* an error; it is dropped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseUriError {
    /// no `scheme:` prefix
    #[error("ParseUriError: MissingScheme")]
    MissingScheme,

    /// the scheme contains characters outside `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    #[error("ParseUriError: InvalidScheme")]
    InvalidScheme,

    /// the scheme is not followed by `//`
    #[error("ParseUriError: MissingAuthority")]
    MissingAuthority,

    /// unbalanced IPv6 brackets in the host
    #[error("ParseUriError: InvalidHost")]
    InvalidHost,

    /// the port is not a decimal number
    #[error("ParseUriError: InvalidPort")]
    InvalidPort,

    /// the percent-decoded secret access key is not valid UTF-8
    #[error("ParseUriError: InvalidEncoding")]
    InvalidEncoding,
}

/// Result type of the parsing functions
pub type ParseResult<T, E = ParseUriError> = Result<T, E>;
