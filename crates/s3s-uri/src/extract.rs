//! One-shot extraction from a URI string
//!
//! Each function parses `uri` with the default [`ParseConfig`](crate::ParseConfig)
//! and returns one view of the result.

use crate::error::ParseResult;
use crate::uri_config::{Params, UriConfig};

/// Parses a connection URI.
///
/// # Errors
/// Returns an error if `uri` is malformed.
pub fn parse(uri: &str) -> ParseResult<UriConfig> {
    UriConfig::parse(uri)
}

/// See [`UriConfig::credentials`].
///
/// # Errors
/// Returns an error if `uri` is malformed.
pub fn credentials(uri: &str) -> ParseResult<Params> {
    Ok(parse(uri)?.credentials())
}

/// See [`UriConfig::configuration`].
///
/// # Errors
/// Returns an error if `uri` is malformed.
pub fn configuration(uri: &str, safe: bool) -> ParseResult<Params> {
    Ok(parse(uri)?.configuration(safe))
}

/// See [`UriConfig::for_client`].
///
/// # Errors
/// Returns an error if `uri` is malformed.
pub fn for_client(uri: &str, safe: bool) -> ParseResult<Params> {
    Ok(parse(uri)?.for_client(safe))
}

/// See [`UriConfig::for_resource`].
///
/// # Errors
/// Returns an error if `uri` is malformed.
pub fn for_resource(uri: &str, safe: bool) -> ParseResult<Params> {
    Ok(parse(uri)?.for_resource(safe))
}

/// See [`UriConfig::resource_identifiers`].
///
/// # Errors
/// Returns an error if `uri` is malformed.
pub fn resource_identifiers(uri: &str) -> ParseResult<Params> {
    Ok(parse(uri)?.resource_identifiers())
}

/// Parses `uri` and encodes it again.
///
/// # Errors
/// Returns an error if `uri` is malformed.
pub fn to_uri_string(uri: &str) -> ParseResult<String> {
    Ok(parse(uri)?.to_string())
}
