//! Generic URI splitting
//!
//! `scheme://[userinfo@]host[:port][/path][?query][#fragment]`
//!
//! The port is validated but not kept. The fragment is discarded.

use crate::error::{ParseResult, ParseUriError};

/// Borrowed components of a URI. Nothing is decoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UriParts<'a> {
    pub scheme: &'a str,
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub path: &'a str,
    pub query: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    pub fn split(uri: &'a str) -> ParseResult<Self> {
        let (scheme, rest) = uri.split_once(':').ok_or(ParseUriError::MissingScheme)?;
        if scheme.is_empty() {
            return Err(ParseUriError::MissingScheme);
        }
        if !is_valid_scheme(scheme) {
            return Err(ParseUriError::InvalidScheme);
        }

        let rest = rest.strip_prefix("//").ok_or(ParseUriError::MissingAuthority)?;

        let rest = rest.split_once('#').map_or(rest, |(rest, _)| rest);
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };

        let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));

        let (userinfo, host_port) = match authority.rsplit_once('@') {
            Some((userinfo, host_port)) => (Some(userinfo), host_port),
            None => (None, authority),
        };

        let host = split_host_port(host_port)?;

        Ok(Self {
            scheme,
            userinfo,
            host,
            path,
            query,
        })
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

fn split_host_port(host_port: &str) -> ParseResult<&str> {
    let (host, port) = if let Some(bracketed) = host_port.strip_prefix('[') {
        let (host, after) = bracketed.split_once(']').ok_or(ParseUriError::InvalidHost)?;
        let port = match after {
            "" => None,
            _ => Some(after.strip_prefix(':').ok_or(ParseUriError::InvalidHost)?),
        };
        (host, port)
    } else {
        if host_port.contains(['[', ']']) {
            return Err(ParseUriError::InvalidHost);
        }
        match host_port.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    if let Some(port) = port
        && !port.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseUriError::InvalidPort);
    }

    Ok(host)
}
