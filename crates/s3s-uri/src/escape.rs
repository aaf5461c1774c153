//! Secret access key pre-escaping
//!
//! Secret access keys are base64-like and commonly contain `/`. Written verbatim into
//! the userinfo part they would terminate the authority, so before the URI is split the
//! secret segment is percent-encoded when its raw length matches the configured length.

use std::borrow::Cow;

use tracing::debug;

/// Percent-encodes the secret segment of `uri` if it is exactly `len` characters long.
///
/// The secret segment is the text after the colon that follows the access key id, up to
/// the next `:` (session token) or `@` (end of userinfo). Anything else is returned as is.
pub(crate) fn escape_secret(uri: &str, len: usize) -> Cow<'_, str> {
    let Some((start, end)) = locate_secret(uri) else { return Cow::Borrowed(uri) };

    let secret = &uri[start..end];
    if secret.chars().count() != len {
        return Cow::Borrowed(uri);
    }

    debug!("percent-encoding secret access key before parsing");

    let encoded = urlencoding::encode(secret);
    let mut buf = String::with_capacity(uri.len() + encoded.len() - secret.len());
    buf.push_str(&uri[..start]);
    buf.push_str(&encoded);
    buf.push_str(&uri[end..]);
    Cow::Owned(buf)
}

/// Returns the byte range of the secret segment.
fn locate_secret(uri: &str) -> Option<(usize, usize)> {
    let (scheme, rest) = uri.split_once(':')?;
    let authority = rest.strip_prefix("//")?;

    // the access key id must lie inside the userinfo
    let key_len = authority.find(':')?;
    if authority[..key_len].contains(['/', '?', '#', '@']) {
        return None;
    }

    let start = scheme.len() + 3 + key_len + 1;
    let end = start + uri[start..].find([':', '@'])?;
    Some((start, end))
}
