//! Query string parameters

use std::borrow::Cow;

use indexmap::IndexMap;
use tracing::debug;

/// Decoded query string pairs, in order of appearance.
///
/// Decoding follows `application/x-www-form-urlencoded`: `+` is a space and `%XX`
/// sequences are decoded. Pairs with an empty value (including a bare `key`
/// without `=`) carry no information and are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses a query string (without the leading `?`).
    #[must_use]
    pub fn parse(query: &str) -> Self {
        // form-urlencoded decoding into strings is lossy and never fails
        let mut pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
        pairs.retain(|(_, value)| !value.is_empty());
        Self { pairs }
    }

    #[cfg(test)]
    fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs.iter().filter(move |(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Keeps the keys that occur exactly once.
    ///
    /// A key given more than once is ambiguous. It is dropped entirely rather than
    /// resolved to its first or last value.
    #[must_use]
    pub fn into_unambiguous(self) -> IndexMap<String, String> {
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::with_capacity(self.pairs.len());
        for (name, value) in self.pairs {
            grouped.entry(name).or_default().push(value);
        }

        grouped
            .into_iter()
            .filter_map(|(name, mut values)| {
                if values.len() == 1 {
                    return values.pop().map(|value| (name, value));
                }
                debug!(key = %name, count = values.len(), "dropping ambiguous query parameter");
                None
            })
            .collect()
    }
}

/// Escapes the characters that would change the meaning of a query key or value
/// when it is parsed again. Everything else is written verbatim.
pub(crate) fn escape_component(s: &str, is_key: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '%' | '&' | '#' | '+') || (is_key && c == '=');
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut buf = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '%' => buf.push_str("%25"),
            '&' => buf.push_str("%26"),
            '#' => buf.push_str("%23"),
            '+' => buf.push_str("%2B"),
            '=' if is_key => buf.push_str("%3D"),
            _ => buf.push(c),
        }
    }
    Cow::Owned(buf)
}
