//! [`ChannelPath`]: the URI-form identifier a [`crate::Channel`] carries to name the
//! property it animates.
//!
//! Grammar (spec §6):
//! ```text
//! uri        := ("panima:")? path ("?" query)?
//! query      := param ("&" param)*
//! param      := name "=" value
//! recognized := components    ; value is comma-separated list
//! ```
//! Unknown schemes parse silently to an empty path; unknown query parameters are
//! ignored.

use serde::{Deserialize, Serialize};

const SCHEME: &str = "panima:";

/// A parsed channel target: the property path plus an optional ordered list of
/// components (e.g. `x,z` to target only those axes of a vector-valued property).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChannelPath {
    /// The decoded property path, without scheme or query string.
    pub path: String,
    /// The ordered `components` query value, if present. `None` and `Some(vec![])` are
    /// distinct: the former means no `components=` param was present at all.
    pub components: Option<Vec<String>>,
}

impl ChannelPath {
    /// An empty path with no components, the default-constructed value an unknown
    /// scheme or unparseable input yields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a URI per the grammar above. Any scheme other than `panima:` (including
    /// no recognizable scheme-like prefix that isn't `panima:`) yields [`Self::empty`].
    pub fn parse(uri: &str) -> Self {
        let rest = if let Some(stripped) = uri.strip_prefix(SCHEME) {
            stripped
        } else if let Some(colon) = uri.find(':') {
            // Has *some* scheme, just not ours.
            if uri[..colon].chars().all(|c| c.is_ascii_alphanumeric()) {
                return Self::empty();
            }
            uri
        } else {
            uri
        };

        let (path_part, query_part) = match rest.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (rest, None),
        };

        let path = percent_decode(path_part);
        let components = query_part.and_then(|q| parse_components(q));

        Self { path, components }
    }

    /// Serialize back to the canonical URI form. When `with_scheme` is `true` the
    /// `panima:` prefix is emitted, matching scenario S6's `to_uri(true)`.
    pub fn to_uri(&self, with_scheme: bool) -> String {
        let mut out = String::new();
        if with_scheme {
            out.push_str(SCHEME);
        }
        out.push_str(&self.path);
        if let Some(components) = &self.components {
            out.push_str("?components=");
            out.push_str(&components.join(","));
        }
        out
    }
}

impl PartialEq for ChannelPath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.components == other.components
    }
}
impl Eq for ChannelPath {}

impl std::fmt::Display for ChannelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_uri(true))
    }
}

fn parse_components(query: &str) -> Option<Vec<String>> {
    for param in query.split('&') {
        if let Some((name, value)) = param.split_once('=') {
            if name == "components" {
                return Some(
                    value
                        .split(',')
                        .map(percent_decode)
                        .filter(|s| !s.is_empty())
                        .collect(),
                );
            }
        }
    }
    None
}

fn percent_decode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            let hi = chars.next();
            let lo = chars.next();
            if let (Some(hi), Some(lo)) = (hi, lo) {
                if let Ok(byte) = u8::from_str_radix(&format!("{hi}{lo}"), 16) {
                    out.push(byte as char);
                    continue;
                }
            }
            out.push('%');
            if let Some(hi) = hi {
                out.push(hi);
            }
            if let Some(lo) = lo {
                out.push(lo);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/path.rs"]
mod tests;
