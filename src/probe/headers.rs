//! Immutable header set applied to every probe.

use log::warn;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::DEFAULT_HEADERS;

/// Header names and values sent with every probe.
///
/// Built once before dispatch and shared read-only (`Arc<HeaderSet>`) by all
/// tasks. Names are case-insensitive; a later entry with the same name
/// replaces an earlier one.
#[derive(Debug, Clone)]
pub struct HeaderSet {
    map: HeaderMap,
}

impl HeaderSet {
    /// Builds a header set from name/value pairs.
    ///
    /// Pairs that are not legal HTTP header names or values are skipped with a
    /// warning.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            let (name, value) = (name.as_ref(), value.as_ref());
            let header_name = match HeaderName::from_bytes(name.as_bytes()) {
                Ok(n) => n,
                Err(e) => {
                    warn!("Skipping header {name:?}: invalid name ({e})");
                    continue;
                }
            };
            let header_value = match HeaderValue::from_str(value) {
                Ok(v) => v,
                Err(e) => {
                    warn!("Skipping header {name:?}: invalid value ({e})");
                    continue;
                }
            };
            map.insert(header_name, header_value);
        }
        HeaderSet { map }
    }

    /// The fallback set: a crawler User-Agent and Accept-Language.
    pub fn defaults() -> Self {
        Self::from_pairs(DEFAULT_HEADERS.iter().copied())
    }

    /// Value of `name`, if present and valid UTF-8.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(|v| v.to_str().ok())
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the set has no headers.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// A copy of the headers for one outgoing request.
    pub fn to_header_map(&self) -> HeaderMap {
        self.map.clone()
    }
}

impl Default for HeaderSet {
    fn default() -> Self {
        Self::defaults()
    }
}
