//! Request context implementation

use crate::error::Result;
use crate::types::QueryPairs;
use url::form_urlencoded;
use url::Url;

/// Base used to resolve relative request URIs
const RESOLVE_BASE: &str = "http://localhost/";

/// Snapshot of the current request
///
/// Query pairs keep their original order. A key present several times keeps
/// the position of its first occurrence and the value of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
    query: QueryPairs,
}

impl RequestContext {
    /// Create an empty context (path `/`, no parameters)
    pub fn new() -> Self {
        Self {
            path: "/".to_string(),
            query: Vec::new(),
        }
    }

    /// Parse a request URI such as `/items?page=2&sort=name`
    ///
    /// Absolute URLs are accepted too; only path and query are kept.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let url = Url::parse(RESOLVE_BASE)?.join(uri)?;
        Ok(Self::from_parts(
            url.path(),
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())),
        ))
    }

    /// Parse a raw query string, with or without a leading `?`
    pub fn from_query(path: impl Into<String>, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_parts(
            path,
            form_urlencoded::parse(query.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }

    /// Build a context from explicit parameters
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_parts("/", pairs)
    }

    fn from_parts<K, V>(path: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut query = Vec::new();
        for (key, value) in pairs {
            set_pair(&mut query, key.into(), value.into());
        }
        Self {
            path: path.into(),
            query,
        }
    }

    /// Request path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in request order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Look up a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a query parameter as an integer
    ///
    /// Surrounding whitespace is ignored; anything else that is not an
    /// integer yields `None`.
    pub fn int_param(&self, key: &str) -> Option<i64> {
        self.param(key).and_then(|v| v.trim().parse().ok())
    }

    /// Copy of this context with `key` set to `value`
    #[must_use]
    pub fn with_param(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        set_pair(&mut next.query, key.into(), value.into());
        next
    }

    /// Serialized query string without the leading `?`
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    /// Query string for this request with one parameter replaced, prefixed with `?`
    pub fn link_with(&self, key: &str, value: impl ToString) -> String {
        format!("?{}", self.with_param(key, value.to_string()).query_string())
    }
}

fn set_pair(query: &mut QueryPairs, key: String, value: String) {
    if let Some(slot) = query.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        query.push((key, value));
    }
}
