//! Paginator configuration
//!
//! Options recognized when constructing a [`Paginator`](crate::pagination::Paginator).
//! Configs can be built in code or loaded from JSON/YAML.

use crate::error::Result;
use crate::identity::PaginatorId;
use crate::types::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};

/// Configuration for a single paginator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Fixed page number, bypassing the request parameter
    pub page: Option<u32>,

    /// Fixed page size, bypassing the request parameter
    pub page_size: Option<u32>,

    /// Page size used when neither `page_size` nor the request provides one
    pub default_page_size: u32,

    /// Page sizes offered to the renderer (not enforced)
    pub page_size_options: Vec<u32>,

    /// Base of the paginator name, overriding the source-derived one
    pub key: Option<String>,

    /// Caller-supplied identity; allocated from the global sequence when unset
    pub id: Option<PaginatorId>,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page: None,
            page_size: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            key: None,
            id: None,
        }
    }
}

impl PaginatorConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Fix the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Fix the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the fallback page size
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Set the advisory page size options
    #[must_use]
    pub fn with_page_size_options(mut self, options: impl Into<Vec<u32>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Set the name base
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Inject an identity
    #[must_use]
    pub fn with_id(mut self, id: PaginatorId) -> Self {
        self.id = Some(id);
        self
    }
}
