//! Paginator implementation
//!
//! Resolves page and page size once per instance, slices the source once per
//! `paginate()` call and answers navigation questions from the result.

use super::types::{PageLink, PageSizeLink, PageSummary};
use super::window;
use crate::config::PaginatorConfig;
use crate::error::{Error, Result};
use crate::identity::PaginatorId;
use crate::request::RequestContext;
use crate::source::{QuerySet, Source, SourceKind};
use crate::types::{DEFAULT_NAME_BASE, PAGE_SIZE_KEY_SUFFIX};
use once_cell::unsync::OnceCell;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Pagination over a single source
///
/// One instance per pagination context on a page, typically created per
/// request and dropped with it.
#[derive(Debug)]
pub struct Paginator<T> {
    id: PaginatorId,
    source: Source<T>,
    name_base: String,
    config: PaginatorConfig,
    request: Arc<RequestContext>,
    page: OnceCell<u32>,
    page_size: OnceCell<u32>,
    data: Option<Vec<T>>,
    total: Option<u64>,
}

impl<T> Paginator<T> {
    /// Create a paginator
    ///
    /// The source is not inspected beyond its variant; an unclassified
    /// source is only reported by [`paginate`](Self::paginate).
    pub fn new(
        source: impl Into<Source<T>>,
        config: PaginatorConfig,
        request: impl Into<Arc<RequestContext>>,
    ) -> Self {
        let source = source.into();
        let id = config.id.unwrap_or_else(PaginatorId::next);
        let name_base = config
            .key
            .clone()
            .or_else(|| source.model_name().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_NAME_BASE.to_string());
        // Page 0 means unset, resolve from the request
        let page = match config.page {
            Some(page) if page > 0 => OnceCell::with_value(page),
            _ => OnceCell::new(),
        };

        Self {
            id,
            source,
            name_base,
            config,
            request: request.into(),
            page,
            page_size: OnceCell::new(),
            data: None,
            total: None,
        }
    }

    // ========================================================================
    // Identity
    // ========================================================================

    pub fn id(&self) -> PaginatorId {
        self.id
    }

    /// Request parameter carrying this paginator's page number
    pub fn name(&self) -> String {
        format!("{}_{}", self.name_base, self.id)
    }

    /// Request parameter carrying this paginator's page size
    pub fn page_size_key(&self) -> String {
        format!("{}{PAGE_SIZE_KEY_SUFFIX}", self.name())
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    // ========================================================================
    // Page & page size resolution
    // ========================================================================

    /// Effective page size
    ///
    /// An explicit `page_size` wins, then a positive request parameter, then
    /// `default_page_size`. A zero explicit or default size is rejected.
    /// Resolved once; later calls return the same value.
    pub fn page_size(&self) -> Result<u32> {
        self.page_size
            .get_or_try_init(|| self.resolve_page_size())
            .copied()
    }

    fn resolve_page_size(&self) -> Result<u32> {
        if let Some(size) = self.config.page_size {
            return ensure_positive("page_size", size);
        }

        let key = self.page_size_key();
        match self.request.int_param(&key) {
            Some(size) if size > 0 => Ok(u32::try_from(size).unwrap_or(u32::MAX)),
            _ => {
                trace!(key = %key, "No usable page size in request, using default");
                ensure_positive("default_page_size", self.config.default_page_size)
            }
        }
    }

    /// Current page
    ///
    /// Read from the request parameter [`name`](Self::name). Clamping to the
    /// last page needs the total, so a page read before
    /// [`paginate`](Self::paginate) is provisional and not memoized.
    pub fn page(&self) -> Result<u32> {
        let pages_count = match self.total {
            Some(total) => Some(window::pages_count(total, self.page_size()?)?),
            None => None,
        };
        Ok(self.resolve_page(pages_count))
    }

    fn page_for_total(&self, total: u64, page_size: u32) -> Result<u32> {
        let pages_count = window::pages_count(total, page_size)?;
        Ok(self.resolve_page(Some(pages_count)))
    }

    fn resolve_page(&self, pages_count: Option<u64>) -> u32 {
        if let Some(&page) = self.page.get() {
            return page;
        }
        match pages_count {
            Some(_) => *self.page.get_or_init(|| self.request_page(pages_count)),
            None => self.request_page(None),
        }
    }

    fn request_page(&self, pages_count: Option<u64>) -> u32 {
        let name = self.name();
        let raw = self.request.int_param(&name);
        let page = window::resolve_page(raw, pages_count);
        if raw != Some(i64::from(page)) {
            trace!(key = %name, ?raw, page, "Request page adjusted");
        }
        page
    }

    /// Alias of [`page`](Self::page)
    pub fn current_page(&self) -> Result<u32> {
        self.page()
    }

    /// Override the current page
    ///
    /// Page 0 counts as page 1. Data already fetched by
    /// [`paginate`](Self::paginate) is not refreshed.
    pub fn set_page(&mut self, page: u32) {
        self.page = OnceCell::with_value(page.max(1));
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Records of the current page, once paginated
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    /// Consume the paginator, returning the current page of records
    pub fn into_data(self) -> Option<Vec<T>> {
        self.data
    }

    /// Total number of records in the source, once paginated
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Number of pages (`0` for an empty or not yet paginated source)
    pub fn pages_count(&self) -> Result<u64> {
        window::pages_count(self.total.unwrap_or(0), self.page_size()?)
    }

    pub fn has_next_page(&self) -> Result<bool> {
        Ok(u64::from(self.page()?) < self.pages_count()?)
    }

    pub fn has_prev_page(&self) -> Result<bool> {
        Ok(self.page()? > 1)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Up to `count` page numbers before the current one, ascending
    pub fn iter_prev_page(&self, count: u32) -> Result<Vec<u32>> {
        Ok(window::prev_pages(self.page()?, count))
    }

    /// Up to `count` page numbers after the current one, ascending
    pub fn iter_next_page(&self, count: u32) -> Result<Vec<u32>> {
        Ok(window::next_pages(self.page()?, count, self.pages_count()?))
    }

    /// Query string linking to `page`, keeping the other request parameters
    pub fn url(&self, page: u32) -> String {
        self.request.link_with(&self.name(), page)
    }

    /// Query string selecting `page_size`, keeping the other request parameters
    pub fn url_page_size(&self, page_size: u32) -> String {
        self.request.link_with(&self.page_size_key(), page_size)
    }

    /// Advisory page sizes for the renderer
    pub fn page_size_options(&self) -> &[u32] {
        &self.config.page_size_options
    }

    /// Snapshot for renderers with `window` neighbor links on each side
    pub fn summary(&self, window: u32) -> Result<PageSummary> {
        let page_size = self.page_size()?;
        let link = |page| PageLink {
            page,
            url: self.url(page),
        };

        Ok(PageSummary {
            name: self.name(),
            page_size_key: self.page_size_key(),
            current_page: self.page()?,
            pages_count: self.pages_count()?,
            total: self.total,
            page_size,
            has_next: self.has_next_page()?,
            has_prev: self.has_prev_page()?,
            prev_pages: self.iter_prev_page(window)?.into_iter().map(link).collect(),
            next_pages: self.iter_next_page(window)?.into_iter().map(link).collect(),
            page_sizes: self
                .page_size_options()
                .iter()
                .map(|&size| PageSizeLink {
                    size,
                    url: self.url_page_size(size),
                    selected: size == page_size,
                })
                .collect(),
        })
    }
}

impl<T: Clone> Paginator<T> {
    /// Apply the page window to the source
    ///
    /// Counts the source, resolves the page against that total and fetches
    /// exactly one page of records. Relation sources are replaced by their
    /// query-set first. On error `data` and `total` are left untouched.
    pub fn paginate(&mut self) -> Result<&[T]> {
        let page_size = self.page_size()?;
        let source_kind = self.source.kind();
        let mut resolved = None;

        let (total, page, data) = match &self.source {
            Source::Array(items) => {
                let total = items.len() as u64;
                let page = self.page_for_total(total, page_size)?;
                let offset = window::page_offset(page, page_size);
                let data = items
                    .iter()
                    .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                    .take(page_size as usize)
                    .cloned()
                    .collect();
                (total, page, data)
            }
            Source::Query(query) => {
                let total = query.count()?;
                let page = self.page_for_total(total, page_size)?;
                let offset = window::page_offset(page, page_size);
                let data = query.limit(u64::from(page_size)).offset(offset).all()?;
                (total, page, data)
            }
            Source::QuerySet(query_set) => self.slice_query_set(query_set.as_ref(), page_size)?,
            Source::Relation(relation) => {
                let query_set = relation.query_set();
                debug!(id = %self.id, model = query_set.model_name(), "Resolved relation to query-set");
                let sliced = self.slice_query_set(query_set.as_ref(), page_size)?;
                resolved = Some(query_set);
                sliced
            }
            Source::Unclassified { kind } => {
                warn!(id = %self.id, kind = %kind, "Cannot paginate unclassified source");
                return Err(Error::unsupported_source(kind.clone()));
            }
        };

        if let Some(query_set) = resolved {
            self.source = Source::QuerySet(query_set);
        }

        debug!(
            id = %self.id,
            kind = %source_kind,
            page,
            page_size,
            total,
            records = data.len(),
            "Paginated source"
        );

        self.total = Some(total);
        let data: &[T] = self.data.insert(data);
        Ok(data)
    }

    fn slice_query_set(
        &self,
        query_set: &dyn QuerySet<Item = T>,
        page_size: u32,
    ) -> Result<(u64, u32, Vec<T>)> {
        let total = query_set.count()?;
        let page = self.page_for_total(total, page_size)?;
        let data = query_set.paginate(page, page_size).all()?;
        Ok((total, page, data))
    }
}

fn ensure_positive(field: &str, size: u32) -> Result<u32> {
    if size == 0 {
        Err(Error::invalid_config(field, "page size must be positive"))
    } else {
        Ok(size)
    }
}
