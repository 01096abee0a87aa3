//! Page arithmetic
//!
//! Pure helpers shared by the paginator: page counts, offsets, page
//! resolution from request input and neighbor windows.

use crate::error::{Error, Result};

/// Number of pages needed for `total` records
///
/// Fails on a zero page size instead of dividing by zero.
pub fn pages_count(total: u64, page_size: u32) -> Result<u64> {
    if page_size == 0 {
        return Err(Error::invalid_config("page_size", "page size must be positive"));
    }
    let size = u64::from(page_size);
    Ok(total.div_ceil(size))
}

/// Index of the first record on `page` (pages below 1 count as page 1)
pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}

/// Resolve a page number from raw request input
///
/// Absent or non-positive input yields page 1. When the page count is known,
/// input past the last page is clamped to the last page (never below 1).
pub fn resolve_page(raw: Option<i64>, pages_count: Option<u64>) -> u32 {
    let requested = match raw {
        Some(page) if page > 0 => u64::try_from(page).unwrap_or(1),
        _ => return 1,
    };
    let page = match pages_count {
        Some(count) if requested > count => count.max(1),
        _ => requested,
    };
    u32::try_from(page).unwrap_or(u32::MAX)
}

/// Up to `count` pages before `current`, ascending
pub fn prev_pages(current: u32, count: u32) -> Vec<u32> {
    (1..=count)
        .rev()
        .filter_map(|i| current.checked_sub(i))
        .filter(|&page| page > 0)
        .collect()
}

/// Up to `count` pages after `current` that do not exceed `pages_count`
pub fn next_pages(current: u32, count: u32, pages_count: u64) -> Vec<u32> {
    (1..=count)
        .filter_map(|i| current.checked_add(i))
        .filter(|&page| u64::from(page) <= pages_count)
        .collect()
}
