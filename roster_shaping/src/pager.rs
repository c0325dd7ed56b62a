//! Page windows and pagination metadata.

use serde::{Deserialize, Serialize};

/// Pagination metadata for one page of a list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_count: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageMetadata {
    pub fn new(total_count: u64, page_size: u32, current_page: u32) -> Self {
        let total_pages = total_count.div_ceil(u64::from(page_size.max(1)));
        Self {
            total_count,
            page_size,
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: u64::from(current_page) < total_pages,
        }
    }
}

/// The `(skip, take)` slice of a sequence that makes up one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: usize,
    pub take: usize,
    pub metadata: PageMetadata,
}

impl PageWindow {
    /// Slices `items` to this window. A window past the end yields an empty page.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.skip).take(self.take).collect()
    }
}

/// Computes the page window for `page_number` of `page_size` records over
/// `total_count` records.
///
/// `page_size` is expected to be clamped already; zero is treated as one.
pub fn paginate(page_number: u32, page_size: u32, total_count: u64) -> PageWindow {
    let page_size = page_size.max(1);
    let page_number = page_number.max(1);
    let skip = u64::from(page_number - 1).saturating_mul(u64::from(page_size));
    PageWindow {
        skip: usize::try_from(skip).unwrap_or(usize::MAX),
        take: page_size as usize,
        metadata: PageMetadata::new(total_count, page_size, page_number),
    }
}

/// One page of items together with its metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PagedList<T> {
    pub meta: PageMetadata,
    pub data: Vec<T>,
}

impl<T> PagedList<T> {
    pub fn new(data: Vec<T>, meta: PageMetadata) -> Self {
        Self { meta, data }
    }

    /// Transforms every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            meta: self.meta,
            data: self.data.into_iter().map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
