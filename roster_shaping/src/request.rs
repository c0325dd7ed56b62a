//! Client paging, ordering and field-selection parameters: the
//! [`RequestParameters`] builder trait and the shared [`RequestCommon`] fields.

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u32 = 15;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Clamps a client-supplied page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(requested: i64) -> u32 {
    requested.clamp(1, i64::from(MAX_PAGE_SIZE)) as u32
}

/// Trait implemented by all request parameter sets. Provides the shared
/// builder methods for paging, ordering, field selection and search.
pub trait RequestParameters {
    /// Returns the common request fields.
    fn get_common(&self) -> &RequestCommon;

    /// Returns a mutable reference to the common request fields.
    fn get_common_mut(&mut self) -> &mut RequestCommon;

    /// Sets the page number (1-indexed). Values below 1 become 1.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common_mut().set_page(page);
        self
    }

    /// Sets the number of results per page, clamped to `1..=MAX_PAGE_SIZE`.
    fn with_page_size(mut self, page_size: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common_mut().set_page_size(page_size);
        self
    }

    /// Sets the ordering expression (e.g. `"name desc, age"`).
    fn with_order_by(mut self, order_by: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common_mut().order_by = order_by.to_string();
        self
    }

    /// Sets the comma-separated list of attributes to return.
    fn with_fields(mut self, fields: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common_mut().fields = fields.to_string();
        self
    }

    /// Sets the free-text search term applied by the upstream query.
    fn with_search(mut self, search: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common_mut().search_term = Some(search.to_string());
        self
    }
}

/// Fields shared by all request types.
///
/// The page size is clamped on every write, so readers always see a value
/// in `1..=MAX_PAGE_SIZE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestCommon {
    page_number: u32,
    page_size: u32,
    /// Search term handed to the upstream filter. `None` means no search.
    pub search_term: Option<String>,
    /// Ordering expression. Empty means the record's default order.
    pub order_by: String,
    /// Requested attributes. Empty means all attributes.
    pub fields: String,
}

impl Default for RequestCommon {
    fn default() -> RequestCommon {
        RequestCommon {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: None,
            order_by: String::new(),
            fields: String::new(),
        }
    }
}

impl RequestCommon {
    pub fn new(page_number: i64, page_size: i64) -> Self {
        let mut common = Self::default();
        common.set_page(page_number);
        common.set_page_size(page_size);
        common
    }

    pub fn set_page(&mut self, page: i64) {
        self.page_number = page.clamp(1, i64::from(u32::MAX)) as u32;
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.page_size = clamp_page_size(page_size);
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl RequestParameters for RequestCommon {
    fn get_common(&self) -> &RequestCommon {
        self
    }

    fn get_common_mut(&mut self) -> &mut RequestCommon {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let common = RequestCommon::default();
        assert_eq!(common.page_number(), 1);
        assert_eq!(common.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(common.search_term, None);
        assert!(common.order_by.is_empty());
        assert!(common.fields.is_empty());
    }

    #[test]
    fn page_size_is_always_in_range() {
        for requested in [-100, -1, 0, 1, 7, 15, 16, 1000, i64::MAX, i64::MIN] {
            let size = clamp_page_size(requested);
            assert!((1..=MAX_PAGE_SIZE).contains(&size), "{requested} -> {size}");
        }
        assert_eq!(clamp_page_size(7), 7);
        assert_eq!(clamp_page_size(40), MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(0), 1);
    }

    #[test]
    fn page_number_has_lower_bound_only() {
        assert_eq!(RequestCommon::default().with_page(0).page_number(), 1);
        assert_eq!(RequestCommon::default().with_page(-3).page_number(), 1);
        assert_eq!(RequestCommon::default().with_page(9000).page_number(), 9000);
    }

    #[test]
    fn builder_sets_strings() {
        let common = RequestCommon::new(2, 50)
            .with_order_by("name desc")
            .with_fields("name,age")
            .with_search("ann");
        assert_eq!(common.page_number(), 2);
        assert_eq!(common.page_size(), MAX_PAGE_SIZE);
        assert_eq!(common.order_by, "name desc");
        assert_eq!(common.fields, "name,age");
        assert_eq!(common.search_term.as_deref(), Some("ann"));
    }
}
