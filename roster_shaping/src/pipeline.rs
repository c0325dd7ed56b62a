//! Sort, page and shape in one pass for list and detail endpoints.

use crate::order::{parse_order, sort_records, to_order_clause};
use crate::pager::{paginate, PagedList};
use crate::request::RequestParameters;
use crate::schema::{schema_for, Record};
use crate::shaper::{shape, shape_all, ShapedRecord};

/// Orders `records` and cuts out the requested page without shaping it.
///
/// `total_count` is the size of the filtered query the records came from;
/// the records themselves are never re-counted.
pub fn page_of<R: Record>(
    records: Vec<R>,
    total_count: u64,
    request: &impl RequestParameters,
) -> PagedList<R> {
    let common = request.get_common();
    let schema = schema_for::<R>();
    let criteria = parse_order(&common.order_by, &schema, R::DEFAULT_ORDER);
    tracing::debug!(order = %to_order_clause(&criteria), "Ordering records");

    let sorted = sort_records(records, &criteria, &schema);
    let window = paginate(common.page_number(), common.page_size(), total_count);
    PagedList::new(window.apply(sorted), window.metadata)
}

/// List endpoint: order, page, then shape each record on the page.
pub fn shape_page<R: Record>(
    records: Vec<R>,
    total_count: u64,
    request: &impl RequestParameters,
) -> PagedList<ShapedRecord> {
    let page = page_of(records, total_count, request);
    let schema = schema_for::<R>();
    let data = shape_all(&page.data, &request.get_common().fields, &schema);
    PagedList::new(data, page.meta)
}

/// Detail endpoint: shape a single record.
pub fn shape_one<R: Record>(record: &R, fields: &str) -> ShapedRecord {
    shape(record, fields, &schema_for::<R>())
}
