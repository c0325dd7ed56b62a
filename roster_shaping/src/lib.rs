//! Generic response shaping for list and detail endpoints.
//!
//! Takes an already-filtered sequence of records, orders it by a client
//! `orderBy` expression, slices one page out of it and projects each record
//! down to the client's `fields` list. Malformed client input degrades to
//! defaults instead of failing.

mod order;
mod pager;
mod pipeline;
mod request;
pub mod schema;
mod shaper;
pub mod value;

#[cfg(test)]
mod test_support;

pub use self::order::{
    comparator, parse_order, sort_records, to_order_clause, OrderCriterion, SortDirection,
};
pub use self::pager::{paginate, PageMetadata, PageWindow, PagedList};
pub use self::pipeline::{page_of, shape_one, shape_page};
pub use self::request::{
    clamp_page_size, RequestCommon, RequestParameters, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use self::schema::{schema_for, Attribute, AttributeSchema, Record};
pub use self::shaper::{resolve_fields, shape, shape_all, ShapedRecord};
pub use self::value::FieldValue;
