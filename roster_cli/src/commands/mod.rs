//! CLI subcommand implementations.

use clap::Args;
use roster_lib::RequestParameters;

pub mod companies;
pub mod employees;

/// Paging, ordering, field and search flags shared by the list commands.
#[derive(Args)]
pub struct ListArgs {
    /// Page number
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Results per page (at most 15)
    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub page_size: i64,

    /// Ordering expression, e.g. "name desc, age"
    #[arg(long, default_value = "")]
    pub order_by: String,

    /// Comma-separated attributes to return, e.g. "name,age"
    #[arg(long, default_value = "")]
    pub fields: String,

    /// Search by name
    #[arg(long)]
    pub search: Option<String>,
}

impl ListArgs {
    /// Copies the flags onto a parameter set.
    pub fn apply<P: RequestParameters>(&self, params: P) -> P {
        let params = params
            .with_page(self.page)
            .with_page_size(self.page_size)
            .with_order_by(&self.order_by)
            .with_fields(&self.fields);
        match self.search {
            Some(ref search) => params.with_search(search),
            None => params,
        }
    }
}
