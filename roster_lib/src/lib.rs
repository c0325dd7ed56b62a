//! Company/employee layer on top of `roster_shaping`: record types, request
//! parameters, search and age filtering, write payloads, input validation and
//! an in-memory repository that feeds the shaping pipeline.

pub mod error;
pub mod filters;
pub mod forms;
pub mod models;
pub mod parameters;
pub mod repository;
pub mod validation;

pub use roster_shaping;
pub use roster_shaping::{
    FieldValue, PageMetadata, PagedList, RequestParameters, ShapedRecord, SortDirection,
};

pub use error::RosterError;
pub use forms::{CompanyForm, EmployeeForm, EmployeePatch};
pub use models::{Company, Employee};
pub use parameters::{CompanyParameters, EmployeeParameters};
pub use repository::{Dataset, Roster};
