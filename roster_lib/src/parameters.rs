//! Request parameter sets for the company and employee endpoints.

use roster_shaping::{RequestCommon, RequestParameters};

/// Parameters for listing companies: paging, ordering, fields and name search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyParameters {
    pub common: RequestCommon,
}

impl RequestParameters for CompanyParameters {
    fn get_common(&self) -> &RequestCommon {
        &self.common
    }

    fn get_common_mut(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

/// Parameters for listing a company's employees. Adds an exclusive age range
/// on top of the common fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeParameters {
    pub common: RequestCommon,
    /// Exclusive lower age bound. Defaults to 0.
    pub min_age: u32,
    /// Exclusive upper age bound. Defaults to `i32::MAX`.
    pub max_age: u32,
}

impl Default for EmployeeParameters {
    fn default() -> Self {
        Self {
            common: RequestCommon::default(),
            min_age: 0,
            max_age: i32::MAX as u32,
        }
    }
}

impl RequestParameters for EmployeeParameters {
    fn get_common(&self) -> &RequestCommon {
        &self.common
    }

    fn get_common_mut(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

impl EmployeeParameters {
    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age;
        self
    }

    pub fn with_max_age(mut self, max_age: u32) -> Self {
        self.max_age = max_age;
        self
    }

    /// The range is usable only when `max_age` is strictly above `min_age`.
    pub fn is_valid_age_range(&self) -> bool {
        self.max_age > self.min_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_shaping::MAX_PAGE_SIZE;

    #[test]
    fn employee_defaults_accept_everyone() {
        let params = EmployeeParameters::default();
        assert_eq!(params.min_age, 0);
        assert_eq!(params.max_age, 2_147_483_647);
        assert!(params.is_valid_age_range());
    }

    #[test]
    fn age_range_validity() {
        let params = EmployeeParameters::default().with_min_age(30).with_max_age(30);
        assert!(!params.is_valid_age_range());
        let params = EmployeeParameters::default().with_min_age(40).with_max_age(20);
        assert!(!params.is_valid_age_range());
        let params = EmployeeParameters::default().with_min_age(20).with_max_age(40);
        assert!(params.is_valid_age_range());
    }

    #[test]
    fn shared_builders_reach_common_fields() {
        let params = CompanyParameters::default()
            .with_page(2)
            .with_page_size(99)
            .with_order_by("country desc")
            .with_fields("name,country")
            .with_search("ltd");
        assert_eq!(params.common.page_number(), 2);
        assert_eq!(params.common.page_size(), MAX_PAGE_SIZE);
        assert_eq!(params.common.order_by, "country desc");
        assert_eq!(params.common.fields, "name,country");
        assert_eq!(params.common.search_term.as_deref(), Some("ltd"));
    }
}
