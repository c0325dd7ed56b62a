//! Search and range filters applied before records reach the shaping pipeline.

use crate::models::{Company, Employee};

/// Records searchable by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Company {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Employee {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Keeps records whose name contains `term`, ignoring case. A blank or
/// missing term keeps everything.
pub fn search_by_name<T: Named>(records: Vec<T>, term: Option<&str>) -> Vec<T> {
    let term = match term.map(str::trim) {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return records,
    };
    records
        .into_iter()
        .filter(|record| record.name().to_lowercase().contains(&term))
        .collect()
}

/// Keeps employees strictly older than `min_age` and strictly younger than
/// `max_age`.
pub fn filter_by_age(employees: Vec<Employee>, min_age: u32, max_age: u32) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|e| i64::from(e.age) > i64::from(min_age) && i64::from(e.age) < i64::from(max_age))
        .collect()
}
