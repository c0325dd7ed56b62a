//! In-memory company/employee repository.
//!
//! Acts as the upstream side of the shaping pipeline: validates the request,
//! selects and counts the matching records, then hands them to
//! `roster_shaping` for ordering, paging and shaping. Writes validate their
//! payload and change the dataset in place; [`Roster::save`] persists it.

use std::path::Path;

use roster_shaping::{schema, shape_one, shape_page, PagedList, RequestParameters, ShapedRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RosterError;
use crate::filters::{filter_by_age, search_by_name};
use crate::forms::{CompanyForm, EmployeeForm, EmployeePatch};
use crate::models::{Company, Employee};
use crate::parameters::{CompanyParameters, EmployeeParameters};
use crate::validation::{optional_search, validate_age_range, validate_company, validate_employee};

/// On-disk dataset layout: `{"companies": [...], "employees": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// In-memory store of companies and their employees.
pub struct Roster {
    dataset: Dataset,
}

impl Roster {
    pub fn new(dataset: Dataset) -> Self {
        schema::warm::<Company>();
        schema::warm::<Employee>();
        Self { dataset }
    }

    /// Parses a dataset from JSON text.
    pub fn from_json(text: &str) -> Result<Self, RosterError> {
        let dataset: Dataset = serde_json::from_str(text)?;
        Ok(Self::new(dataset))
    }

    /// Loads a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let roster = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            companies = roster.dataset.companies.len(),
            employees = roster.dataset.employees.len(),
            "Loaded dataset"
        );
        Ok(roster)
    }

    /// Writes the dataset back as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RosterError> {
        let path = path.as_ref();
        std::fs::write(path, serde_json::to_string_pretty(&self.dataset)?)?;
        tracing::info!(path = %path.display(), "Saved dataset");
        Ok(())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Lists companies matching the search term, ordered, paged and shaped.
    pub fn companies(
        &self,
        params: &CompanyParameters,
    ) -> Result<PagedList<ShapedRecord>, RosterError> {
        let term = search_term(params)?;
        let matching = search_by_name(self.dataset.companies.clone(), term.as_deref());
        let total = matching.len() as u64;
        tracing::info!(total, search = ?term, "Listing companies");
        Ok(shape_page(matching, total, params))
    }

    /// Shapes one company.
    pub fn company(&self, id: Uuid, fields: &str) -> Result<ShapedRecord, RosterError> {
        let company = self.find_company(id)?;
        Ok(shape_one(company, fields))
    }

    /// Lists the employees of one company within the requested age range.
    pub fn employees_for_company(
        &self,
        company_id: Uuid,
        params: &EmployeeParameters,
    ) -> Result<PagedList<ShapedRecord>, RosterError> {
        validate_age_range(params)?;
        self.find_company(company_id)?;
        let term = search_term(params)?;

        let employees: Vec<Employee> = self
            .dataset
            .employees
            .iter()
            .filter(|e| e.company_id == company_id)
            .cloned()
            .collect();
        let matching = search_by_name(
            filter_by_age(employees, params.min_age, params.max_age),
            term.as_deref(),
        );
        let total = matching.len() as u64;
        tracing::info!(%company_id, total, "Listing employees");
        Ok(shape_page(matching, total, params))
    }

    /// Shapes one employee of one company.
    pub fn employee(
        &self,
        company_id: Uuid,
        employee_id: Uuid,
        fields: &str,
    ) -> Result<ShapedRecord, RosterError> {
        self.find_company(company_id)?;
        let employee = self
            .dataset
            .employees
            .iter()
            .find(|e| e.company_id == company_id && e.id == employee_id)
            .ok_or_else(|| {
                tracing::info!(%employee_id, "Employee doesn't exist in the dataset");
                RosterError::not_found("Employee", employee_id)
            })?;
        Ok(shape_one(employee, fields))
    }

    /// Registers a company together with any employees in the payload.
    pub fn create_company(&mut self, form: CompanyForm) -> Result<Company, RosterError> {
        validate_company(&form)?;
        let company = Company {
            id: Uuid::new_v4(),
            name: form.name.trim().to_string(),
            address: form.address.trim().to_string(),
            country: form.country.trim().to_string(),
        };
        let hired = form.employees.len();
        for employee in &form.employees {
            self.dataset.employees.push(new_employee(company.id, employee));
        }
        self.dataset.companies.push(company.clone());
        tracing::info!(company_id = %company.id, hired, "Created company");
        Ok(company)
    }

    /// Removes a company and all of its employees.
    pub fn delete_company(&mut self, id: Uuid) -> Result<(), RosterError> {
        self.find_company(id)?;
        self.dataset.companies.retain(|c| c.id != id);
        let before = self.dataset.employees.len();
        self.dataset.employees.retain(|e| e.company_id != id);
        let removed = before - self.dataset.employees.len();
        tracing::info!(company_id = %id, removed, "Deleted company");
        Ok(())
    }

    /// Adds an employee to an existing company.
    pub fn create_employee(
        &mut self,
        company_id: Uuid,
        form: EmployeeForm,
    ) -> Result<Employee, RosterError> {
        validate_employee(&form)?;
        self.find_company(company_id)?;
        let employee = new_employee(company_id, &form);
        self.dataset.employees.push(employee.clone());
        tracing::info!(%company_id, employee_id = %employee.id, "Created employee");
        Ok(employee)
    }

    /// Replaces the name, age and position of one employee of one company.
    pub fn update_employee(
        &mut self,
        company_id: Uuid,
        employee_id: Uuid,
        form: EmployeeForm,
    ) -> Result<Employee, RosterError> {
        validate_employee(&form)?;
        let employee = self.find_employee_mut(company_id, employee_id)?;
        employee.name = form.name.trim().to_string();
        employee.age = form.age;
        employee.position = form.position.trim().to_string();
        tracing::info!(%company_id, %employee_id, "Updated employee");
        Ok(employee.clone())
    }

    /// Changes only the fields set in `patch`. The patched employee must
    /// still pass validation, otherwise nothing changes.
    pub fn patch_employee(
        &mut self,
        company_id: Uuid,
        employee_id: Uuid,
        patch: &EmployeePatch,
    ) -> Result<Employee, RosterError> {
        let current = self.find_employee_mut(company_id, employee_id)?;
        let mut form = EmployeeForm::new(&current.name, current.age, &current.position);
        patch.apply_to(&mut form);
        self.update_employee(company_id, employee_id, form)
    }

    /// Removes one employee of one company.
    pub fn delete_employee(
        &mut self,
        company_id: Uuid,
        employee_id: Uuid,
    ) -> Result<(), RosterError> {
        self.find_employee_mut(company_id, employee_id)?;
        self.dataset
            .employees
            .retain(|e| !(e.company_id == company_id && e.id == employee_id));
        tracing::info!(%company_id, %employee_id, "Deleted employee");
        Ok(())
    }

    fn find_employee_mut(
        &mut self,
        company_id: Uuid,
        employee_id: Uuid,
    ) -> Result<&mut Employee, RosterError> {
        self.find_company(company_id)?;
        self.dataset
            .employees
            .iter_mut()
            .find(|e| e.company_id == company_id && e.id == employee_id)
            .ok_or_else(|| {
                tracing::warn!(%employee_id, "Employee doesn't exist in the dataset");
                RosterError::not_found("Employee", employee_id)
            })
    }

    fn find_company(&self, id: Uuid) -> Result<&Company, RosterError> {
        self.dataset
            .companies
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| {
                tracing::info!(company_id = %id, "Company doesn't exist in the dataset");
                RosterError::not_found("Company", id)
            })
    }
}

/// Sanitized search term, or `None` when nothing searchable was sent.
fn search_term(params: &impl RequestParameters) -> Result<Option<String>, RosterError> {
    match params.get_common().search_term.as_deref() {
        Some(term) => optional_search(term),
        None => Ok(None),
    }
}

fn new_employee(company_id: Uuid, form: &EmployeeForm) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: form.name.trim().to_string(),
        age: form.age,
        position: form.position.trim().to_string(),
        company_id,
    }
}
