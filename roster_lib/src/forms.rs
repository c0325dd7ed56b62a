//! Client payloads for creating and changing companies and employees.

use serde::Deserialize;

/// Payload for hiring a new employee, or replacing an existing one's data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub position: String,
}

impl EmployeeForm {
    pub fn new(name: &str, age: i32, position: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            position: position.to_string(),
        }
    }
}

/// Partial employee change. Absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub position: Option<String>,
}

impl EmployeePatch {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_position(mut self, position: &str) -> Self {
        self.position = Some(position.to_string());
        self
    }

    /// Applies the set fields on top of `form`.
    pub fn apply_to(&self, form: &mut EmployeeForm) {
        if let Some(name) = &self.name {
            form.name = name.clone();
        }
        if let Some(age) = self.age {
            form.age = age;
        }
        if let Some(position) = &self.position {
            form.position = position.clone();
        }
    }
}

/// Payload for registering a company, optionally together with its first
/// employees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub employees: Vec<EmployeeForm>,
}

impl CompanyForm {
    pub fn new(name: &str, address: &str, country: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            country: country.to_string(),
            employees: Vec::new(),
        }
    }

    pub fn with_employee(mut self, employee: EmployeeForm) -> Self {
        self.employees.push(employee);
        self
    }
}
