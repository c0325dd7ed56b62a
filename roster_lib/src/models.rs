//! Company and employee records and their shaping attribute tables.

use roster_shaping::{Attribute, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A company as stored in the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub country: String,
}

impl Company {
    /// Address and country joined with a space.
    pub fn full_address(&self) -> String {
        format!("{} {}", self.address, self.country)
    }
}

impl Record for Company {
    const DEFAULT_ORDER: &'static str = "Name";

    fn attributes() -> Vec<Attribute<Self>> {
        vec![
            Attribute::<Self>::new("Id", |c| c.id.into()),
            Attribute::<Self>::new("Name", |c| c.name.as_str().into()),
            Attribute::<Self>::new("Address", |c| c.address.as_str().into()),
            Attribute::<Self>::new("Country", |c| c.country.as_str().into()),
            Attribute::<Self>::new("FullAddress", |c| c.full_address().into()),
        ]
    }
}

/// An employee of one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub position: String,
    /// Owning company. Not exposed as a shaping attribute.
    pub company_id: Uuid,
}

impl Record for Employee {
    const DEFAULT_ORDER: &'static str = "Name";

    fn attributes() -> Vec<Attribute<Self>> {
        vec![
            Attribute::<Self>::new("Id", |e| e.id.into()),
            Attribute::<Self>::new("Name", |e| e.name.as_str().into()),
            Attribute::<Self>::new("Age", |e| e.age.into()),
            Attribute::<Self>::new("Position", |e| e.position.as_str().into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_shaping::{schema_for, shape_one, FieldValue};

    fn company() -> Company {
        Company {
            id: Uuid::from_u128(7),
            name: "Admin_Solutions Ltd".to_string(),
            address: "312 Forest Avenue, BF 923".to_string(),
            country: "USA".to_string(),
        }
    }

    #[test]
    fn company_schema_exposes_full_address() {
        let schema = schema_for::<Company>();
        assert_eq!(
            schema.names(),
            vec!["Id", "Name", "Address", "Country", "FullAddress"]
        );
        let shaped = shape_one(&company(), "fulladdress");
        assert_eq!(
            shaped.get("FullAddress"),
            Some(&FieldValue::from("312 Forest Avenue, BF 923 USA"))
        );
        assert_eq!(shaped.identifier(), Some(&FieldValue::Uuid(Uuid::from_u128(7))));
    }

    #[test]
    fn employee_company_id_is_not_shapeable() {
        let schema = schema_for::<Employee>();
        assert!(schema.resolve("companyId").is_none());
        assert_eq!(schema.names(), vec!["Id", "Name", "Age", "Position"]);
    }

    #[test]
    fn deserializes_camel_case() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Sam Raiden",
            "age": 26,
            "position": "Software developer",
            "companyId": "00000000-0000-0000-0000-000000000007"
        }))
        .unwrap();
        assert_eq!(employee.company_id, Uuid::from_u128(7));
        assert_eq!(employee.age, 26);
    }
}
