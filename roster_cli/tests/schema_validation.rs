use roster_lib::{CompanyParameters, EmployeeParameters, RequestParameters, Roster};
use serde_json::Value;
use std::path::{Path, PathBuf};

const IT_SOLUTIONS: &str = "c9d4c053-49b6-410c-bc78-2d54a9991870";

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_roster() -> Roster {
    let path = workspace_root().join("roster_lib/tests/fixtures/roster.json");
    Roster::load(&path).unwrap_or_else(|e| panic!("load fixture {}: {}", path.display(), e))
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn companies_json(params: &CompanyParameters) -> Value {
    let page = load_roster().companies(params).expect("companies list");
    serde_json::to_value(&page.data).expect("shaped companies serialize")
}

fn employees_json(params: &EmployeeParameters) -> Value {
    let company_id = IT_SOLUTIONS.parse().expect("valid uuid");
    let page = load_roster()
        .employees_for_company(company_id, params)
        .expect("employees list");
    serde_json::to_value(&page.data).expect("shaped employees serialize")
}

// ---------------------------------------------------------------------------
// Positive validation: shaped output conforms to its schema
// ---------------------------------------------------------------------------

#[test]
fn test_full_company_shape_conforms_to_schema() {
    let schema = load_schema("company.schema.json");
    let data = companies_json(&CompanyParameters::default());

    let validator = jsonschema::draft202012::new(&schema).expect("company schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("companies output failed validation: {e}");
    }
}

#[test]
fn test_sparse_employee_shape_conforms_to_schema() {
    let schema = load_schema("employee.schema.json");
    let data = employees_json(&EmployeeParameters::default().with_fields("age,name,bogus"));

    let validator = jsonschema::draft202012::new(&schema).expect("employee schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("employees output failed validation: {e}");
    }
    let first = data[0].as_object().expect("employee is an object");
    assert_eq!(
        first.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Age", "Name"]
    );
}

#[test]
fn test_pagination_metadata_conforms_to_schema() {
    let schema = load_schema("pagination.schema.json");
    let page = load_roster()
        .companies(&CompanyParameters::default().with_page(5).with_page_size(100))
        .expect("companies list");
    let meta = serde_json::to_value(page.meta).expect("metadata serializes");

    let validator = jsonschema::draft202012::new(&schema).expect("pagination schema compiles");
    let result = validator.validate(&meta);
    if let Err(e) = &result {
        panic!("pagination metadata failed validation: {e}");
    }
    assert_eq!(meta["pageSize"], 15);
    assert_eq!(meta["currentPage"], 5);
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_company_schema_rejects_additional_properties() {
    let schema = load_schema("company.schema.json");
    let mut data = companies_json(&CompanyParameters::default());

    data[0]
        .as_object_mut()
        .expect("company is an object")
        .insert("Employees".to_string(), Value::Array(vec![]));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject additional properties"
    );
}

#[test]
fn test_pagination_schema_rejects_oversized_page() {
    let schema = load_schema("pagination.schema.json");
    let mut meta = serde_json::to_value(
        load_roster()
            .companies(&CompanyParameters::default())
            .expect("companies list")
            .meta,
    )
    .expect("metadata serializes");

    meta["pageSize"] = Value::Number(16.into());

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&meta).is_err(),
        "schema should reject a page size above the maximum"
    );
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_empty_array_conforms_to_record_schemas() {
    let empty = serde_json::json!([]);

    for schema_name in ["company.schema.json", "employee.schema.json"] {
        let schema = load_schema(schema_name);
        let validator =
            jsonschema::draft202012::new(&schema).unwrap_or_else(|e| panic!("{schema_name}: {e}"));
        let result = validator.validate(&empty);
        if let Err(e) = &result {
            panic!("empty array should conform to {schema_name}: {e}");
        }
    }
}

#[test]
fn test_unresolvable_fields_produce_empty_objects() {
    let schema = load_schema("employee.schema.json");
    let data = employees_json(&EmployeeParameters::default().with_fields("salary"));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(validator.validate(&data).is_ok());
    assert!(data
        .as_array()
        .expect("array")
        .iter()
        .all(|item| item.as_object().map_or(false, |o| o.is_empty())));
}
