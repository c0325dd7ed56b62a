use anyhow::Result;
use clap::Args;
use roster_lib::validation;
use roster_lib::{EmployeeParameters, Roster};

use super::ListArgs;
use crate::output::{print_pagination, print_record, print_records, OutputFormat};

#[derive(Args)]
pub struct EmployeesArgs {
    /// Company id (UUID)
    pub company_id: String,

    #[command(flatten)]
    pub list: ListArgs,

    /// Only employees older than this age
    #[arg(long, default_value_t = 0)]
    pub min_age: u32,

    /// Only employees younger than this age
    #[arg(long, default_value_t = i32::MAX as u32)]
    pub max_age: u32,
}

#[derive(Args)]
pub struct EmployeeArgs {
    /// Company id (UUID)
    pub company_id: String,

    /// Employee id (UUID)
    pub employee_id: String,

    /// Comma-separated attributes to return
    #[arg(long, default_value = "")]
    pub fields: String,
}

pub fn run(args: &EmployeesArgs, roster: &Roster, format: &OutputFormat) -> Result<()> {
    let company_id = validation::validate_id(&args.company_id)?;
    let params = args
        .list
        .apply(EmployeeParameters::default())
        .with_min_age(args.min_age)
        .with_max_age(args.max_age);
    let page = roster.employees_for_company(company_id, &params)?;

    print_pagination(&page.meta)?;
    print_records(&page.data, format);
    Ok(())
}

pub fn run_detail(args: &EmployeeArgs, roster: &Roster, format: &OutputFormat) -> Result<()> {
    let company_id = validation::validate_id(&args.company_id)?;
    let employee_id = validation::validate_id(&args.employee_id)?;
    let employee = roster.employee(company_id, employee_id, &args.fields)?;
    print_record(&employee, format);
    Ok(())
}
