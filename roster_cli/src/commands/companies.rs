use anyhow::Result;
use clap::Args;
use roster_lib::validation;
use roster_lib::{CompanyParameters, Roster};

use super::ListArgs;
use crate::output::{print_pagination, print_record, print_records, OutputFormat};

#[derive(Args)]
pub struct CompaniesArgs {
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args)]
pub struct CompanyArgs {
    /// Company id (UUID)
    pub id: String,

    /// Comma-separated attributes to return
    #[arg(long, default_value = "")]
    pub fields: String,
}

pub fn run(args: &CompaniesArgs, roster: &Roster, format: &OutputFormat) -> Result<()> {
    let params = args.list.apply(CompanyParameters::default());
    let page = roster.companies(&params)?;

    print_pagination(&page.meta)?;
    print_records(&page.data, format);
    Ok(())
}

pub fn run_detail(args: &CompanyArgs, roster: &Roster, format: &OutputFormat) -> Result<()> {
    let id = validation::validate_id(&args.id)?;
    let company = roster.company(id, &args.fields)?;
    print_record(&company, format);
    Ok(())
}
