mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_lib::Roster;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse companies and employees with sparse fields, ordering and paging")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Path to the JSON dataset
    #[arg(long, env = "ROSTER_DATA", default_value = "roster.json", global = true)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List companies
    Companies(commands::companies::CompaniesArgs),
    /// Show one company
    Company(commands::companies::CompanyArgs),
    /// List the employees of a company
    Employees(commands::employees::EmployeesArgs),
    /// Show one employee of a company
    Employee(commands::employees::EmployeeArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("roster=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let roster = Roster::load(&cli.data)
        .with_context(|| format!("failed to load dataset from {}", cli.data.display()))?;

    match &cli.command {
        Commands::Companies(args) => commands::companies::run(args, &roster, &format)?,
        Commands::Company(args) => commands::companies::run_detail(args, &roster, &format)?,
        Commands::Employees(args) => commands::employees::run(args, &roster, &format)?,
        Commands::Employee(args) => commands::employees::run_detail(args, &roster, &format)?,
    }

    Ok(())
}
