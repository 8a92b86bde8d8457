//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::source;
use lexboard_domain::{CaseId, CaseRecord};
use lexboard_engine::{ComparisonSelection, ComparisonSummary, MAX_COMPARE, MIN_COMPARE};

/// Execute the compare command.
pub async fn execute_compare(
    args: CompareArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    if args.ids.len() < MIN_COMPARE || args.ids.len() > MAX_COMPARE {
        return Err(CliError::InvalidInput(format!(
            "compare takes between {} and {} case IDs",
            MIN_COMPARE, MAX_COMPARE
        )));
    }

    let cases = source::load_cases(args.file.as_deref(), config).await?;

    let mut selection = ComparisonSelection::new();
    for id in &args.ids {
        let case_id = CaseId::from(id.as_str());
        let case = cases
            .iter()
            .find(|c| c.id == case_id)
            .ok_or_else(|| CliError::InvalidInput(format!("no case with ID '{}'", id)))?;
        selection.toggle(case);
    }

    let summary = ComparisonSummary::of(&selection).ok_or_else(|| {
        CliError::InvalidInput("select at least two distinct cases".to_string())
    })?;
    let selected: Vec<&CaseRecord> = selection.cases().iter().collect();
    println!("{}", formatter.format_comparison(&summary, &selected)?);
    Ok(())
}
