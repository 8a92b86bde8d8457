//! View command implementation.

use crate::cli::ViewArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::source;
use lexboard_domain::CaseId;

/// Execute the view command.
pub async fn execute_view(args: ViewArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let cases = source::load_cases(args.file.as_deref(), config).await?;
    let case_id = CaseId::from(args.id.as_str());
    let case = cases
        .iter()
        .find(|c| c.id == case_id)
        .ok_or_else(|| CliError::InvalidInput(format!("no case with ID '{}'", args.id)))?;

    let mut tracker = super::local_tracker().await?;
    tracker.track_case_view(case.id.clone(), &case.tags);

    println!(
        "{}",
        formatter.success(&format!("Recorded view of {}", case.name))
    );
    Ok(())
}
