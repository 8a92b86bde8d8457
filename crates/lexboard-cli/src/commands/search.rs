//! Search command implementation.

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::source;
use lexboard_domain::ExpertiseProfile;
use lexboard_engine::{filter_cases, CaseFilter};

/// Execute the search command.
pub async fn execute_search(
    args: SearchArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let cases = source::load_cases(args.file.as_deref(), config).await?;

    let mut filter = CaseFilter::new();
    filter.search = args.term.unwrap_or_default();
    filter.year_range = (args.year_from, args.year_to);
    for token in &args.tokens {
        if !filter.toggle_token(token) {
            return Err(CliError::InvalidInput(format!(
                "unknown filter token '{}'",
                token
            )));
        }
    }
    if !args.expertise.is_empty() {
        filter.relevance_only = true;
        filter.expertise_tags = ExpertiseProfile::new(args.expertise).relevance_tags();
    }

    let matched = filter_cases(&cases, &filter);
    println!("{}", formatter.format_cases(&matched)?);
    Ok(())
}
