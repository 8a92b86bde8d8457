//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexboard_extractor::CaseAnalyzer;
use std::fs;

/// Execute the analyze command.
///
/// Prints the extracted fields as a submission payload; pipe or save the
/// output and pass it to `add --from-json` after review.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let profile = config.get_active_profile()?;
    let endpoint = profile
        .analyzer_url
        .as_deref()
        .ok_or_else(|| CliError::Config("No analyzer_url in the active profile".to_string()))?;
    let api_key = profile.analyzer_key.as_deref().unwrap_or_default();

    let text = fs::read_to_string(&args.path)?;
    let mut analyzer = CaseAnalyzer::new(endpoint, api_key)?;
    if let Some(model) = args.model {
        analyzer = analyzer.with_model(model);
    }

    let fields = analyzer.analyze(&text).await?;
    let input = fields.into_input();
    println!("{}", serde_json::to_string_pretty(&input)?);
    eprintln!(
        "{}",
        formatter.success("Analysis complete. Review the fields before adding.")
    );
    Ok(())
}
