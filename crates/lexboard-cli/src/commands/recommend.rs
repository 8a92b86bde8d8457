//! Recommend command implementation.

use crate::cli::RecommendArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::source;
use lexboard_engine::recommend;

/// Execute the recommend command.
pub async fn execute_recommend(
    args: RecommendArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let tracker = super::local_tracker().await?;
    if !tracker.has_history() {
        println!(
            "{}",
            formatter.info("No view history yet. Record some reads with 'view' first.")
        );
        return Ok(());
    }

    let cases = source::load_cases(args.file.as_deref(), config).await?;
    let candidates = recommend(&cases, tracker.state());

    if let Some(tag) = tracker.most_recent_tag() {
        println!("{}", formatter.info(&format!("Because you viewed {}", tag)));
    }
    println!("{}", formatter.format_cases(&candidates)?);
    Ok(())
}
