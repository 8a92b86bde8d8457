//! History command implementation.

use crate::cli::{HistoryAction, HistoryArgs};
use crate::error::Result;
use crate::output::Formatter;

/// Execute the history command.
pub async fn execute_history(args: HistoryArgs, formatter: &Formatter) -> Result<()> {
    match args.action {
        HistoryAction::Show => {
            let tracker = super::local_tracker().await?;
            if !tracker.has_history() {
                println!("{}", formatter.info("No view history."));
                return Ok(());
            }
            let state = tracker.state();
            println!("Viewed tags: {}", state.tags.join(", "));
            println!("Viewed cases:");
            for id in &state.viewed_case_ids {
                println!("  {}", id);
            }
        }
        HistoryAction::Clear => {
            let mut tracker = super::local_tracker().await?;
            tracker.clear_history().await;
            println!("{}", formatter.success("View history cleared"));
        }
    }
    Ok(())
}
