//! Add command implementation.
//!
//! Submissions go through the session controller, so the same validation
//! and eligibility gates apply as on the dashboard. Eligibility comes from
//! the active profile; an unapproved or under-experienced profile is
//! rejected before anything is sent to the store.

use crate::cli::AddArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::source;
use lexboard_domain::{NewCaseInput, UserId};
use lexboard_history::{HistoryTracker, MemoryCache, NullViewStore};
use lexboard_session::{DashboardController, SubmitterEligibility};
use std::fs;
use std::sync::Arc;

/// Execute the add command.
pub async fn execute_add(args: AddArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = match &args.from_json {
        Some(path) => serde_json::from_str::<NewCaseInput>(&fs::read_to_string(path)?)?,
        None => NewCaseInput {
            name: args.name.unwrap_or_default(),
            citation: args.citation.unwrap_or_default(),
            year: args.year,
            court: args.court.map(Into::into),
            verdict: args.verdict.map(Into::into),
            summary: args.summary.unwrap_or_default(),
            tags: args.tags,
            precedent_strength: args.strength,
            ..Default::default()
        },
    };

    let profile = config.get_active_profile()?;
    let user = args
        .user
        .as_deref()
        .or(profile.user_id.as_deref())
        .ok_or_else(|| {
            CliError::Config("No user ID; pass --user or set user_id in the profile".to_string())
        })?;
    let eligibility = SubmitterEligibility {
        years_of_experience: profile.years_of_experience,
        approved: profile.approved,
    };

    let store = Arc::new(source::store_from(config)?);
    let tracker = HistoryTracker::new(Arc::new(NullViewStore), MemoryCache::new(), None);
    let mut controller =
        DashboardController::new(store, tracker, Some(UserId::from(user)));
    controller.set_eligibility(Some(eligibility));

    let record = controller.submit_case(input).await?;
    println!(
        "{}",
        formatter.success(&format!("Case added: {} ({})", record.name, record.id))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CourtArg, VerdictArg};
    use crate::config::{OutputFormat, Profile};
    use lexboard_session::SessionError;

    fn profile(years: u32, approved: bool) -> Profile {
        Profile {
            // Unreachable on purpose: a submission that gets past the gates
            // would surface as a store error, not an eligibility one
            store_url: "http://127.0.0.1:1".to_string(),
            api_key: "key".to_string(),
            analyzer_url: None,
            analyzer_key: None,
            user_id: Some("u1".to_string()),
            years_of_experience: years,
            approved,
        }
    }

    fn config_with(profile: Profile) -> Config {
        let mut config = Config::default();
        config.set_profile("default".to_string(), profile);
        config
    }

    fn args() -> AddArgs {
        AddArgs {
            user: None,
            from_json: None,
            name: Some("Smith v. State".to_string()),
            citation: Some("(2024) 5 SCC 1".to_string()),
            year: Some(2024),
            court: Some(CourtArg::Supreme),
            verdict: Some(VerdictArg::Allowed),
            summary: Some("A summary.".to_string()),
            tags: vec![],
            strength: None,
        }
    }

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false)
    }

    #[tokio::test]
    async fn test_unapproved_profile_is_blocked_before_any_request() {
        let config = config_with(profile(10, false));
        let result = execute_add(args(), &config, &formatter()).await;
        assert!(matches!(
            result,
            Err(CliError::Session(SessionError::NotEligible))
        ));
    }

    #[tokio::test]
    async fn test_insufficient_experience_is_blocked() {
        let config = config_with(profile(5, true));
        let result = execute_add(args(), &config, &formatter()).await;
        assert!(matches!(
            result,
            Err(CliError::Session(SessionError::NotEligible))
        ));
    }

    #[tokio::test]
    async fn test_invalid_submission_never_reaches_the_store() {
        let config = config_with(profile(10, true));
        let mut bad = args();
        bad.name = None;
        let result = execute_add(bad, &config, &formatter()).await;
        assert!(matches!(
            result,
            Err(CliError::Session(SessionError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_missing_user_is_a_config_error() {
        let mut p = profile(10, true);
        p.user_id = None;
        let config = config_with(p);
        let result = execute_add(args(), &config, &formatter()).await;
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
