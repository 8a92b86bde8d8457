//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the profile command.
pub async fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => {
            for (name, profile) in &config.profiles {
                let marker = if *name == config.active_profile {
                    "*"
                } else {
                    " "
                };
                println!("{} {} -> {}", marker, name, profile.store_url);
            }
        }
        ProfileAction::Show => {
            let profile = config.get_active_profile()?;
            println!("Profile: {}", config.active_profile);
            println!("Store URL: {}", profile.store_url);
            if let Some(url) = &profile.analyzer_url {
                println!("Analyzer URL: {}", url);
            }
            if let Some(user) = &profile.user_id {
                println!("User ID: {}", user);
            }
            println!(
                "Contribution: {} years, {}",
                profile.years_of_experience,
                if profile.approved { "approved" } else { "not approved" }
            );
        }
        ProfileAction::Switch { name } => {
            config.switch_profile(name.clone())?;
            config.save()?;
            println!("{}", formatter.success(&format!("Switched to profile '{}'", name)));
        }
        ProfileAction::Set {
            name,
            url,
            key,
            analyzer_url,
            analyzer_key,
            user,
            years,
            approved,
        } => {
            config.set_profile(
                name.clone(),
                Profile {
                    store_url: url,
                    api_key: key,
                    analyzer_url,
                    analyzer_key,
                    user_id: user,
                    years_of_experience: years,
                    approved,
                },
            );
            config.save()?;
            println!("{}", formatter.success(&format!("Profile '{}' saved", name)));
        }
        ProfileAction::Delete { name } => {
            if name == config.active_profile {
                return Err(CliError::Config(
                    "Cannot delete the active profile".to_string(),
                ));
            }
            if config.profiles.remove(&name).is_none() {
                return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
            }
            config.save()?;
            println!("{}", formatter.success(&format!("Profile '{}' deleted", name)));
        }
    }
    Ok(())
}
