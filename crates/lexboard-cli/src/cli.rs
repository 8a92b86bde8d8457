//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use lexboard_domain::{CourtLevel, Verdict};
use lexboard_engine::DEFAULT_YEAR_RANGE;

/// Lexboard CLI - Search, compare, and contribute legal precedents.
#[derive(Debug, Parser)]
#[command(name = "lexboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search and filter the case collection
    Search(SearchArgs),

    /// Compare selected cases side by side
    Compare(CompareArgs),

    /// Recommend unviewed cases based on your view history
    Recommend(RecommendArgs),

    /// Record that you read a case
    View(ViewArgs),

    /// Show or clear the local view history
    History(HistoryArgs),

    /// Analyze a judgment text file into structured fields
    Analyze(AnalyzeArgs),

    /// Submit a new case to the store
    Add(AddArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Free-text search term (matches name, citation, summary, court, tags)
    pub term: Option<String>,

    /// Read cases from a JSON file instead of the remote store
    #[arg(long)]
    pub file: Option<String>,

    /// Lower year bound (inclusive)
    #[arg(long, default_value_t = DEFAULT_YEAR_RANGE.0)]
    pub year_from: i32,

    /// Upper year bound (inclusive)
    #[arg(long, default_value_t = DEFAULT_YEAR_RANGE.1)]
    pub year_to: i32,

    /// Court or verdict filter tokens, e.g. supreme, dismissed (repeatable)
    #[arg(short = 't', long = "token")]
    pub tokens: Vec<String>,

    /// Restrict results to these practice areas (repeatable)
    #[arg(long = "expertise")]
    pub expertise: Vec<String>,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Case IDs to compare (two or three)
    pub ids: Vec<String>,

    /// Read cases from a JSON file instead of the remote store
    #[arg(long)]
    pub file: Option<String>,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// Read cases from a JSON file instead of the remote store
    #[arg(long)]
    pub file: Option<String>,
}

/// Arguments for the view command.
#[derive(Debug, Parser)]
pub struct ViewArgs {
    /// Case ID that was read
    pub id: String,

    /// Read cases from a JSON file instead of the remote store
    #[arg(long)]
    pub file: Option<String>,
}

/// Arguments for history management.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub action: HistoryAction,
}

/// History management actions.
#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// Show viewed tags and case IDs
    Show,

    /// Clear the local view history
    Clear,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Path to a plain-text judgment file
    pub path: String,

    /// Override the gateway model
    #[arg(long)]
    pub model: Option<String>,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// User ID to record as the creator; defaults to the profile's user_id
    #[arg(short, long)]
    pub user: Option<String>,

    /// Read the submission from a JSON file (e.g. saved analyze output)
    #[arg(long)]
    pub from_json: Option<String>,

    /// Case name
    #[arg(long)]
    pub name: Option<String>,

    /// Legal citation
    #[arg(long)]
    pub citation: Option<String>,

    /// Year of the judgment
    #[arg(long)]
    pub year: Option<i32>,

    /// Court level
    #[arg(long, value_enum)]
    pub court: Option<CourtArg>,

    /// Verdict
    #[arg(long, value_enum)]
    pub verdict: Option<VerdictArg>,

    /// Case summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Topic tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Precedent strength (0-100)
    #[arg(long)]
    pub strength: Option<i64>,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Record store base URL
        #[arg(short, long)]
        url: String,
        /// Record store API key
        #[arg(short, long)]
        key: String,
        /// Analysis gateway URL
        #[arg(long)]
        analyzer_url: Option<String>,
        /// Analysis gateway API key
        #[arg(long)]
        analyzer_key: Option<String>,
        /// User ID recorded as the creator of submissions
        #[arg(long)]
        user: Option<String>,
        /// Years of legal practice, checked by the contribution gate
        #[arg(long, default_value_t = 0)]
        years: u32,
        /// Mark the account as approved to contribute cases
        #[arg(long)]
        approved: bool,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Court-level argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CourtArg {
    /// Supreme Court
    Supreme,
    /// High Court
    High,
    /// Tribunal
    Tribunal,
    /// Appellate Court
    Appellate,
    /// District Court
    District,
    /// State Court
    State,
}

/// Verdict argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VerdictArg {
    /// Allowed
    Allowed,
    /// Dismissed
    Dismissed,
    /// Remanded
    Remanded,
    /// Reversed
    Reversed,
    /// Settled
    Settled,
    /// Pending
    Pending,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CourtArg> for CourtLevel {
    fn from(court: CourtArg) -> Self {
        match court {
            CourtArg::Supreme => CourtLevel::Supreme,
            CourtArg::High => CourtLevel::High,
            CourtArg::Tribunal => CourtLevel::Tribunal,
            CourtArg::Appellate => CourtLevel::Appellate,
            CourtArg::District => CourtLevel::District,
            CourtArg::State => CourtLevel::State,
        }
    }
}

impl From<VerdictArg> for Verdict {
    fn from(verdict: VerdictArg) -> Self {
        match verdict {
            VerdictArg::Allowed => Verdict::Allowed,
            VerdictArg::Dismissed => Verdict::Dismissed,
            VerdictArg::Remanded => Verdict::Remanded,
            VerdictArg::Reversed => Verdict::Reversed,
            VerdictArg::Settled => Verdict::Settled,
            VerdictArg::Pending => Verdict::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_parses_tokens() {
        let cli = Cli::parse_from([
            "lexboard", "search", "tax", "-t", "supreme", "-t", "dismissed",
        ]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.term.as_deref(), Some("tax"));
                assert_eq!(args.tokens, vec!["supreme", "dismissed"]);
                assert_eq!(args.year_from, DEFAULT_YEAR_RANGE.0);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_compare_command_takes_ids() {
        let cli = Cli::parse_from(["lexboard", "compare", "c1", "c2", "c3"]);
        match cli.command {
            Command::Compare(args) => assert_eq!(args.ids.len(), 3),
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_court_conversion() {
        let court: CourtLevel = CourtArg::Supreme.into();
        assert_eq!(court, CourtLevel::Supreme);
        let verdict: Verdict = VerdictArg::Dismissed.into();
        assert_eq!(verdict, Verdict::Dismissed);
    }
}
