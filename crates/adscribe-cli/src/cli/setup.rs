use adscribe::catalog::AGE_RANGES;
use adscribe::model::CampaignStatus;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adscribe", bin_name = "adscribe", version)]
#[command(about = "Manage ad campaigns and generate ad copy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding campaigns and the session
    #[arg(
        long,
        global = true,
        env = "ADSCRIBE_DATA_DIR",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Live,
    Pending,
}

impl From<StatusArg> for CampaignStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Live => CampaignStatus::Live,
            StatusArg::Pending => CampaignStatus::Pending,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in (any non-empty email and password are accepted)
    Login { email: String, password: String },

    /// Forget the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List campaigns, newest first
    #[command(alias = "ls")]
    List {
        /// Filter by name, location or interest
        #[arg(short, long)]
        search: Option<String>,

        /// Only show campaigns with this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Create a campaign
    #[command(alias = "new")]
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        image_url: String,

        /// Target age bracket
        #[arg(
            long,
            value_parser = PossibleValuesParser::new(AGE_RANGES.iter().map(|e| e.id))
        )]
        age_range: String,

        /// Target location, e.g. USA, UK, UAE, India
        #[arg(long)]
        location: String,

        /// Interest id or label; repeat for several
        #[arg(long = "interest", required = true)]
        interests: Vec<String>,

        /// Ad copy to use instead of generating one
        #[arg(long)]
        ad_copy: Option<String>,
    },

    /// Show one campaign in full
    #[command(alias = "view")]
    Show {
        /// Campaign id or unambiguous prefix (4+ characters)
        id: String,
    },

    /// Set a campaign's status
    Status {
        id: String,
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Generate ad copy without creating a campaign
    Generate {
        name: String,

        #[arg(long = "interest", required = true)]
        interests: Vec<String>,
    },

    /// Campaign performance summary
    Analytics,

    /// Delete every campaign
    Reset {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },

    /// Show the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["adscribe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_create_collects_repeated_interests() {
        let cli = Cli::try_parse_from([
            "adscribe",
            "create",
            "--name",
            "Summer",
            "--image-url",
            "https://example.com/a.png",
            "--age-range",
            "18-25",
            "--location",
            "USA",
            "--interest",
            "tech",
            "--interest",
            "food",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create {
                interests, ad_copy, ..
            }) => {
                assert_eq!(interests, vec!["tech", "food"]);
                assert!(ad_copy.is_none());
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_an_interest() {
        assert!(Cli::try_parse_from([
            "adscribe",
            "create",
            "--name",
            "A",
            "--image-url",
            "https://example.com/a.png",
            "--age-range",
            "18-25",
            "--location",
            "USA",
        ])
        .is_err());
    }

    #[test]
    fn test_status_value_enum() {
        let cli = Cli::try_parse_from(["adscribe", "status", "abcd", "live"]).unwrap();
        match cli.command {
            Some(Commands::Status { id, status }) => {
                assert_eq!(id, "abcd");
                assert_eq!(CampaignStatus::from(status), CampaignStatus::Live);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
        assert!(Cli::try_parse_from(["adscribe", "status", "abcd", "paused"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["adscribe", "list", "-v", "--data-dir", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_age_range_limited_to_catalog() {
        let args = |age: &'static str| {
            [
                "adscribe",
                "create",
                "--name",
                "A",
                "--image-url",
                "https://example.com/a.png",
                "--age-range",
                age,
                "--location",
                "USA",
                "--interest",
                "tech",
            ]
        };
        assert!(Cli::try_parse_from(args("banana")).is_err());
        assert!(Cli::try_parse_from(args("46-55")).is_err());
        assert!(Cli::try_parse_from(args("50+")).is_ok());
    }
}
