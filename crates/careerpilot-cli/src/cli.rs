//! Command-line argument definitions.

use std::path::PathBuf;

use careerpilot_core::models::RoleKey;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "careerpilot")]
#[command(author, version, about = "AI career roadmaps and daily learning plans from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store a session token
    Login {
        #[arg(short, long)]
        username: Option<String>,

        /// Remember the password in the OS keychain for silent re-login
        #[arg(long)]
        remember: bool,
    },

    /// Forget the session and any remembered password
    Logout,

    /// Create a new account
    Register,

    /// Show the logged-in account
    Whoami,

    /// Generate and browse career roadmaps
    #[command(subcommand)]
    Roadmap(RoadmapCommand),

    /// Generate, browse and track daily learning plans
    #[command(subcommand)]
    Plan(PlanCommand),

    /// Fetch the roster and clean up progress for deleted plans
    Sync,

    /// Show overall progress
    Stats,

    /// Get an AI explanation of a topic
    Learn {
        topic: String,

        /// Extra context for the explanation
        #[arg(short, long)]
        context: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoadmapCommand {
    /// Generate a roadmap for a role
    Generate {
        role: String,

        /// Length of the learning plan in days (1-365)
        days: u32,

        /// Replace an existing roadmap for the same role without asking
        #[arg(long)]
        replace: bool,
    },

    /// List saved roadmaps
    List,

    /// Show a saved roadmap
    Show { role_key: RoleKey },

    /// Delete a roadmap, its daily plan and its progress
    Delete {
        role_key: RoleKey,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// Break a roadmap into a daily plan
    Generate { role_key: RoleKey },

    /// List active daily plans with progress
    List {
        /// Print every day, not just a summary per plan
        #[arg(short, long)]
        all: bool,
    },

    /// Mark a day as done, or undo it
    Toggle { role_key: RoleKey, day: u32 },

    /// Delete a daily plan and its progress
    Delete {
        role_key: RoleKey,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Forget every completed day, keeping roadmaps and plans
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle() {
        let cli = Cli::try_parse_from(["careerpilot", "plan", "toggle", "4", "2"]).unwrap();
        match cli.command {
            Command::Plan(PlanCommand::Toggle { role_key, day }) => {
                assert_eq!(role_key, RoleKey(4));
                assert_eq!(day, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_roadmap() {
        let cli = Cli::try_parse_from([
            "careerpilot",
            "roadmap",
            "generate",
            "Full Stack Developer",
            "90",
            "--replace",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Roadmap(RoadmapCommand::Generate { ref role, days: 90, replace: true }) if role == "Full Stack Developer"
        ));
    }

    #[test]
    fn test_parse_reset() {
        let cli = Cli::try_parse_from(["careerpilot", "plan", "reset", "-y"]).unwrap();
        assert!(matches!(cli.command, Command::Plan(PlanCommand::Reset { yes: true })));
    }

    #[test]
    fn test_rejects_non_numeric_role_key() {
        assert!(Cli::try_parse_from(["careerpilot", "plan", "delete", "abc"]).is_err());
    }

    #[test]
    fn test_global_log_file_flag() {
        let cli = Cli::try_parse_from(["careerpilot", "sync", "--log-file", "/tmp/logs"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/logs")));
    }
}
