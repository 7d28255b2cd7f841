//! CLI argument definitions for teamdex

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "teamdex")]
#[command(about = "Build a team and inspect its defensive type coverage", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/teamdex/config.toml)
    #[arg(long, global = true, env = "TEAMDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// PokeAPI base URL
    #[arg(long, global = true, env = "TEAMDEX_BASE_URL")]
    pub base_url: Option<String>,

    /// Team file to read and update
    #[arg(long, global = true, env = "TEAMDEX_TEAM_FILE")]
    pub team_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a single chart cell
    Chart {
        /// Attacking type
        attacker: String,

        /// Defending type
        defender: String,
    },

    /// Show weaknesses, resistances and immunities of a type combination
    #[command(visible_alias = "p")]
    Profile {
        /// One or two types, e.g. `water ground`
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<String>,
    },

    /// Coverage of an ad hoc team given as `name=type[,type]`
    #[command(visible_alias = "a")]
    Analyze {
        /// Up to six members, e.g. `charizard=fire,flying`
        #[arg(required = true, num_args = 1..=6)]
        members: Vec<String>,
    },

    /// List the roster
    #[command(visible_alias = "r")]
    Roster {
        /// Number of species to load
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only show names containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Read the roster from a JSON file of PokeAPI records instead of the network
        #[arg(short, long)]
        fixture: Option<PathBuf>,
    },

    /// Manage the saved team
    #[command(visible_alias = "t")]
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },

    /// Compare the built-in chart with PokeAPI's type data
    VerifyChart {
        /// Types to check (all 18 when omitted)
        types: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum TeamCommand {
    /// Show members and coverage
    Show,

    /// Add a creature by name or dex number
    Add {
        creature: String,

        /// Resolve the creature from a fixture file instead of the network
        #[arg(short, long)]
        fixture: Option<PathBuf>,
    },

    /// Remove a creature by dex number
    Remove { id: u32 },

    /// Move the member in slot FROM to slot TO (slots start at 1)
    Move { from: usize, to: usize },

    /// Remove every member
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_profile() {
        let cli = Cli::try_parse_from(["teamdex", "profile", "water", "ground"]).unwrap();
        match cli.command {
            Commands::Profile { types } => assert_eq!(types, vec!["water", "ground"]),
            _ => panic!("expected profile"),
        }
    }

    #[test]
    fn test_profile_rejects_three_types() {
        assert!(Cli::try_parse_from(["teamdex", "profile", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_parse_team_move() {
        let cli = Cli::try_parse_from(["teamdex", "-v", "team", "move", "1", "3"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(
            cli.command,
            Commands::Team {
                command: TeamCommand::Move { from: 1, to: 3 }
            }
        ));
    }
}
