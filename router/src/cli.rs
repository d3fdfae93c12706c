use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "router")]
#[command(about = "Grid route builder around rectangular obstacles")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Scenario file (TOML); the built-in demo scenario is used when omitted
    #[arg(short = 'c', long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Allow diagonal moves even if the scenario does not
    #[arg(long)]
    pub diagonal: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a route from the scenario's start to its target
    Route {
        /// Search strategy to use
        #[arg(short, long, value_enum, default_value_t = Algorithm::Frontier)]
        algorithm: Algorithm,

        /// Skip printing the grid overlay
        #[arg(long)]
        no_render: bool,
    },

    /// Route from the start to every waypoint, then between all waypoints
    Multi {
        /// Search strategy to use
        #[arg(short, long, value_enum, default_value_t = Algorithm::Frontier)]
        algorithm: Algorithm,
    },

    /// Run every strategy on the scenario and compare
    Benchmark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Generational expansion with one route copy per branch
    Frontier,

    /// Generational expansion over parent-linked arena nodes
    Arena,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Frontier, Self::Arena].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Frontier => "Frontier",
            Self::Arena => "Arena",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_command() {
        let args = Args::try_parse_from([
            "router", "-v", "debug", "--diagonal", "route", "-a", "arena", "--no-render",
        ])
        .unwrap();

        assert_eq!(args.verbosity, LevelFilter::Debug);
        assert!(args.diagonal);
        assert!(args.scenario.is_none());
        match args.command {
            Command::Route {
                algorithm,
                no_render,
            } => {
                assert_eq!(algorithm, Algorithm::Arena);
                assert!(no_render);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn defaults_to_frontier() {
        let args = Args::try_parse_from(["router", "-c", "demo.toml", "multi"]).unwrap();
        assert_eq!(args.scenario, Some(PathBuf::from("demo.toml")));
        assert!(matches!(
            args.command,
            Command::Multi {
                algorithm: Algorithm::Frontier
            }
        ));
    }
}
