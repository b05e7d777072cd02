mod cli;
mod commands;
mod config;
mod data;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("ntcgeom CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = AppConfig::load(cli.config.as_deref())?;

    let command_result = match cli.command {
        Commands::Conformers(args) => commands::conformers::run(args),
        Commands::Measure(args) => commands::step::measure(args),
        Commands::Apply(args) => commands::step::apply(args, &config),
        Commands::Similarity(args) => commands::step::similarity(args, &config),
        Commands::Connectivity(args) => commands::step::connectivity(args, &config),
        Commands::Classify(args) => commands::classify::run(args, &config),
        Commands::Params(args) => commands::params::run(args, &config),
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ConformersCommands, ParamsCommands};

    #[test]
    fn step_selection_arguments_parse() {
        let cli = Cli::parse_from([
            "ntcgeom", "-vv", "classify", "-i", "strand.toml", "--chain", "A", "--residue", "-3",
            "--alt1", "B", "--params", "/data/ntc",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Classify(args) => {
                assert_eq!(args.step.residue, -3);
                assert_eq!(args.step.alt1, Some('B'));
                assert_eq!(args.step.alt2, None);
                assert_eq!(args.params.unwrap().to_str(), Some("/data/ntc"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn nested_subcommands_parse() {
        let cli = Cli::parse_from(["ntcgeom", "conformers", "list", "--class", "BB"]);
        assert!(matches!(
            cli.command,
            Commands::Conformers(args) if matches!(&args.command, ConformersCommands::List { class: Some(c) } if c == "BB")
        ));

        let cli = Cli::parse_from(["ntcgeom", "-q", "params", "check"]);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Params(args) if matches!(args.command, ParamsCommands::Check)
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["ntcgeom", "-q", "-v", "params", "path"]).is_err());
    }
}
