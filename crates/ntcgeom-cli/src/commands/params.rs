use crate::cli::{ParamsArgs, ParamsCommands};
use crate::config::AppConfig;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use ntcgeom::engine::classification::ClassificationContext;
use tracing::info;

pub fn run(args: ParamsArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        ParamsCommands::Path => handle_path(),
        ParamsCommands::SetPath { path } => handle_set_path(path),
        ParamsCommands::ResetPath => handle_reset_path(),
        ParamsCommands::Check => handle_check(config),
    }
}

fn handle_path() -> Result<()> {
    let manager = DataManager::new()?;
    println!("{}", manager.get_data_path().display());
    Ok(())
}

fn handle_set_path(path: std::path::PathBuf) -> Result<()> {
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    DataManager::set_custom_path(&path)?;
    println!("Parameters path set to: {}", path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    DataManager::reset_path()?;
    let manager = DataManager::new()?;
    println!(
        "Parameters path reset to default: {}",
        manager.get_data_path().display()
    );
    Ok(())
}

fn handle_check(config: &AppConfig) -> Result<()> {
    let manager = DataManager::new()?;
    let classification = config.classification(None, &manager)?;
    let checked = DataManager::with_custom_path(classification.parameters_path.clone());

    let mut missing = 0;
    for status in checked.resource_status() {
        let mark = if status.present { "ok" } else { "missing" };
        println!("{:<8} {:<14} {}", mark, status.kind.to_string(), status.path.display());
        if !status.present {
            missing += 1;
        }
    }
    if missing > 0 {
        return Err(CliError::Data(format!(
            "{} of the NtC parameter files are missing from {}",
            missing,
            classification.parameters_path.display()
        )));
    }

    let context = ClassificationContext::load(&classification)
        .map_err(|e| CliError::Data(e.to_string()))?;
    info!("Parameters verified");
    println!(
        "Parameters are complete: {} golden steps, {} conformer references.",
        context.golden_step_count(),
        context.conformer_count()
    );
    Ok(())
}
