pub mod classify;
pub mod conformers;
pub mod params;
pub mod step;

use crate::cli::StepArgs;
use crate::error::{CliError, Result};
use ntcgeom::core::conformers::{StepMetrics, StepParameter};
use ntcgeom::core::io::{snapshot::TomlSnapshot, traits::StructureFile};
use ntcgeom::core::models::structure::Structure;
use ntcgeom::workflows::steps::{AltConfStep, extract_steps};
use std::fmt::Write;
use std::path::Path;
use tracing::{debug, info};

pub(crate) fn load_structure(path: &Path) -> Result<Structure> {
    info!("Loading input structure from {:?}", path);
    TomlSnapshot::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub(crate) fn write_structure(structure: &Structure, path: &Path) -> Result<()> {
    TomlSnapshot::write_to_path(structure, path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Resolves the step selection of `args` to every matching alternate-conformation step.
pub(crate) fn select_steps(structure: &Structure, args: &StepArgs) -> Result<Vec<AltConfStep>> {
    let description = describe_selection(args);
    let residue = structure
        .find_chain_by_id(&args.chain)
        .and_then(|chain| structure.find_residue(chain, args.residue, args.ins_code))
        .ok_or_else(|| CliError::NoStep(description.clone()))?;

    let steps = extract_steps(structure, residue, args.alt1, args.alt2);
    if steps.is_empty() {
        return Err(CliError::NoStep(description));
    }
    debug!("Selected {} step(s) for {}", steps.len(), description);
    Ok(steps)
}

fn describe_selection(args: &StepArgs) -> String {
    let ins = args.ins_code.map(String::from).unwrap_or_default();
    format!("chain {} residue {}{}", args.chain, args.residue, ins)
}

/// Label of a step's alternate conformations, e.g. `A/-`.
pub(crate) fn alt_label(step: &AltConfStep) -> String {
    let alt = |a: Option<char>| a.map(String::from).unwrap_or_else(|| "-".to_string());
    format!("{}/{}", alt(step.altconf1), alt(step.altconf2))
}

/// One `name value` line per step parameter.
pub(crate) fn format_metrics(metrics: &StepMetrics) -> String {
    let mut out = String::new();
    for parameter in StepParameter::ALL {
        let _ = writeln!(out, "  {:<10} {:>9.2}", parameter.name(), metrics.get(parameter));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntcgeom::core::models::atom::Atom;
    use ntcgeom::core::models::ids::ResidueId;
    use nalgebra::Point3;
    use std::path::PathBuf;

    /// A chain `A` of residues numbered from 1 holding one placeholder atom each.
    fn placeholder_chain(names: &[&str]) -> (Structure, Vec<ResidueId>) {
        let mut structure = Structure::new();
        let chain = structure.add_chain("A");
        let mut residues = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let residue = structure.add_residue(chain, i as isize + 1, None, name).unwrap();
            let atom = Atom::new("C1'", residue, Point3::new(i as f64 * 6.0, 0.0, 0.0));
            structure.add_atom_to_residue(residue, atom).unwrap();
            residues.push(residue);
        }
        (structure, residues)
    }

    fn step_args(chain: &str, residue: isize) -> StepArgs {
        StepArgs {
            input: PathBuf::from("unused.toml"),
            chain: chain.to_string(),
            residue,
            ins_code: None,
            alt1: None,
            alt2: None,
        }
    }

    #[test]
    fn selection_resolves_chain_and_residue() {
        let (structure, _) = placeholder_chain(&["DA", "DG", "DC"]);
        let steps = select_steps(&structure, &step_args("A", 2)).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(alt_label(&steps[0]), "-/-");
    }

    #[test]
    fn selection_without_a_step_is_reported() {
        let (structure, _) = placeholder_chain(&["DA", "DG"]);

        for args in [step_args("B", 1), step_args("A", 7), step_args("A", 2)] {
            let result = select_steps(&structure, &args);
            assert!(matches!(result, Err(CliError::NoStep(_))), "{:?}", args);
        }
    }

    #[test]
    fn structures_round_trip_through_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strand.toml");
        let (structure, _) = placeholder_chain(&["DA", "DG"]);

        write_structure(&structure, &path).unwrap();
        let loaded = load_structure(&path).unwrap();
        assert_eq!(loaded.atom_count(), 2);
        assert!(matches!(
            load_structure(&dir.path().join("missing.toml")),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn metrics_are_listed_in_parameter_order() {
        let text = format_metrics(&StepMetrics::default());
        let names: Vec<_> = text.lines().filter_map(|l| l.split_whitespace().next()).collect();
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "delta_1");
        assert_eq!(names[11], "mu");
    }
}
