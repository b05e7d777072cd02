use super::config::ReshapeConfig;
use super::error::{GeometryError, NtcError, NumericError};
use super::measure::{base_kind_of, resolve_atom};
use super::reshape::apply_ntc;
use crate::core::conformers::NtC;
use crate::core::models::step::{Step, StepResidue};
use crate::core::topology::nucleotide::{
    AtomRef, SUPERPOSITION_ATOM_NAMES_FIRST, SUPERPOSITION_ATOM_NAMES_SECOND,
};
use crate::core::utils::geometry::calculate_rmsd;
use crate::core::utils::superposition::{RigidTransform, calculate_transformation};
use nalgebra::Point3;
use tracing::trace;

/// A reference copy of a step, reshaped to a conformer and superposed onto the step.
#[derive(Debug, Clone)]
pub struct Superposition {
    pub step: Step,
    /// RMSD in Angstroms over the superposition atoms after fitting.
    pub rmsd: f64,
}

/// Returns a copy of `step` reshaped to `ntc`. The step itself is not modified.
pub fn reference_step(step: &Step, ntc: &NtC, config: &ReshapeConfig) -> Result<Step, GeometryError> {
    let mut reference = step.clone();
    apply_ntc(&mut reference, ntc, config)?;
    Ok(reference)
}

/// Atoms used to superpose two conformations of a step: the sugar-phosphate backbone
/// atoms of both residues and their glycosidic nitrogens.
pub fn superposition_atoms(step: &Step) -> Result<Vec<AtomRef>, GeometryError> {
    let mut atoms = Vec::with_capacity(
        SUPERPOSITION_ATOM_NAMES_FIRST.len() + SUPERPOSITION_ATOM_NAMES_SECOND.len() + 2,
    );
    for (which, names) in [
        (StepResidue::First, &SUPERPOSITION_ATOM_NAMES_FIRST[..]),
        (StepResidue::Second, &SUPERPOSITION_ATOM_NAMES_SECOND[..]),
    ] {
        atoms.extend(names.iter().map(|&name| AtomRef {
            residue: which,
            name,
        }));
        atoms.push(AtomRef {
            residue: which,
            name: base_kind_of(step, which)?.glycosidic_nitrogen(),
        });
    }
    Ok(atoms)
}

/// Builds the reference of `step` for `ntc` and superposes it onto `step`.
///
/// # Arguments
///
/// * `step` - The step to compare against; it is not modified.
/// * `ntc` - The conformer the reference is reshaped to.
/// * `config` - Settings of the kinematic model used for reshaping.
///
/// # Return
///
/// The superposed reference and the RMSD of the fit.
///
/// # Errors
///
/// Returns [`NtcError::Geometry`] if the step cannot be reshaped or lacks a superposition
/// atom, and [`NtcError::Numeric`] if the fit fails or yields a non-finite RMSD.
pub fn superpose_reference(
    step: &Step,
    ntc: &NtC,
    config: &ReshapeConfig,
) -> Result<Superposition, NtcError> {
    let mut reference = reference_step(step, ntc, config)?;
    let atoms = superposition_atoms(step)?;
    let target = positions(step, &atoms)?;
    let mobile = positions(&reference, &atoms)?;

    let transform = calculate_transformation(&mobile, &target)
        .ok_or_else(|| NumericError::Superposition(format!("{} reference onto {}", ntc, step)))?;
    let fitted: Vec<_> = mobile.iter().map(|p| transform.apply(p)).collect();
    let rmsd = calculate_rmsd(&fitted, &target)
        .filter(|rmsd| rmsd.is_finite())
        .ok_or_else(|| NumericError::NonFinite(format!("RMSD of {} against {}", ntc, step)))?;

    transform_step(&mut reference, &transform);
    trace!(ntc = ntc.name, rmsd, "Reference superposed");
    Ok(Superposition {
        step: reference,
        rmsd,
    })
}

fn positions(step: &Step, atoms: &[AtomRef]) -> Result<Vec<Point3<f64>>, GeometryError> {
    atoms
        .iter()
        .map(|atom| resolve_atom(step, atom).map(|a| a.position))
        .collect()
}

fn transform_step(step: &mut Step, transform: &RigidTransform) {
    let ids = step.atom_ids();
    let structure = step.structure_mut();
    for id in ids {
        if let Some(atom) = structure.atom_mut(id) {
            atom.position = transform.apply(&atom.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conformers::{self, StepParameter};
    use crate::core::models::test_fixtures::build_step;
    use crate::core::utils::geometry::angle_difference;
    use crate::engine::measure::measure_step;

    fn ntc(name: &str) -> &'static NtC {
        conformers::lookup(name).unwrap()
    }

    #[test]
    fn superposition_atoms_include_both_glycosidic_nitrogens() {
        let step = build_step("AA00");
        let atoms = superposition_atoms(&step).unwrap();
        assert_eq!(atoms.len(), 16);
        assert!(atoms.contains(&AtomRef {
            residue: StepResidue::First,
            name: "N9"
        }));
        assert!(atoms.contains(&AtomRef {
            residue: StepResidue::Second,
            name: "N9"
        }));
        assert!(!atoms.contains(&AtomRef {
            residue: StepResidue::First,
            name: "P"
        }));
    }

    #[test]
    fn reference_of_the_own_conformer_fits_exactly() {
        let step = build_step("AA00");
        let superposition = superpose_reference(&step, ntc("AA00"), &ReshapeConfig::default()).unwrap();
        assert!(superposition.rmsd < 1e-6, "rmsd {}", superposition.rmsd);
    }

    #[test]
    fn reference_of_another_conformer_keeps_its_torsions_after_fitting() {
        let step = build_step("AA00");
        let target = ntc("BB00");
        let superposition = superpose_reference(&step, target, &ReshapeConfig::default()).unwrap();

        assert!(superposition.rmsd > 0.1);
        let measured = measure_step(&superposition.step).unwrap();
        for parameter in StepParameter::TORSIONS {
            let diff = angle_difference(measured.get(parameter), target.metrics.get(parameter));
            assert!(diff.abs() < 1e-6, "{parameter}: {diff}");
        }
    }

    #[test]
    fn reference_step_leaves_the_original_untouched() {
        let step = build_step("AA00");
        let before = measure_step(&step).unwrap();
        let reference = reference_step(&step, ntc("OP03"), &ReshapeConfig::default()).unwrap();

        assert_eq!(measure_step(&step).unwrap(), before);
        let delta_1 = measure_step(&reference).unwrap().delta_1;
        assert!(angle_difference(delta_1, ntc("OP03").metrics.delta_1).abs() < 1e-6);
    }

    #[test]
    fn missing_atom_is_reported_as_geometry_error() {
        let mut step = build_step("AA00");
        let p = step.atom_id(StepResidue::Second, "P").unwrap();
        step.structure_mut().remove_atom(p);

        let result = superpose_reference(&step, ntc("AA00"), &ReshapeConfig::default());
        assert!(matches!(
            result,
            Err(NtcError::Geometry(GeometryError::MissingAtom { .. }))
        ));
    }
}
