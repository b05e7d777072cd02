use super::config::ReshapeConfig;
use super::error::GeometryError;
use super::kinematics::{ContactGraph, KinematicAtom, KinematicModel};
use super::measure::base_kind_of;
use crate::core::conformers::NtC;
use crate::core::models::ids::AtomId;
use crate::core::models::step::{Step, StepResidue};
use crate::core::topology::nucleotide::{
    AtomRef, BACKBONE_TORSION_QUADS, RESHAPED_NU_TORSIONS, RIBOSE_RING_OPENING, TorsionQuad,
    is_pruned_phosphate_atom, nu_quad,
};
use crate::core::utils::geometry::rotation_between;
use std::collections::HashMap;
use tracing::debug;

/// Atoms of a step taking part in reshaping, indexed for the kinematic model.
struct ReshapeAtoms {
    ids: Vec<AtomId>,
    atoms: Vec<KinematicAtom>,
    index_of: HashMap<AtomId, usize>,
}

impl ReshapeAtoms {
    fn collect(step: &Step) -> Self {
        let mut ids = Vec::new();
        let mut atoms = Vec::new();
        for which in [StepResidue::First, StepResidue::Second] {
            let Some(residue) = step.residue(which) else {
                continue;
            };
            for &atom_id in residue.atoms() {
                let Some(atom) = step.structure().atom(atom_id) else {
                    continue;
                };
                if which == StepResidue::First && is_pruned_phosphate_atom(&atom.name) {
                    continue;
                }
                ids.push(atom_id);
                atoms.push(KinematicAtom {
                    label: format!("{}/{}", residue.seq_num, atom.name),
                    element: atom.element.clone(),
                    position: atom.position,
                });
            }
        }
        let index_of = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self {
            ids,
            atoms,
            index_of,
        }
    }

    fn resolve(&self, step: &Step, atom: &AtomRef) -> Result<usize, GeometryError> {
        step.atom_id(atom.residue, atom.name)
            .and_then(|id| self.index_of.get(&id).copied())
            .ok_or_else(|| GeometryError::MissingAtom {
                residue: step.describe_residue(atom.residue),
                atom: atom.name.to_string(),
            })
    }

    fn resolve_quad(&self, step: &Step, quad: &TorsionQuad) -> Result<[usize; 4], GeometryError> {
        Ok([
            self.resolve(step, &quad[0])?,
            self.resolve(step, &quad[1])?,
            self.resolve(step, &quad[2])?,
            self.resolve(step, &quad[3])?,
        ])
    }
}

/// A torsion to set, in the order it is applied.
struct TorsionTarget {
    quad: [usize; 4],
    target: f64,
}

/// Every torsion `apply_ntc` sets, in application order: the seven backbone torsions,
/// nu4 and nu0 of each ribose, then chi of both residues.
fn torsion_targets(
    step: &Step,
    atoms: &ReshapeAtoms,
    ntc: &NtC,
) -> Result<Vec<TorsionTarget>, GeometryError> {
    let mut targets = Vec::with_capacity(13);

    for (quad, target) in BACKBONE_TORSION_QUADS.iter().zip(ntc.metrics.backbone()) {
        targets.push(TorsionTarget {
            quad: atoms.resolve_quad(step, quad)?,
            target,
        });
    }

    for which in [StepResidue::First, StepResidue::Second] {
        for index in RESHAPED_NU_TORSIONS {
            if let Some(quad) = nu_quad(which, index) {
                targets.push(TorsionTarget {
                    quad: atoms.resolve_quad(step, &quad)?,
                    target: ntc.nu(which)[index],
                });
            }
        }
    }

    for which in [StepResidue::First, StepResidue::Second] {
        let quad = base_kind_of(step, which)?.chi_quad(which);
        targets.push(TorsionTarget {
            quad: atoms.resolve_quad(step, &quad)?,
            target: ntc.chi(which),
        });
    }

    Ok(targets)
}

/// Builds the kinematic model of a step: covalent contacts, plus the O3'-P linkage
/// when it lies within the contact window, with both ribose rings opened.
fn kinematic_model(
    step: &Step,
    atoms: &ReshapeAtoms,
    config: &ReshapeConfig,
) -> Result<KinematicModel, GeometryError> {
    let mut graph = ContactGraph::build(&atoms.atoms, config);

    let o3 = atoms.resolve(
        step,
        &AtomRef {
            residue: StepResidue::First,
            name: "O3'",
        },
    )?;
    let p = atoms.resolve(
        step,
        &AtomRef {
            residue: StepResidue::Second,
            name: "P",
        },
    )?;
    let linkage = (atoms.atoms[p].position - atoms.atoms[o3].position).norm();
    if (config.min_contact_distance..=config.max_contact_distance).contains(&linkage) {
        graph.add_edge(o3, p);
    } else {
        debug!(distance = linkage, "Residues of the step are not linked");
    }

    for which in [StepResidue::First, StepResidue::Second] {
        let (from, to) = RIBOSE_RING_OPENING;
        let from = atoms.resolve(step, &AtomRef { residue: which, name: from })?;
        let to = atoms.resolve(step, &AtomRef { residue: which, name: to })?;
        graph.remove_edge(from, to);
    }

    Ok(KinematicModel::new(atoms.atoms.clone(), &graph))
}

/// Reshapes a step in place so that its torsions match a reference conformer.
///
/// Backbone, ribose and glycosidic torsions are set by rotating subtrees of the step's
/// covalent tree. The step is then moved rigidly so that the first residue's C5' is
/// exactly where it was and the C5'-O3' direction across the step is unchanged. The 5'
/// phosphate of the first residue is never moved.
///
/// The residues are linked through O3'-P even when that bond is stretched, as long as
/// it stays within the contact window of `config`.
///
/// # Arguments
///
/// * `step` - The step to reshape.
/// * `ntc` - The target conformer.
/// * `config` - Contact detection settings for the kinematic model.
///
/// # Errors
///
/// Returns [`GeometryError`] if a required atom is missing, a residue is not a
/// nucleotide, a torsion cannot be set because the covalent tree does not separate its
/// end atoms, or the geometry is degenerate. The step is only written once every
/// torsion has been set, so on any error it is left untouched.
pub fn apply_ntc(step: &mut Step, ntc: &NtC, config: &ReshapeConfig) -> Result<(), GeometryError> {
    let atoms = ReshapeAtoms::collect(step);
    let targets = torsion_targets(step, &atoms, ntc)?;
    let c5 = atoms.resolve(
        step,
        &AtomRef {
            residue: StepResidue::First,
            name: "C5'",
        },
    )?;
    let o3 = atoms.resolve(
        step,
        &AtomRef {
            residue: StepResidue::Second,
            name: "O3'",
        },
    )?;

    let mut model = kinematic_model(step, &atoms, config)?;
    let c5_initial = model.position(c5);
    let o3_initial = model.position(o3);

    for TorsionTarget { quad, target } in targets {
        if model.set_torsion(quad, target)?.is_none() {
            return Err(GeometryError::UnsettableTorsion {
                atoms: quad.map(|i| atoms.atoms[i].label.as_str()).join("-"),
            });
        }
    }

    let c5_final = model.position(c5);
    let o3_final = model.position(o3);
    let realignment = rotation_between(&(o3_final - c5_final), &(o3_initial - c5_initial))
        .ok_or_else(|| GeometryError::DegenerateAxis {
            from: atoms.atoms[c5].label.clone(),
            to: atoms.atoms[o3].label.clone(),
        })?;
    model.transform_all(|p| c5_initial + realignment * (p - c5_final));

    let structure = step.structure_mut();
    for (&atom_id, position) in atoms.ids.iter().zip(model.positions()) {
        if let Some(atom) = structure.atom_mut(atom_id) {
            atom.position = position;
        }
    }

    debug!(ntc = ntc.name, "Step reshaped");
    Ok(())
}
