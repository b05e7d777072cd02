use super::config::ReshapeConfig;
use super::error::{GeometryError, NtcError};
use super::measure::resolve_atom;
use super::reference::superpose_reference;
use crate::core::conformers::NtC;
use crate::core::models::step::{Step, StepResidue};
use crate::core::topology::nucleotide::AtomRef;
use crate::core::utils::geometry::bond_length;
use serde::Serialize;

/// Which side of a step a neighboring step lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Shares the step's first residue as its second one.
    Previous,
    /// Shares the step's second residue as its first one.
    Next,
}

/// Backbone continuity between two reshaped neighboring steps at their shared residue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connectivity {
    /// Conformer the neighboring step was reshaped to.
    pub ntc: &'static str,
    /// Distance in Angstroms between the two copies of the shared residue's C5'.
    pub c5_distance: f64,
    /// Distance in Angstroms between the two copies of the shared residue's O3'.
    pub o3_distance: f64,
}

/// Measures how well each candidate conformer of a neighboring step joins the step
/// reshaped to `target`.
///
/// Both steps are replaced by their references (each superposed onto its own
/// coordinates) and the two copies of the residue they share are compared.
///
/// # Arguments
///
/// * `step` - The step of interest.
/// * `target` - The conformer `step` is reshaped to.
/// * `neighbor_step` - A step sharing one residue with `step`.
/// * `neighbor` - The side `neighbor_step` lies on.
/// * `candidates` - Conformers tried for `neighbor_step`.
/// * `config` - Settings of the kinematic model used for reshaping.
///
/// # Return
///
/// One record per candidate, in the order of `candidates`.
pub fn measure_connectivities(
    step: &Step,
    target: &NtC,
    neighbor_step: &Step,
    neighbor: Neighbor,
    candidates: &[NtC],
    config: &ReshapeConfig,
) -> Result<Vec<Connectivity>, NtcError> {
    let fixed = superpose_reference(step, target, config)?.step;
    candidates
        .iter()
        .map(|candidate| {
            let moving = superpose_reference(neighbor_step, candidate, config)?.step;
            let (upstream, downstream) = match neighbor {
                Neighbor::Previous => (&moving, &fixed),
                Neighbor::Next => (&fixed, &moving),
            };
            Ok(Connectivity {
                ntc: candidate.name,
                c5_distance: shared_atom_distance(upstream, downstream, "C5'")?,
                o3_distance: shared_atom_distance(upstream, downstream, "O3'")?,
            })
        })
        .collect()
}

fn shared_atom_distance(
    upstream: &Step,
    downstream: &Step,
    name: &'static str,
) -> Result<f64, GeometryError> {
    let a = resolve_atom(
        upstream,
        &AtomRef {
            residue: StepResidue::Second,
            name,
        },
    )?;
    let b = resolve_atom(
        downstream,
        &AtomRef {
            residue: StepResidue::First,
            name,
        },
    )?;
    Ok(bond_length(&a.position, &b.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conformers;
    use crate::core::models::test_fixtures::build_strand;

    // Three residues whose two steps are both AA00.
    fn strand_steps() -> (Step, Step) {
        let (structure, residues) = build_strand(&["A", "G", "C"], &["AA00", "AA00"]);
        let first = Step::from_residues(&structure, residues[0], residues[1], None, None).unwrap();
        let second = Step::from_residues(&structure, residues[1], residues[2], None, None).unwrap();
        (first, second)
    }

    fn set(names: &[&str]) -> Vec<NtC> {
        names.iter().map(|name| *conformers::lookup(name).unwrap()).collect()
    }

    fn gap(connectivity: &Connectivity) -> f64 {
        connectivity.c5_distance + connectivity.o3_distance
    }

    #[test]
    fn matching_previous_conformer_joins_without_a_gap() {
        let (previous, step) = strand_steps();
        let candidates = set(&["AA00", "OP03"]);
        let target = conformers::lookup("AA00").unwrap();

        let connectivities = measure_connectivities(
            &step,
            target,
            &previous,
            Neighbor::Previous,
            &candidates,
            &ReshapeConfig::default(),
        )
        .unwrap();

        assert_eq!(connectivities.len(), 2);
        assert_eq!(connectivities[0].ntc, "AA00");
        assert_eq!(connectivities[1].ntc, "OP03");
        assert!(connectivities[0].c5_distance < 0.1, "{:?}", connectivities[0]);
        assert!(connectivities[0].o3_distance < 0.1, "{:?}", connectivities[0]);
        assert!(gap(&connectivities[1]) > gap(&connectivities[0]) + 0.1);
    }

    #[test]
    fn next_side_compares_the_second_residue_of_the_step() {
        let (step, next) = strand_steps();
        let candidates = set(&["AA00", "BB00"]);
        let target = conformers::lookup("AA00").unwrap();

        let connectivities = measure_connectivities(
            &step,
            target,
            &next,
            Neighbor::Next,
            &candidates,
            &ReshapeConfig::default(),
        )
        .unwrap();

        assert!(gap(&connectivities[0]) < 0.2, "{:?}", connectivities[0]);
        assert!(gap(&connectivities[1]) > gap(&connectivities[0]) + 0.1);
    }

    #[test]
    fn incomplete_neighbor_is_an_error() {
        let (mut previous, step) = strand_steps();
        let o3 = previous.atom_id(StepResidue::First, "O3'").unwrap();
        previous.structure_mut().remove_atom(o3);

        let result = measure_connectivities(
            &step,
            conformers::lookup("AA00").unwrap(),
            &previous,
            Neighbor::Previous,
            &set(&["AA00"]),
            &ReshapeConfig::default(),
        );
        assert!(matches!(result, Err(NtcError::Geometry(_))));
    }
}
