use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::residue::Residue;
use crate::core::models::step::Step;
use crate::core::models::structure::Structure;
use crate::engine::error::NtcError;
use tracing::trace;

/// A step together with the alternate conformations it was filtered to.
#[derive(Debug, Clone)]
pub struct AltConfStep {
    pub altconf1: Option<char>,
    pub altconf2: Option<char>,
    /// The first residue in the source structure.
    pub first_residue: ResidueId,
    /// The second residue in the source structure.
    pub second_residue: ResidueId,
    pub step: Step,
}

/// The residue forming a step with `residue_id`, if both are nucleotides.
pub fn step_partner(structure: &Structure, residue_id: ResidueId) -> Option<ResidueId> {
    if !structure.residue(residue_id)?.is_nucleotide() {
        return None;
    }
    let next = structure.next_residue(residue_id)?;
    structure
        .residue(next)
        .filter(|residue| residue.is_nucleotide())
        .map(|_| next)
}

fn selectors(residue: &Residue, restriction: Option<char>) -> Vec<Option<char>> {
    if restriction.is_some() {
        return vec![restriction];
    }
    let alt_confs = residue.alt_confs();
    if alt_confs.is_empty() {
        vec![None]
    } else {
        alt_confs.into_iter().map(Some).collect()
    }
}

/// Expands the step starting at `residue_id` over alternate conformations.
///
/// # Arguments
///
/// * `structure` - The full structure.
/// * `residue_id` - The first residue of the step.
/// * `first` - Restricts the first residue to one alternate conformation. With `None`
///   every conformation of the residue is used.
/// * `second` - The same for the second residue.
///
/// # Return
///
/// One step per combination of conformations. Empty if `residue_id` is not a
/// nucleotide or is not followed by one in its chain.
pub fn extract_steps(
    structure: &Structure,
    residue_id: ResidueId,
    first: Option<char>,
    second: Option<char>,
) -> Vec<AltConfStep> {
    let Some(partner) = step_partner(structure, residue_id) else {
        return Vec::new();
    };
    let (Some(first_residue), Some(second_residue)) =
        (structure.residue(residue_id), structure.residue(partner))
    else {
        return Vec::new();
    };

    let mut steps = Vec::new();
    for altconf1 in selectors(first_residue, first) {
        for altconf2 in selectors(second_residue, second) {
            if let Some(step) = Step::from_residues(structure, residue_id, partner, altconf1, altconf2) {
                steps.push(AltConfStep {
                    altconf1,
                    altconf2,
                    first_residue: residue_id,
                    second_residue: partner,
                    step,
                });
            }
        }
    }
    trace!(count = steps.len(), "Steps extracted");
    steps
}

/// Extracts the single step starting at `residue_id` with exact conformation selectors.
///
/// # Errors
///
/// Returns [`NtcError::NotFound`] if the residue does not start a nucleotide step.
pub fn extract_step(
    structure: &Structure,
    residue_id: ResidueId,
    altconf1: Option<char>,
    altconf2: Option<char>,
) -> Result<AltConfStep, NtcError> {
    let not_found = || NtcError::NotFound(format!("no dinucleotide step starts at {}", describe(structure, residue_id)));
    let partner = step_partner(structure, residue_id).ok_or_else(not_found)?;
    let step = Step::from_residues(structure, residue_id, partner, altconf1, altconf2)
        .ok_or_else(not_found)?;
    Ok(AltConfStep {
        altconf1,
        altconf2,
        first_residue: residue_id,
        second_residue: partner,
        step,
    })
}

/// Extracts the step starting at the residue of `atom_id`, in the atom's alternate
/// conformation.
///
/// The second residue uses the same conformation if it has one of that name, else its
/// first conformation.
pub fn extract_step_from_atom(structure: &Structure, atom_id: AtomId) -> Result<AltConfStep, NtcError> {
    let atom = structure
        .atom(atom_id)
        .ok_or_else(|| NtcError::NotFound("selected atom".to_string()))?;
    let residue_id = atom.residue_id;
    let altconf1 = atom.alt_loc;

    let altconf2 = step_partner(structure, residue_id)
        .and_then(|partner| structure.residue(partner))
        .and_then(|partner| {
            let alt_confs = partner.alt_confs();
            altconf1
                .filter(|alt| alt_confs.contains(alt))
                .or_else(|| alt_confs.first().copied())
        });
    extract_step(structure, residue_id, altconf1, altconf2)
}

/// Steps ending at the first residue of `step`, in the conformation `step` uses for it.
///
/// Empty at the start of a chain or after a non-nucleotide.
pub fn previous_steps(structure: &Structure, step: &AltConfStep) -> Vec<AltConfStep> {
    structure
        .previous_residue(step.first_residue)
        .map(|previous| extract_steps(structure, previous, None, step.altconf1))
        .unwrap_or_default()
}

/// Steps starting at the second residue of `step`, in the conformation `step` uses for it.
///
/// Empty at the end of a chain or before a non-nucleotide.
pub fn next_steps(structure: &Structure, step: &AltConfStep) -> Vec<AltConfStep> {
    extract_steps(structure, step.second_residue, step.altconf2, None)
}

fn describe(structure: &Structure, residue_id: ResidueId) -> String {
    structure
        .residue(residue_id)
        .map(|residue| {
            let chain = structure
                .chain(residue.chain_id)
                .map(|chain| chain.id.as_str())
                .unwrap_or("?");
            format!("{}/{} {}", chain, residue.seq_num, residue.name)
        })
        .unwrap_or_else(|| String::from("unknown residue"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::step::StepResidue;
    use crate::core::models::test_fixtures::build_strand;
    use nalgebra::Vector3;

    fn strand() -> (Structure, Vec<ResidueId>) {
        build_strand(&["A", "G", "C"], &["AA00", "BB00"])
    }

    fn add_alternates(structure: &mut Structure, residue: ResidueId, name: &str) {
        let shared = structure.residue_atom(residue, name, None).unwrap().clone();
        for (alt, shift) in [('A', 0.05), ('B', -0.05)] {
            let atom = Atom::new(name, residue, shared.position + Vector3::new(shift, 0.0, 0.0))
                .with_alt_loc(Some(alt));
            structure.add_atom_to_residue(residue, atom).unwrap();
        }
    }

    #[test]
    fn extract_steps_pairs_each_residue_with_its_follower() {
        let (structure, residues) = strand();
        let steps = extract_steps(&structure, residues[0], None, None);

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].altconf1, None);
        assert_eq!(steps[0].second_residue, residues[1]);
        assert_eq!(steps[0].step.residue(StepResidue::Second).unwrap().seq_num, 11);
    }

    #[test]
    fn last_residue_starts_no_step() {
        let (structure, residues) = strand();
        assert!(extract_steps(&structure, residues[2], None, None).is_empty());
        assert!(matches!(
            extract_step(&structure, residues[2], None, None),
            Err(NtcError::NotFound(_))
        ));
    }

    #[test]
    fn non_nucleotide_partner_starts_no_step() {
        let (mut structure, residues) = build_strand(&["A", "G"], &["AA00"]);
        let chain = structure.find_chain_by_id("A").unwrap();
        structure.add_residue(chain, 12, None, "HOH").unwrap();

        assert!(extract_steps(&structure, residues[1], None, None).is_empty());
        assert_eq!(extract_steps(&structure, residues[0], None, None).len(), 1);
    }

    #[test]
    fn alternate_conformations_expand_into_separate_steps() {
        let (mut structure, residues) = strand();
        add_alternates(&mut structure, residues[1], "C1'");

        let steps = extract_steps(&structure, residues[0], None, None);
        let alts: Vec<_> = steps.iter().map(|s| (s.altconf1, s.altconf2)).collect();
        assert_eq!(alts, [(None, Some('A')), (None, Some('B'))]);

        let shifted = steps[1].step.atom(StepResidue::Second, "C1'").unwrap();
        assert_eq!(shifted.alt_loc, Some('B'));

        let restricted = extract_steps(&structure, residues[0], None, Some('A'));
        assert_eq!(restricted.len(), 1);
        assert_eq!(restricted[0].altconf2, Some('A'));
    }

    #[test]
    fn step_from_atom_follows_the_atom_alternate() {
        let (mut structure, residues) = strand();
        add_alternates(&mut structure, residues[1], "O3'");
        add_alternates(&mut structure, residues[2], "P");

        let atom_id = structure
            .residue(residues[1])
            .unwrap()
            .atom_id("O3'", Some('B'))
            .unwrap();
        let step = extract_step_from_atom(&structure, atom_id).unwrap();

        assert_eq!(step.first_residue, residues[1]);
        assert_eq!((step.altconf1, step.altconf2), (Some('B'), Some('B')));
        assert_eq!(step.step.atom(StepResidue::First, "O3'").unwrap().alt_loc, Some('B'));
    }

    #[test]
    fn neighbors_of_a_step_respect_its_conformations() {
        let (mut structure, residues) = strand();
        add_alternates(&mut structure, residues[1], "C1'");
        let middle = extract_step(&structure, residues[1], Some('A'), None).unwrap();

        let previous = previous_steps(&structure, &middle);
        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0].altconf2, Some('A'));
        assert_eq!(previous[0].first_residue, residues[0]);

        assert!(next_steps(&structure, &middle).is_empty());

        let first = extract_step(&structure, residues[0], None, Some('B')).unwrap();
        assert!(previous_steps(&structure, &first).is_empty());
        let next = next_steps(&structure, &first);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].altconf1, Some('B'));
    }
}
