use super::atom::Atom;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use super::structure::Structure;
use std::fmt;

/// Identifies one of the two residues of a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepResidue {
    /// The 5' residue.
    First,
    /// The 3' residue.
    Second,
}

/// A dinucleotide step: two adjacent residues of one chain.
///
/// A step owns a private copy of its two residues, each filtered to a single
/// alternate conformation. Reshaping mutates this copy only; use
/// [`Structure::update_from_step`] to merge the result back into the full structure.
#[derive(Debug, Clone)]
pub struct Step {
    structure: Structure,
    first: ResidueId,
    second: ResidueId,
    alt_confs: (Option<char>, Option<char>),
}

impl Step {
    /// Clones two residues out of `source` into a new step.
    ///
    /// Only atoms belonging to the selected alternate conformation (or shared by all
    /// conformations) are copied, preserving their order and alternate location ids.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure holding both residues.
    /// * `first` - The 5' residue.
    /// * `second` - The 3' residue.
    /// * `alt_conf_first` - Alternate conformation selector for the first residue.
    /// * `alt_conf_second` - Alternate conformation selector for the second residue.
    ///
    /// # Return
    ///
    /// Returns `None` if either residue does not exist, both are the same residue,
    /// or they belong to different chains.
    pub fn from_residues(
        source: &Structure,
        first: ResidueId,
        second: ResidueId,
        alt_conf_first: Option<char>,
        alt_conf_second: Option<char>,
    ) -> Option<Self> {
        if first == second {
            return None;
        }
        let first_residue = source.residue(first)?;
        let second_residue = source.residue(second)?;
        if first_residue.chain_id != second_residue.chain_id {
            return None;
        }
        let chain = source.chain(first_residue.chain_id)?;

        let mut structure = Structure::new();
        let chain_id = structure.add_chain(&chain.id);
        let new_first = copy_residue(source, first_residue, alt_conf_first, &mut structure, chain_id)?;
        let new_second =
            copy_residue(source, second_residue, alt_conf_second, &mut structure, chain_id)?;

        Some(Self {
            structure,
            first: new_first,
            second: new_second,
            alt_confs: (alt_conf_first, alt_conf_second),
        })
    }

    /// The step's private structure (one chain, two residues).
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub(crate) fn structure_mut(&mut self) -> &mut Structure {
        &mut self.structure
    }

    pub fn residue_id(&self, which: StepResidue) -> ResidueId {
        match which {
            StepResidue::First => self.first,
            StepResidue::Second => self.second,
        }
    }

    pub fn residue(&self, which: StepResidue) -> Option<&Residue> {
        self.structure.residue(self.residue_id(which))
    }

    /// The alternate conformation selector the residue was filtered with.
    pub fn alt_conf(&self, which: StepResidue) -> Option<char> {
        match which {
            StepResidue::First => self.alt_confs.0,
            StepResidue::Second => self.alt_confs.1,
        }
    }

    /// Looks up an atom of one residue by name.
    pub fn atom_id(&self, which: StepResidue, name: &str) -> Option<AtomId> {
        self.residue(which)?
            .atom_id_in_alt_conf(name, self.alt_conf(which))
    }

    pub fn atom(&self, which: StepResidue, name: &str) -> Option<&Atom> {
        self.structure.atom(self.atom_id(which, name)?)
    }

    /// Returns all atom IDs of the step, first residue first, in insertion order.
    pub fn atom_ids(&self) -> Vec<AtomId> {
        [StepResidue::First, StepResidue::Second]
            .into_iter()
            .filter_map(|which| self.residue(which))
            .flat_map(|residue| residue.atoms().iter().copied())
            .collect()
    }

    /// Short human readable description of one residue, e.g. `A/10 DG`.
    pub fn describe_residue(&self, which: StepResidue) -> String {
        let Some(residue) = self.residue(which) else {
            return String::from("?");
        };
        let chain = self
            .structure
            .chain(residue.chain_id)
            .map(|chain| chain.id.as_str())
            .unwrap_or("?");
        let ins = residue.ins_code.map(String::from).unwrap_or_default();
        let alt = self
            .alt_conf(which)
            .map(|alt| format!(":{}", alt))
            .unwrap_or_default();
        format!("{}/{}{} {}{}", chain, residue.seq_num, ins, residue.name, alt)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.describe_residue(StepResidue::First),
            self.describe_residue(StepResidue::Second)
        )
    }
}

fn copy_residue(
    source: &Structure,
    residue: &Residue,
    alt_conf: Option<char>,
    target: &mut Structure,
    chain_id: ChainId,
) -> Option<ResidueId> {
    let new_id = target.add_residue(chain_id, residue.seq_num, residue.ins_code, &residue.name)?;
    for &atom_id in residue.atoms() {
        let Some(atom) = source.atom(atom_id) else {
            continue;
        };
        if atom.matches_alt_conf(alt_conf) {
            target.add_atom_to_residue(new_id, atom.clone())?;
        }
    }
    Some(new_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn two_residue_structure() -> (Structure, ResidueId, ResidueId) {
        let mut structure = Structure::new();
        let chain = structure.add_chain("B");
        let r1 = structure.add_residue(chain, 5, None, "DA").unwrap();
        let r2 = structure.add_residue(chain, 6, Some('A'), "DT").unwrap();

        for (name, alt, x) in [("C1'", None, 1.0), ("O3'", Some('A'), 2.0), ("O3'", Some('B'), 2.5)] {
            structure
                .add_atom_to_residue(r1, Atom::new(name, r1, Point3::new(x, 0.0, 0.0)).with_alt_loc(alt))
                .unwrap();
        }
        structure
            .add_atom_to_residue(r2, Atom::new("P", r2, Point3::new(3.0, 0.0, 0.0)))
            .unwrap();
        (structure, r1, r2)
    }

    #[test]
    fn from_residues_copies_only_the_selected_conformation() {
        let (structure, r1, r2) = two_residue_structure();
        let step = Step::from_residues(&structure, r1, r2, Some('B'), None).unwrap();

        assert_eq!(step.structure().atom_count(), 3);
        let o3 = step.atom(StepResidue::First, "O3'").unwrap();
        assert_eq!(o3.position.x, 2.5);
        assert_eq!(o3.alt_loc, Some('B'));
        assert!(step.atom(StepResidue::Second, "P").is_some());
        assert_eq!(step.alt_conf(StepResidue::First), Some('B'));
    }

    #[test]
    fn from_residues_without_selector_drops_alternate_atoms() {
        let (structure, r1, r2) = two_residue_structure();
        let step = Step::from_residues(&structure, r1, r2, None, None).unwrap();

        assert!(step.atom(StepResidue::First, "O3'").is_none());
        assert_eq!(step.atom_ids().len(), 2);
    }

    #[test]
    fn from_residues_rejects_identical_or_missing_residues() {
        let (structure, r1, _) = two_residue_structure();
        assert!(Step::from_residues(&structure, r1, r1, None, None).is_none());
        assert!(Step::from_residues(&structure, r1, ResidueId::default(), None, None).is_none());
    }

    #[test]
    fn from_residues_rejects_residues_of_different_chains() {
        let (mut structure, r1, _) = two_residue_structure();
        let other_chain = structure.add_chain("C");
        let r3 = structure.add_residue(other_chain, 1, None, "DC").unwrap();
        assert!(Step::from_residues(&structure, r1, r3, None, None).is_none());
    }

    #[test]
    fn step_preserves_residue_labels() {
        let (structure, r1, r2) = two_residue_structure();
        let step = Step::from_residues(&structure, r1, r2, Some('A'), None).unwrap();

        let second = step.residue(StepResidue::Second).unwrap();
        assert_eq!(second.seq_num, 6);
        assert_eq!(second.ins_code, Some('A'));
        assert_eq!(second.name, "DT");
        assert_eq!(step.to_string(), "B/5 DA:A -> B/6A DT");
    }

    #[test]
    fn update_from_step_writes_coordinates_back() {
        let (mut structure, r1, r2) = two_residue_structure();
        let mut step = Step::from_residues(&structure, r1, r2, Some('A'), None).unwrap();

        let o3_id = step.atom_id(StepResidue::First, "O3'").unwrap();
        step.structure_mut().atom_mut(o3_id).unwrap().position = Point3::new(9.0, 9.0, 9.0);

        let updated = structure.update_from_step(&step);
        assert_eq!(updated, 3);
        assert_eq!(
            structure.residue_atom(r1, "O3'", Some('A')).unwrap().position,
            Point3::new(9.0, 9.0, 9.0)
        );
        assert_eq!(
            structure.residue_atom(r1, "O3'", Some('B')).unwrap().position,
            Point3::new(2.5, 0.0, 0.0)
        );
    }
}
