use super::ids::{AtomId, ChainId};
use crate::core::topology::nucleotide::{self, BaseKind};
use std::collections::{BTreeSet, HashMap};

/// Represents a residue (usually a nucleotide) within a chain.
///
/// Atoms are kept in insertion order. Lookup by name is alternate-location aware:
/// the same atom name may appear once per alternate location, and at most once
/// without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Sequence number from the source structure (`label_seq_id`).
    pub seq_num: isize,
    /// PDB insertion code, if any.
    pub ins_code: Option<char>,
    /// Compound identifier (`label_comp_id`), e.g. "A", "DG".
    pub name: String,
    /// ID of the parent chain.
    pub chain_id: ChainId,
    pub(crate) atoms: Vec<AtomId>,
    atom_name_map: HashMap<(String, Option<char>), AtomId>,
}

impl Residue {
    pub(crate) fn new(seq_num: isize, ins_code: Option<char>, name: &str, chain_id: ChainId) -> Self {
        Self {
            seq_num,
            ins_code,
            name: name.trim().to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    /// Registers an atom with this residue.
    ///
    /// # Return
    ///
    /// Returns `false` (and leaves the residue untouched) if an atom with the same
    /// name and alternate location is already present.
    pub(crate) fn add_atom(&mut self, name: &str, alt_loc: Option<char>, atom_id: AtomId) -> bool {
        let key = (name.to_string(), alt_loc);
        if self.atom_name_map.contains_key(&key) {
            return false;
        }
        self.atom_name_map.insert(key, atom_id);
        self.atoms.push(atom_id);
        true
    }

    pub(crate) fn remove_atom(&mut self, name: &str, alt_loc: Option<char>, atom_id: AtomId) {
        self.atoms.retain(|&id| id != atom_id);
        let key = (name.to_string(), alt_loc);
        if self.atom_name_map.get(&key) == Some(&atom_id) {
            self.atom_name_map.remove(&key);
        }
    }

    /// Returns the atom IDs of this residue in insertion order.
    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    /// Looks up an atom by its exact name and alternate location.
    pub fn atom_id(&self, name: &str, alt_loc: Option<char>) -> Option<AtomId> {
        self.atom_name_map.get(&(name.to_string(), alt_loc)).copied()
    }

    /// Looks up the atom with the given name as seen from one alternate conformation.
    ///
    /// An atom specific to `alt_conf` wins over a shared atom of the same name.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name.
    /// * `alt_conf` - The alternate conformation selector, `None` for shared atoms only.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if such an atom exists, otherwise `None`.
    pub fn atom_id_in_alt_conf(&self, name: &str, alt_conf: Option<char>) -> Option<AtomId> {
        alt_conf
            .and_then(|alt| self.atom_id(name, Some(alt)))
            .or_else(|| self.atom_id(name, None))
    }

    /// Returns the distinct alternate location identifiers used by this residue, sorted.
    pub fn alt_confs(&self) -> Vec<char> {
        self.atom_name_map
            .keys()
            .filter_map(|(_, alt_loc)| *alt_loc)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the base family of this residue, or `None` if it is not a known nucleotide.
    pub fn base_kind(&self) -> Option<BaseKind> {
        nucleotide::base_kind(&self.name)
    }

    pub fn is_nucleotide(&self) -> bool {
        self.base_kind().is_some()
    }
}
