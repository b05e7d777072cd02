use super::atom::{Atom, AtomLabel};
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use super::step::Step;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Represents a complete structure: chains, residues and atoms.
///
/// Atoms, residues and chains are owned by slot map arenas and referenced by stable
/// IDs, so that coordinates can be mutated by ID without aliasing. This is the model
/// the hosting application hands to the engine and receives updated coordinates in.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains.
    chains: SlotMap<ChainId, Chain>,
    /// Chains in insertion order.
    chain_order: Vec<ChainId>,
    /// Lookup map for residues by chain, sequence number and insertion code.
    residue_id_map: HashMap<(ChainId, isize, Option<char>), ResidueId>,
    /// Lookup map for chains by their identifier.
    chain_id_map: HashMap<String, ChainId>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a mutable reference to an atom by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&mut Atom)` if the atom exists, otherwise `None`.
    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns an iterator over all atoms in the structure.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues in the structure.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns the chains in the order they were added.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(|&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    /// Finds a chain ID by its identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The chain identifier (`label_asym_id`).
    ///
    /// # Return
    ///
    /// Returns `Some(ChainId)` if the chain exists, otherwise `None`.
    pub fn find_chain_by_id(&self, id: &str) -> Option<ChainId> {
        self.chain_id_map.get(id.trim()).copied()
    }

    /// Finds a residue by chain, sequence number and insertion code.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain containing the residue.
    /// * `seq_num` - The residue sequence number.
    /// * `ins_code` - The insertion code, if any.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if the residue exists, otherwise `None`.
    pub fn find_residue(
        &self,
        chain_id: ChainId,
        seq_num: isize,
        ins_code: Option<char>,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, seq_num, ins_code))
            .copied()
    }

    /// Adds a new chain or returns the existing one with the same identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The chain identifier.
    ///
    /// # Return
    ///
    /// The ID of the chain (new or existing).
    pub fn add_chain(&mut self, id: &str) -> ChainId {
        let key = id.trim().to_string();
        if let Some(&chain_id) = self.chain_id_map.get(&key) {
            return chain_id;
        }
        let chain_id = self.chains.insert(Chain::new(&key));
        self.chain_order.push(chain_id);
        self.chain_id_map.insert(key, chain_id);
        chain_id
    }

    /// Adds a new residue at the end of a chain, or returns the existing one.
    ///
    /// This method is idempotent for a given (chain, sequence number, insertion code).
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain to add the residue to.
    /// * `seq_num` - The residue sequence number.
    /// * `ins_code` - The insertion code, if any.
    /// * `name` - The compound identifier of the residue.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (the chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        seq_num: isize,
        ins_code: Option<char>,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, seq_num, ins_code);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(seq_num, ins_code, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// # Arguments
    ///
    /// * `residue_id` - The ID of the residue to add the atom to.
    /// * `atom` - The atom to add. Its `residue_id` field is overwritten.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (the residue doesn't exist,
    /// or it already holds an atom with the same name and alternate location).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get(residue_id)?;
        if residue.atom_id(&atom.name, atom.alt_loc).is_some() {
            return None;
        }

        atom.residue_id = residue_id;
        let name = atom.name.clone();
        let alt_loc = atom.alt_loc;
        let atom_id = self.atoms.insert(atom);

        self.residues
            .get_mut(residue_id)?
            .add_atom(&name, alt_loc, atom_id);

        Some(atom_id)
    }

    /// Removes an atom from the structure.
    ///
    /// # Return
    ///
    /// Returns `Some(Atom)` if the atom existed and was removed, otherwise `None`.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> Option<Atom> {
        let atom = self.atoms.remove(atom_id)?;
        if let Some(residue) = self.residues.get_mut(atom.residue_id) {
            residue.remove_atom(&atom.name, atom.alt_loc, atom_id);
        }
        Some(atom)
    }

    /// Looks up an atom of a residue by name as seen from one alternate conformation.
    pub fn residue_atom(
        &self,
        residue_id: ResidueId,
        name: &str,
        alt_conf: Option<char>,
    ) -> Option<&Atom> {
        let atom_id = self
            .residues
            .get(residue_id)?
            .atom_id_in_alt_conf(name, alt_conf)?;
        self.atoms.get(atom_id)
    }

    /// Returns the residue preceding `residue_id` in its chain.
    pub fn previous_residue(&self, residue_id: ResidueId) -> Option<ResidueId> {
        let residue = self.residues.get(residue_id)?;
        self.chains.get(residue.chain_id)?.previous_residue(residue_id)
    }

    /// Returns the residue following `residue_id` in its chain.
    pub fn next_residue(&self, residue_id: ResidueId) -> Option<ResidueId> {
        let residue = self.residues.get(residue_id)?;
        self.chains.get(residue.chain_id)?.next_residue(residue_id)
    }

    /// Assembles the full external label of an atom.
    ///
    /// # Return
    ///
    /// Returns `None` if the atom, its residue or its chain no longer exist.
    pub fn atom_label(&self, atom_id: AtomId) -> Option<AtomLabel> {
        let atom = self.atoms.get(atom_id)?;
        let residue = self.residues.get(atom.residue_id)?;
        let chain = self.chains.get(residue.chain_id)?;
        Some(AtomLabel {
            label_atom_id: atom.name.clone(),
            label_comp_id: residue.name.clone(),
            label_asym_id: chain.id.clone(),
            label_seq_id: residue.seq_num,
            ins_code: residue.ins_code,
            label_alt_id: atom.alt_loc,
        })
    }

    /// Copies atom coordinates from a step back into this structure.
    ///
    /// Atoms are matched by their complete [`AtomLabel`], so the step may have been
    /// reshaped freely in the meantime. Atoms of the step without a counterpart here
    /// are ignored.
    ///
    /// # Return
    ///
    /// The number of atoms whose coordinates were updated.
    pub fn update_from_step(&mut self, step: &Step) -> usize {
        let source = step.structure();
        let mut updated = 0;

        for (atom_id, atom) in source.atoms_iter() {
            let Some(label) = source.atom_label(atom_id) else {
                continue;
            };
            let Some(target_id) = self.find_atom_by_label(&label) else {
                continue;
            };
            if let Some(target) = self.atoms.get_mut(target_id) {
                target.position = atom.position;
                updated += 1;
            }
        }

        updated
    }

    /// Finds an atom by its complete external label.
    pub fn find_atom_by_label(&self, label: &AtomLabel) -> Option<AtomId> {
        let chain_id = self.find_chain_by_id(&label.label_asym_id)?;
        let residue_id = self.find_residue(chain_id, label.label_seq_id, label.ins_code)?;
        let residue = self.residues.get(residue_id)?;
        if residue.name != label.label_comp_id {
            return None;
        }
        residue.atom_id(&label.label_atom_id, label.label_alt_id)
    }
}
