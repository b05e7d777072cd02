use super::ids::ResidueId;

/// A chain of residues sharing one identifier (`label_asym_id`).
///
/// Residues are kept in the order they were added, which is taken to be the
/// sequence order when looking up preceding and following residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: String,
    pub(crate) residues: Vec<ResidueId>,
}

impl Chain {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.trim().to_string(),
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }

    /// Returns the residue directly preceding `residue_id` in this chain.
    pub fn previous_residue(&self, residue_id: ResidueId) -> Option<ResidueId> {
        let index = self.position_of(residue_id)?;
        index.checked_sub(1).map(|i| self.residues[i])
    }

    /// Returns the residue directly following `residue_id` in this chain.
    pub fn next_residue(&self, residue_id: ResidueId) -> Option<ResidueId> {
        let index = self.position_of(residue_id)?;
        self.residues.get(index + 1).copied()
    }

    fn position_of(&self, residue_id: ResidueId) -> Option<usize> {
        self.residues.iter().position(|&id| id == residue_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn rid(n: u64) -> ResidueId {
        ResidueId::from(KeyData::from_ffi(n))
    }

    fn chain_with(ids: &[u64]) -> Chain {
        let mut chain = Chain::new(" B ");
        chain.residues = ids.iter().map(|&n| rid(n)).collect();
        chain
    }

    #[test]
    fn new_chain_trims_identifier() {
        let chain = Chain::new(" B ");
        assert_eq!(chain.id, "B");
        assert!(chain.residues().is_empty());
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let chain = chain_with(&[1, 2, 3]);
        assert_eq!(chain.previous_residue(rid(2)), Some(rid(1)));
        assert_eq!(chain.next_residue(rid(2)), Some(rid(3)));
    }

    #[test]
    fn chain_termini_have_no_neighbors_beyond_them() {
        let chain = chain_with(&[1, 2, 3]);
        assert_eq!(chain.previous_residue(rid(1)), None);
        assert_eq!(chain.next_residue(rid(3)), None);
    }

    #[test]
    fn unknown_residue_has_no_neighbors() {
        let chain = chain_with(&[1, 2]);
        assert_eq!(chain.previous_residue(rid(9)), None);
        assert_eq!(chain.next_residue(rid(9)), None);
    }
}
