use slotmap::new_key_type;

new_key_type! {
    /// Stable handle of an atom inside a [`Structure`](super::structure::Structure).
    pub struct AtomId;
    /// Stable handle of a residue inside a [`Structure`](super::structure::Structure).
    pub struct ResidueId;
    /// Stable handle of a chain inside a [`Structure`](super::structure::Structure).
    pub struct ChainId;
}
