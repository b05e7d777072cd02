use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom of a nucleic acid structure.
///
/// Only the identity fields required to locate the atom within its residue and the
/// Cartesian position are stored here. The residue-level label fields (compound id,
/// chain, sequence number, insertion code) live on the parent [`Residue`](super::residue::Residue)
/// and [`Chain`](super::chain::Chain) and are assembled on demand into an [`AtomLabel`].
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number as given by the source structure.
    pub serial: usize,
    /// The atom name, also used as the `label_atom_id` (e.g. "C5'", "OP1", "N9").
    pub name: String,
    /// Chemical element symbol in upper case (e.g. "C", "P").
    pub element: String,
    /// Alternate location identifier, `None` for atoms shared by all conformations.
    pub alt_loc: Option<char>,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

/// The complete label of an atom as seen from outside the structure model.
///
/// Field names follow the mmCIF `atom_site` label categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomLabel {
    pub label_atom_id: String,
    pub label_comp_id: String,
    pub label_asym_id: String,
    pub label_seq_id: isize,
    pub ins_code: Option<char>,
    pub label_alt_id: Option<char>,
}

impl Atom {
    /// Creates a new `Atom` without an alternate location.
    ///
    /// The element is guessed from the first alphabetic character of the name, which is
    /// correct for every atom of the standard nucleotides. Use [`Atom::with_element`] for
    /// anything else.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            element: guess_element(name),
            alt_loc: None,
            residue_id,
            position,
        }
    }

    pub fn with_serial(mut self, serial: usize) -> Self {
        self.serial = serial;
        self
    }

    pub fn with_element(mut self, element: &str) -> Self {
        self.element = element.trim().to_ascii_uppercase();
        self
    }

    pub fn with_alt_loc(mut self, alt_loc: Option<char>) -> Self {
        self.alt_loc = alt_loc;
        self
    }

    /// Checks whether the atom is part of the conformation selected by `alt_conf`.
    ///
    /// Atoms without an alternate location belong to every conformation. With no
    /// selector only those shared atoms match.
    pub fn matches_alt_conf(&self, alt_conf: Option<char>) -> bool {
        self.alt_loc.is_none() || self.alt_loc == alt_conf
    }

    pub fn is_hydrogen(&self) -> bool {
        matches!(self.element.as_str(), "H" | "D")
    }
}

fn guess_element(name: &str) -> String {
    name.trim()
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default()
}
