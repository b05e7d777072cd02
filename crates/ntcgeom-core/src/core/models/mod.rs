//! # Core Models Module
//!
//! Data structures representing nucleic acid structures for the NtC engine.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with its label fields and Cartesian position
//! - [`residue`] - Nucleotide (or any other) residue with alternate-location aware atom lookup
//! - [`chain`] - Ordered residue collection sharing one chain identifier
//! - [`structure`] - Arena-backed container of chains, residues and atoms
//! - [`step`] - Owned two-residue dinucleotide step cloned out of a structure
//! - [`ids`] - Stable identifiers for atoms, residues, and chains
//!
//! ## Usage
//!
//! ```ignore
//! use ntcgeom::core::models::{atom::Atom, structure::Structure};
//!
//! let mut structure = Structure::new();
//! let chain_id = structure.add_chain("A");
//! let residue_id = structure.add_residue(chain_id, 10, None, "A")?;
//!
//! let atom = Atom::new("C5'", residue_id, Point3::new(0.0, 0.0, 0.0));
//! structure.add_atom_to_residue(residue_id, atom)?;
//! ```

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod step;
pub mod structure;

#[cfg(test)]
pub(crate) mod test_fixtures;
