//! # Topology Module
//!
//! Static nucleotide knowledge used by the geometry engine: base families,
//! the atom quads defining every torsion of a step, and covalent radii used to
//! recognise chemical bonds among spatial contacts.

pub mod nucleotide;
