//! # Core Module
//!
//! Fundamental data structures and read-only tables used by the NtC engine.
//!
//! - **Structure Representation** ([`models`]) - Atoms, residues, chains, structures and two-residue steps
//! - **Geometry** ([`utils`]) - Torsion angles, distances, Rodrigues rotations and least-squares superposition
//! - **Nucleotide Knowledge** ([`topology`]) - Base families, torsion atom quads and covalent radii
//! - **Reference Conformers** ([`conformers`]) - The NtC table and its lookup helpers
//! - **File I/O** ([`io`]) - Classification resource files and structure snapshots

pub mod conformers;
pub mod io;
pub mod models;
pub mod topology;
pub mod utils;
