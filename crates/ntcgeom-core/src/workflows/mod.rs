//! # Workflows Module
//!
//! The entry points a hosting application calls. Workflows take a full structure or a
//! step extracted from one, resolve conformer names and dispatch to the engine.
//!
//! - **Step Extraction** ([`steps`]) - Dinucleotide steps of a structure, expanded over
//!   alternate conformations, and the steps adjacent to a given one
//! - **Analysis** ([`analysis`]) - Applying a conformer, similarity and connectivity
//!   scans over the whole NtC table, superposed references and classification

pub mod analysis;
pub mod steps;
