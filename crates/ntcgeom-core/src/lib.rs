//! # ntcgeom
//!
//! Geometry engine for nucleic acid dinucleotide steps and the NtC
//! (dinucleotide conformer) reference library.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data: the structure model (`Structure`, `Step`),
//!   geometry primitives, nucleotide topology tables, the read-only NtC reference table and
//!   loaders for the classification resource files.
//!
//! - **[`engine`]: The Logic Core.** Kinematic tree construction, step reshaping,
//!   measurement, similarity and connectivity scoring, and the classification context.
//!
//! - **[`workflows`]: The Public API.** Step extraction from a full structure (including
//!   alternate conformations) and the entry points a hosting application calls.

pub mod core;
pub mod engine;
pub mod workflows;
