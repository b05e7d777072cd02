//! # Engine Module
//!
//! The geometric and statistical core of the NtC engine: reshaping a step onto a
//! reference conformer, measuring it, and scoring it against the conformer library.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Classification tolerances and kinematic model settings
//! - **Error Handling** ([`error`]) - The error taxonomy every engine operation reports through
//! - **Kinematics** ([`kinematics`]) - Contact graph, rooted covalent tree and subtree rotations
//! - **Measurement** ([`measure`]) - Step torsions, inter-base metrics, nu angles and pseudorotation
//! - **Reshaping** ([`reshape`]) - Setting a step's torsions to those of a conformer
//! - **References** ([`reference`]) - Idealized copies of a step superposed back onto it
//! - **Scoring** ([`similarity`], [`connectivity`]) - RMSD and torsion distance per conformer,
//!   and backbone continuity with neighboring steps
//! - **Classification** ([`classification`]) - Nearest-neighbor NtC assignment against
//!   the golden step set
//!
//! Everything here operates on a caller-owned [`Step`](crate::core::models::step::Step).
//! The only shared state is the classification context, which is immutable once built.

pub mod classification;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod kinematics;
pub mod measure;
pub mod reference;
pub mod reshape;
pub mod similarity;
