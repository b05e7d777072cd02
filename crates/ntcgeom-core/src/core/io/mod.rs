//! Reading and writing the files the NtC engine consumes.
//!
//! [`resources`] loads the CSV tables the classifier is initialized from. Structure
//! input is outside the engine's concerns; [`snapshot`] only provides a plain TOML
//! dump of the in-memory model behind the [`traits::StructureFile`] interface so
//! tools can hand structures to the engine and read reshaped coordinates back.

pub mod resources;
pub mod snapshot;
pub mod traits;
