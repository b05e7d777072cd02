use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::resources::{ResourceKind, ResourceLoadError};

/// Errors reported by the NtC engine.
#[derive(Debug, Error)]
pub enum NtcError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown NtC conformer '{0}'")]
    UnknownConformer(String),
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to load {kind} data: {source}")]
    ResourceLoad {
        kind: ResourceKind,
        #[source]
        source: ResourceLoadError,
    },

    #[error("No path to NtC parameters files was specified")]
    MissingPath,

    #[error("NtC classification context is not initialized")]
    Uninitialized,

    #[error("Invalid classification configuration: {0}")]
    Invalid(#[from] ConfigError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Atom {atom} not found in residue {residue}")]
    MissingAtom { residue: String, atom: String },

    #[error("Residue {residue} is not a recognized nucleotide")]
    UnknownResidue { residue: String },

    #[error("Cannot rotate about bond {from}-{to}: the atoms coincide")]
    DegenerateAxis { from: String, to: String },

    #[error("Torsion {atoms} is undefined for the current coordinates")]
    UndefinedTorsion { atoms: String },

    #[error("Torsion {atoms} cannot be set: its end atoms are not separated by the central bond")]
    UnsettableTorsion { atoms: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericError {
    #[error("Superposition of {0} failed")]
    Superposition(String),

    #[error("Non-finite value computed for {0}")]
    NonFinite(String),
}
