use super::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Inconsistent data: {0}")]
    InconsistentData(String),
}

/// A flat, atom-per-record TOML rendition of a [`Structure`].
///
/// ```toml
/// [[atoms]]
/// serial = 1
/// name = "C5'"
/// element = "C"
/// residue = "DG"
/// chain = "A"
/// seq = 10
/// position = [1.0, 2.0, 3.0]
/// ```
///
/// `alt_loc` and `ins_code` are optional. Chains and residues are created in the order
/// their first atom appears.
pub struct TomlSnapshot;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    atoms: Vec<AtomRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AtomRecord {
    #[serde(default)]
    serial: usize,
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    element: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt_loc: Option<char>,
    residue: String,
    chain: String,
    seq: isize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ins_code: Option<char>,
    position: [f64; 3],
}

impl StructureFile for TomlSnapshot {
    type Error = SnapshotError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let document: SnapshotDocument = toml::from_str(&content)?;

        let mut structure = Structure::new();
        for record in document.atoms {
            let chain_id = structure.add_chain(&record.chain);
            let residue_id = match structure.find_residue(chain_id, record.seq, record.ins_code) {
                Some(id) => id,
                None => structure
                    .add_residue(chain_id, record.seq, record.ins_code, &record.residue)
                    .ok_or_else(|| {
                        SnapshotError::InconsistentData(format!(
                            "cannot create residue {} in chain {}",
                            record.seq, record.chain
                        ))
                    })?,
            };

            let residue_name = structure
                .residue(residue_id)
                .map(|residue| residue.name.clone())
                .unwrap_or_default();
            if residue_name != record.residue.trim() {
                return Err(SnapshotError::InconsistentData(format!(
                    "residue {}/{} is named both '{}' and '{}'",
                    record.chain, record.seq, residue_name, record.residue
                )));
            }

            let [x, y, z] = record.position;
            let mut atom = Atom::new(&record.name, residue_id, Point3::new(x, y, z))
                .with_serial(record.serial)
                .with_alt_loc(record.alt_loc);
            if !record.element.is_empty() {
                atom = atom.with_element(&record.element);
            }
            structure.add_atom_to_residue(residue_id, atom).ok_or_else(|| {
                SnapshotError::InconsistentData(format!(
                    "duplicate atom '{}' (alt {:?}) in residue {}/{}",
                    record.name, record.alt_loc, record.chain, record.seq
                ))
            })?;
        }
        Ok(structure)
    }

    fn write_to(structure: &Structure, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut document = SnapshotDocument::default();
        for (_, chain) in structure.chains_iter() {
            for &residue_id in chain.residues() {
                let Some(residue) = structure.residue(residue_id) else {
                    continue;
                };
                for &atom_id in residue.atoms() {
                    let Some(atom) = structure.atom(atom_id) else {
                        continue;
                    };
                    document.atoms.push(AtomRecord {
                        serial: atom.serial,
                        name: atom.name.clone(),
                        element: atom.element.clone(),
                        alt_loc: atom.alt_loc,
                        residue: residue.name.clone(),
                        chain: chain.id.clone(),
                        seq: residue.seq_num,
                        ins_code: residue.ins_code,
                        position: [atom.position.x, atom.position.y, atom.position.z],
                    });
                }
            }
        }
        writer.write_all(toml::to_string(&document)?.as_bytes())?;
        Ok(())
    }
}
