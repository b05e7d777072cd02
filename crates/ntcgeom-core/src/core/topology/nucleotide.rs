use crate::core::models::step::StepResidue;
use phf::{Map, phf_map};

/// Base family of a nucleotide, selecting the glycosidic torsion atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    Purine,
    Pyrimidine,
}

static NUCLEOTIDES: Map<&'static str, BaseKind> = phf_map! {
    "A" => BaseKind::Purine,
    "G" => BaseKind::Purine,
    "DA" => BaseKind::Purine,
    "DG" => BaseKind::Purine,
    "C" => BaseKind::Pyrimidine,
    "U" => BaseKind::Pyrimidine,
    "T" => BaseKind::Pyrimidine,
    "DC" => BaseKind::Pyrimidine,
    "DT" => BaseKind::Pyrimidine,
};

static COVALENT_RADII: Map<&'static str, f64> = phf_map! {
    "H" => 0.31,
    "D" => 0.31,
    "C" => 0.76,
    "N" => 0.71,
    "O" => 0.66,
    "P" => 1.07,
    "S" => 1.05,
};

/// Reference to a named atom in one of the two residues of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomRef {
    pub residue: StepResidue,
    pub name: &'static str,
}

/// Four atoms defining a torsion angle.
pub type TorsionQuad = [AtomRef; 4];

const fn first(name: &'static str) -> AtomRef {
    AtomRef {
        residue: StepResidue::First,
        name,
    }
}

const fn second(name: &'static str) -> AtomRef {
    AtomRef {
        residue: StepResidue::Second,
        name,
    }
}

const fn on(residue: StepResidue, name: &'static str) -> AtomRef {
    AtomRef { residue, name }
}

/// Backbone torsions in the order they are set when reshaping a step:
/// delta_1, epsilon_1, zeta_1, alpha_2, beta_2, gamma_2, delta_2.
pub const BACKBONE_TORSION_QUADS: [TorsionQuad; 7] = [
    [first("C5'"), first("C4'"), first("C3'"), first("O3'")],
    [first("C4'"), first("C3'"), first("O3'"), second("P")],
    [first("C3'"), first("O3'"), second("P"), second("O5'")],
    [first("O3'"), second("P"), second("O5'"), second("C5'")],
    [second("P"), second("O5'"), second("C5'"), second("C4'")],
    [second("O5'"), second("C5'"), second("C4'"), second("C3'")],
    [second("C5'"), second("C4'"), second("C3'"), second("O3'")],
];

/// Atom names of the five ribose torsions nu0 to nu4.
pub const NU_TORSION_ATOM_NAMES: [[&str; 4]; 5] = [
    ["C4'", "O4'", "C1'", "C2'"],
    ["O4'", "C1'", "C2'", "C3'"],
    ["C1'", "C2'", "C3'", "C4'"],
    ["C2'", "C3'", "C4'", "O4'"],
    ["C3'", "C4'", "O4'", "C1'"],
];

/// Ribose torsions set when reshaping, as indices into [`NU_TORSION_ATOM_NAMES`], in order.
///
/// Once the ring is opened at [`RIBOSE_RING_OPENING`] only the two torsions whose central
/// bond lies opposite the opening can be rotated; nu1, nu2 and nu3 follow from the ring.
pub const RESHAPED_NU_TORSIONS: [usize; 2] = [4, 0];

/// Ring bond left out of the kinematic tree so that the ribose becomes an open chain.
pub const RIBOSE_RING_OPENING: (&str, &str) = ("C2'", "C3'");

/// 5' phosphate atoms of the first residue excluded from reshaping.
pub const PRUNED_PHOSPHATE_ATOM_NAMES: [&str; 6] = ["P", "OP1", "OP2", "O1P", "O2P", "O5'"];

const PURINE_CHI_ATOM_NAMES: [&str; 4] = ["O4'", "C1'", "N9", "C4"];
const PYRIMIDINE_CHI_ATOM_NAMES: [&str; 4] = ["O4'", "C1'", "N1", "C2"];

/// Atoms used to superpose two conformations of the same step, besides the
/// glycosidic nitrogens.
pub const SUPERPOSITION_ATOM_NAMES_FIRST: [&str; 6] = ["C5'", "C4'", "O4'", "C3'", "O3'", "C1'"];
pub const SUPERPOSITION_ATOM_NAMES_SECOND: [&str; 8] =
    ["P", "O5'", "C5'", "C4'", "O4'", "C3'", "O3'", "C1'"];

/// Returns the base family for a residue name, or `None` if it is not a nucleotide.
pub fn base_kind(residue_name: &str) -> Option<BaseKind> {
    NUCLEOTIDES.get(residue_name.trim()).copied()
}

pub fn is_nucleotide(residue_name: &str) -> bool {
    base_kind(residue_name).is_some()
}

impl BaseKind {
    /// The nitrogen of the glycosidic bond (N9 for purines, N1 for pyrimidines).
    pub fn glycosidic_nitrogen(self) -> &'static str {
        match self {
            BaseKind::Purine => "N9",
            BaseKind::Pyrimidine => "N1",
        }
    }

    /// The chi torsion quad of a residue of this base family.
    pub fn chi_quad(self, residue: StepResidue) -> TorsionQuad {
        let names = match self {
            BaseKind::Purine => PURINE_CHI_ATOM_NAMES,
            BaseKind::Pyrimidine => PYRIMIDINE_CHI_ATOM_NAMES,
        };
        names.map(|name| on(residue, name))
    }
}

/// The torsion quad of ribose torsion `index` (0 for nu0 ... 4 for nu4).
pub fn nu_quad(residue: StepResidue, index: usize) -> Option<TorsionQuad> {
    NU_TORSION_ATOM_NAMES
        .get(index)
        .map(|names| names.map(|name| on(residue, name)))
}

pub fn is_pruned_phosphate_atom(name: &str) -> bool {
    PRUNED_PHOSPHATE_ATOM_NAMES.contains(&name.trim())
}

/// Covalent radius of an element in Angstroms.
pub fn covalent_radius(element: &str) -> Option<f64> {
    COVALENT_RADII.get(element.trim()).copied()
}

/// Decides whether two atoms at `distance` are covalently bonded.
///
/// Unknown elements never bond. The bond is accepted when the distance does not exceed
/// the sum of the covalent radii plus `tolerance`.
pub fn is_bonded(element1: &str, element2: &str, distance: f64, tolerance: f64) -> bool {
    match (covalent_radius(element1), covalent_radius(element2)) {
        (Some(r1), Some(r2)) => distance <= r1 + r2 + tolerance,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_kind_recognizes_rna_and_dna_nucleotides() {
        for name in ["A", "G", "DA", "DG"] {
            assert_eq!(base_kind(name), Some(BaseKind::Purine), "{name}");
        }
        for name in ["C", "U", "T", "DC", "DT"] {
            assert_eq!(base_kind(name), Some(BaseKind::Pyrimidine), "{name}");
        }
        assert_eq!(base_kind(" DG "), Some(BaseKind::Purine));
        assert_eq!(base_kind("ALA"), None);
        assert!(!is_nucleotide("HOH"));
    }

    #[test]
    fn chi_quads_depend_on_base_family() {
        let purine = BaseKind::Purine.chi_quad(StepResidue::First);
        let pyrimidine = BaseKind::Pyrimidine.chi_quad(StepResidue::Second);

        assert_eq!(purine.map(|a| a.name), ["O4'", "C1'", "N9", "C4"]);
        assert!(purine.iter().all(|a| a.residue == StepResidue::First));
        assert_eq!(pyrimidine.map(|a| a.name), ["O4'", "C1'", "N1", "C2"]);
        assert!(pyrimidine.iter().all(|a| a.residue == StepResidue::Second));
    }

    #[test]
    fn backbone_quads_link_consecutive_torsions() {
        for pair in BACKBONE_TORSION_QUADS.windows(2) {
            assert_eq!(pair[0][1..], pair[1][..3]);
        }
        assert_eq!(BACKBONE_TORSION_QUADS[1][3], second("P"));
    }

    #[test]
    fn nu_quads_cover_the_ribose_ring() {
        let quad = nu_quad(StepResidue::Second, 4).unwrap();
        assert_eq!(quad.map(|a| a.name), ["C3'", "C4'", "O4'", "C1'"]);
        assert!(nu_quad(StepResidue::First, 5).is_none());
        assert_eq!(RESHAPED_NU_TORSIONS, [4, 0]);
    }

    #[test]
    fn pruned_atoms_are_the_five_prime_phosphate() {
        assert!(is_pruned_phosphate_atom("P"));
        assert!(is_pruned_phosphate_atom("OP2"));
        assert!(is_pruned_phosphate_atom("O5'"));
        assert!(!is_pruned_phosphate_atom("C5'"));
        assert!(!is_pruned_phosphate_atom("O3'"));
    }

    #[test]
    fn bond_detection_uses_covalent_radii() {
        assert!(is_bonded("C", "C", 1.53, 0.45));
        assert!(is_bonded("O", "P", 1.61, 0.45));
        assert!(!is_bonded("C", "C", 2.5, 0.45));
        assert!(!is_bonded("H", "H", 1.78, 0.45));
        assert!(!is_bonded("X", "C", 1.0, 0.45));
    }
}
