//! Builders for chemically plausible nucleotide strands used across the test suites.
//!
//! Atoms are placed from internal coordinates (bond length, bond angle, torsion) using
//! the torsions of reference conformers, so a strand built from a conformer measures
//! back to that conformer's backbone and chi torsions.

use super::atom::Atom;
use super::ids::ResidueId;
use super::step::Step;
use super::structure::Structure;
use crate::core::conformers::{self, NtC};
use crate::core::topology::nucleotide::{BaseKind, base_kind};
use nalgebra::{Point3, Vector3};

/// Places atom `d` so that |cd| = `bond`, angle(b, c, d) = `angle` and
/// torsion(a, b, c, d) = `torsion` (degrees).
pub(crate) fn place(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    bond: f64,
    angle: f64,
    torsion: f64,
) -> Point3<f64> {
    let bc = (c - b).normalize();
    let n = (b - a).cross(&bc).normalize();
    let m = n.cross(&bc);
    let (theta, phi) = (angle.to_radians(), torsion.to_radians());
    let local = Vector3::new(
        -bond * theta.cos(),
        bond * theta.sin() * phi.cos(),
        bond * theta.sin() * phi.sin(),
    );
    c + bc * local.x + m * local.y + n * local.z
}

struct ResidueGeometry {
    beta: f64,
    gamma: f64,
    delta: f64,
    chi: f64,
    nu: [f64; 5],
}

fn residue_geometry(steps: &[&NtC], k: usize) -> ResidueGeometry {
    let incoming = k.checked_sub(1).map(|i| steps[i]).unwrap_or(steps[0]);
    let (delta, chi, nu) = match steps.get(k) {
        Some(outgoing) => (outgoing.metrics.delta_1, outgoing.metrics.chi_1, outgoing.nu_first),
        None => (incoming.metrics.delta_2, incoming.metrics.chi_2, incoming.nu_second),
    };
    ResidueGeometry {
        beta: incoming.metrics.beta_2,
        gamma: incoming.metrics.gamma_2,
        delta,
        chi,
        nu,
    }
}

/// Builds one chain `A` with residues numbered from 10, where the step between
/// residues `k` and `k + 1` follows conformer `conformer_names[k]`.
pub(crate) fn build_strand(
    residue_names: &[&str],
    conformer_names: &[&str],
) -> (Structure, Vec<ResidueId>) {
    assert_eq!(residue_names.len(), conformer_names.len() + 1);
    let steps: Vec<&NtC> = conformer_names
        .iter()
        .map(|name| conformers::lookup(name).expect("known conformer"))
        .collect();

    let mut structure = Structure::new();
    let chain = structure.add_chain("A");
    let mut residues = Vec::new();
    let mut serial = 1;
    let mut previous: Option<(Point3<f64>, Point3<f64>, Point3<f64>)> = None;

    for (k, &residue_name) in residue_names.iter().enumerate() {
        let residue_id = structure
            .add_residue(chain, 10 + k as isize, None, residue_name)
            .expect("new residue");
        let geometry = residue_geometry(&steps, k);
        let mut atoms: Vec<(&str, Point3<f64>)> = Vec::new();

        let (p, o5, c5) = match previous {
            None => {
                let p = Point3::origin();
                let o5 = Point3::new(1.59, 0.0, 0.0);
                let rad = 59.1_f64.to_radians();
                let c5 = o5 + Vector3::new(rad.cos(), rad.sin(), 0.0) * 1.44;
                atoms.push(("P", p));
                atoms.push(("OP1", place(&c5, &o5, &p, 1.48, 108.0, 60.0)));
                atoms.push(("OP2", place(&c5, &o5, &p, 1.48, 108.0, -60.0)));
                (p, o5, c5)
            }
            Some((c4_prev, c3_prev, o3_prev)) => {
                let link = steps[k - 1].metrics;
                let p = place(&c4_prev, &c3_prev, &o3_prev, 1.60, 119.7, link.epsilon_1);
                let o5 = place(&c3_prev, &o3_prev, &p, 1.59, 104.0, link.zeta_1);
                let c5 = place(&o3_prev, &p, &o5, 1.44, 120.9, link.alpha_2);
                atoms.push(("P", p));
                atoms.push(("OP1", place(&c3_prev, &o3_prev, &p, 1.48, 108.0, link.zeta_1 + 120.0)));
                atoms.push(("OP2", place(&c3_prev, &o3_prev, &p, 1.48, 108.0, link.zeta_1 - 120.0)));
                (p, o5, c5)
            }
        };
        atoms.push(("O5'", o5));
        atoms.push(("C5'", c5));

        let c4 = place(&p, &o5, &c5, 1.51, 110.2, geometry.beta);
        let c3 = place(&o5, &c5, &c4, 1.52, 115.5, geometry.gamma);
        let o3 = place(&c5, &c4, &c3, 1.42, 111.0, geometry.delta);
        let o4 = place(&o5, &c5, &c4, 1.45, 109.5, geometry.gamma - 120.0);
        let c1 = place(&c3, &c4, &o4, 1.41, 109.8, geometry.nu[4]);
        let c2 = place(&c4, &o4, &c1, 1.53, 106.4, geometry.nu[0]);
        let o2 = place(&o4, &c1, &c2, 1.41, 110.8, geometry.nu[1] - 120.0);
        atoms.extend([
            ("C4'", c4),
            ("O4'", o4),
            ("C3'", c3),
            ("O3'", o3),
            ("C2'", c2),
            ("O2'", o2),
            ("C1'", c1),
        ]);

        let kind = base_kind(residue_name).expect("nucleotide residue");
        let n = place(&c4, &o4, &c1, 1.47, 108.5, geometry.nu[0] - 120.0);
        atoms.push((kind.glycosidic_nitrogen(), n));
        match kind {
            BaseKind::Purine => {
                atoms.push(("C8", place(&o4, &c1, &n, 1.37, 127.7, geometry.chi + 180.0)));
                atoms.push(("C4", place(&o4, &c1, &n, 1.37, 126.6, geometry.chi)));
            }
            BaseKind::Pyrimidine => {
                let c2_base = place(&o4, &c1, &n, 1.40, 118.0, geometry.chi);
                atoms.push(("C6", place(&o4, &c1, &n, 1.37, 121.0, geometry.chi + 180.0)));
                atoms.push(("C2", c2_base));
                atoms.push(("O2", place(&c1, &n, &c2_base, 1.22, 118.9, 0.0)));
            }
        }

        for (name, position) in atoms {
            let atom = Atom::new(name, residue_id, position).with_serial(serial);
            serial += 1;
            structure
                .add_atom_to_residue(residue_id, atom)
                .expect("unique atom name");
        }

        previous = Some((c4, c3, o3));
        residues.push(residue_id);
    }

    (structure, residues)
}

/// A two-residue `A`/`G` structure whose step follows `conformer`.
pub(crate) fn build_step_structure(conformer: &str) -> (Structure, ResidueId, ResidueId) {
    let (structure, residues) = build_strand(&["A", "G"], &[conformer]);
    (structure, residues[0], residues[1])
}

/// The step of [`build_step_structure`].
pub(crate) fn build_step(conformer: &str) -> Step {
    let (structure, first, second) = build_step_structure(conformer);
    Step::from_residues(&structure, first, second, None, None).expect("valid step")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::step::StepResidue;
    use crate::core::utils::geometry::{bond_length, torsion_angle};

    #[test]
    fn place_honors_internal_coordinates() {
        let a = Point3::new(0.3, 1.0, 0.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(1.5, 0.0, 0.2);
        let d = place(&a, &b, &c, 1.4, 112.0, -65.0);

        assert!((bond_length(&c, &d) - 1.4).abs() < 1e-9);
        let angle = (b - c).angle(&(d - c)).to_degrees();
        assert!((angle - 112.0).abs() < 1e-9);
        assert!((torsion_angle(&a, &b, &c, &d).unwrap() + 65.0).abs() < 1e-9);
    }

    #[test]
    fn built_step_has_the_conformer_backbone() {
        let step = build_step("BB00");
        let get = |which, name| step.atom(which, name).unwrap().position;
        let delta_1 = torsion_angle(
            &get(StepResidue::First, "C5'"),
            &get(StepResidue::First, "C4'"),
            &get(StepResidue::First, "C3'"),
            &get(StepResidue::First, "O3'"),
        )
        .unwrap();
        assert!((delta_1 - conformers::lookup("BB00").unwrap().metrics.delta_1).abs() < 1e-6);
        assert_eq!(step.residue(StepResidue::Second).unwrap().name, "G");
    }
}
