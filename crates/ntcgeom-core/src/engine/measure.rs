use super::error::GeometryError;
use crate::core::conformers::{StepMetrics, StepParameter};
use crate::core::models::atom::Atom;
use crate::core::models::step::{Step, StepResidue};
use crate::core::topology::nucleotide::{
    AtomRef, BACKBONE_TORSION_QUADS, BaseKind, TorsionQuad, nu_quad,
};
use crate::core::utils::geometry::{bond_length, normalize_angle, torsion_angle};

const C1_FIRST: AtomRef = AtomRef {
    residue: StepResidue::First,
    name: "C1'",
};
const C1_SECOND: AtomRef = AtomRef {
    residue: StepResidue::Second,
    name: "C1'",
};

/// Looks up the atom an [`AtomRef`] points to.
pub fn resolve_atom<'a>(step: &'a Step, atom: &AtomRef) -> Result<&'a Atom, GeometryError> {
    step.atom(atom.residue, atom.name)
        .ok_or_else(|| GeometryError::MissingAtom {
            residue: step.describe_residue(atom.residue),
            atom: atom.name.to_string(),
        })
}

/// Base family of one residue of the step.
///
/// # Errors
///
/// Returns [`GeometryError::UnknownResidue`] if the residue is not a known nucleotide.
pub fn base_kind_of(step: &Step, which: StepResidue) -> Result<BaseKind, GeometryError> {
    step.residue(which)
        .and_then(|residue| residue.base_kind())
        .ok_or_else(|| GeometryError::UnknownResidue {
            residue: step.describe_residue(which),
        })
}

/// Measures a torsion of the step in degrees, within (-180, 180].
pub fn measure_torsion(step: &Step, quad: &TorsionQuad) -> Result<f64, GeometryError> {
    let [a, b, c, d] = [
        resolve_atom(step, &quad[0])?,
        resolve_atom(step, &quad[1])?,
        resolve_atom(step, &quad[2])?,
        resolve_atom(step, &quad[3])?,
    ];
    torsion_angle(&a.position, &b.position, &c.position, &d.position).ok_or_else(|| {
        GeometryError::UndefinedTorsion {
            atoms: quad.iter().map(|r| r.name).collect::<Vec<_>>().join("-"),
        }
    })
}

/// Measures one of the twelve step parameters.
pub fn measure_parameter(step: &Step, parameter: StepParameter) -> Result<f64, GeometryError> {
    if let Some(index) = parameter.backbone_index() {
        return measure_torsion(step, &BACKBONE_TORSION_QUADS[index]);
    }

    match parameter {
        StepParameter::Chi1 => {
            let quad = base_kind_of(step, StepResidue::First)?.chi_quad(StepResidue::First);
            measure_torsion(step, &quad)
        }
        StepParameter::Chi2 => {
            let quad = base_kind_of(step, StepResidue::Second)?.chi_quad(StepResidue::Second);
            measure_torsion(step, &quad)
        }
        StepParameter::CC => {
            let c1_first = resolve_atom(step, &C1_FIRST)?;
            let c1_second = resolve_atom(step, &C1_SECOND)?;
            Ok(bond_length(&c1_first.position, &c1_second.position))
        }
        StepParameter::NN => {
            let [n_first, n_second] = glycosidic_nitrogens(step)?;
            let n_first = resolve_atom(step, &n_first)?;
            let n_second = resolve_atom(step, &n_second)?;
            Ok(bond_length(&n_first.position, &n_second.position))
        }
        _ => {
            let [n_first, n_second] = glycosidic_nitrogens(step)?;
            measure_torsion(step, &[n_first, C1_FIRST, C1_SECOND, n_second])
        }
    }
}

/// Measures all twelve parameters of the step.
pub fn measure_step(step: &Step) -> Result<StepMetrics, GeometryError> {
    let mut metrics = StepMetrics::default();
    for parameter in StepParameter::ALL {
        metrics.set(parameter, measure_parameter(step, parameter)?);
    }
    Ok(metrics)
}

/// Measures the ribose torsions nu0..nu4 of one residue.
pub fn measure_nu_angles(step: &Step, which: StepResidue) -> Result<[f64; 5], GeometryError> {
    let mut nus = [0.0; 5];
    for (index, nu) in nus.iter_mut().enumerate() {
        if let Some(quad) = nu_quad(which, index) {
            *nu = measure_torsion(step, &quad)?;
        }
    }
    Ok(nus)
}

/// Altona-Sundaralingam pseudorotation phase angle of a ribose, in degrees within (-180, 180].
///
/// `tan P = ((nu4 + nu1) - (nu3 + nu0)) / (2 nu2 (sin 36 + sin 72))`
pub fn pseudorotation(nu: &[f64; 5]) -> f64 {
    let numerator = (nu[4] + nu[1]) - (nu[3] + nu[0]);
    let denominator =
        2.0 * nu[2] * (36.0_f64.to_radians().sin() + 72.0_f64.to_radians().sin());
    normalize_angle(numerator.atan2(denominator).to_degrees())
}

fn glycosidic_nitrogens(step: &Step) -> Result<[AtomRef; 2], GeometryError> {
    Ok([
        AtomRef {
            residue: StepResidue::First,
            name: base_kind_of(step, StepResidue::First)?.glycosidic_nitrogen(),
        },
        AtomRef {
            residue: StepResidue::Second,
            name: base_kind_of(step, StepResidue::Second)?.glycosidic_nitrogen(),
        },
    ])
}
