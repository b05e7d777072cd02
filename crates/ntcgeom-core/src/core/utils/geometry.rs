use nalgebra::{Matrix3, Point3, Rotation3, Unit, Vector3};

const DEGENERATE_EPSILON: f64 = 1e-10;

/// Normalizes an angle in degrees into the half-open interval (-180, 180].
///
/// Every torsion handled by the engine, measured or tabulated, uses this convention.
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Signed shortest angular difference `to - from` in degrees, in (-180, 180].
pub fn angle_difference(to: f64, from: f64) -> f64 {
    normalize_angle(to - from)
}

/// Computes the dihedral angle defined by four points, in degrees within (-180, 180].
///
/// A positive angle means clockwise rotation of `d` relative to `a` when looking
/// from `b` towards `c`.
///
/// # Return
///
/// Returns `None` when the angle is undefined: coincident central atoms or three
/// collinear consecutive atoms.
pub fn torsion_angle(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> Option<f64> {
    let b1 = b - a;
    let b2 = c - b;
    let b3 = d - c;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    let b2_norm = b2.norm();
    if b2_norm < DEGENERATE_EPSILON
        || n1.norm() < DEGENERATE_EPSILON
        || n2.norm() < DEGENERATE_EPSILON
    {
        return None;
    }

    let y = b2_norm * b1.dot(&n2);
    let x = n1.dot(&n2);
    Some(normalize_angle(y.atan2(x).to_degrees()))
}

pub fn bond_length(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Builds a rotation matrix from a unit axis and an angle in radians.
///
/// `R = I + sin(t) K + (1 - cos(t)) K^2`, with `K` the cross-product matrix of the axis.
pub fn rodrigues(axis: &Unit<Vector3<f64>>, angle: f64) -> Matrix3<f64> {
    let k = axis.cross_matrix();
    Matrix3::identity() + k * angle.sin() + (k * k) * (1.0 - angle.cos())
}

/// Rotation matrix turning the direction of `from` onto the direction of `to`.
///
/// Parallel vectors give the identity, antiparallel vectors a half turn about an
/// arbitrary perpendicular axis.
///
/// # Return
///
/// Returns `None` if either vector has zero length.
pub fn rotation_between(from: &Vector3<f64>, to: &Vector3<f64>) -> Option<Matrix3<f64>> {
    let from = from.try_normalize(DEGENERATE_EPSILON)?;
    let to = to.try_normalize(DEGENERATE_EPSILON)?;

    let cross = from.cross(&to);
    let sin = cross.norm();
    let cos = from.dot(&to);

    if sin < DEGENERATE_EPSILON {
        if cos > 0.0 {
            return Some(Matrix3::identity());
        }
        let helper = if from.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let axis = Unit::new_normalize(from.cross(&helper));
        return Some(rodrigues(&axis, std::f64::consts::PI));
    }

    let axis = Unit::new_unchecked(cross / sin);
    Some(rodrigues(&axis, sin.atan2(cos)))
}

/// Rotation about the axis `from -> to` by `angle_degrees`, right-handed.
///
/// # Return
///
/// Returns `None` if the two points coincide.
pub fn rotation_about_bond(
    from: &Point3<f64>,
    to: &Point3<f64>,
    angle_degrees: f64,
) -> Option<Rotation3<f64>> {
    let axis = Unit::try_new(to - from, DEGENERATE_EPSILON)?;
    Some(Rotation3::from_axis_angle(&axis, angle_degrees.to_radians()))
}

pub fn calculate_rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}
