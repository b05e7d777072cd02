use nalgebra::{Matrix3, Point3, Rotation3, Vector3};

/// A rigid-body transformation mapping one point set onto another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    pub rotation: Rotation3<f64>,
    pub translation: Vector3<f64>,
}

impl RigidTransform {
    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
            translation: Vector3::zeros(),
        }
    }

    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        self.rotation * point + self.translation
    }
}

/// Computes the least-squares rigid transformation taking `from_points` onto `to_points`
/// (Kabsch algorithm).
///
/// Point pairs are matched by index. A reflection in the optimal orthogonal matrix is
/// corrected so that the result is always a proper rotation.
///
/// # Return
///
/// Returns `None` if the sets are empty or of different lengths, or if the SVD fails.
pub fn calculate_transformation(
    from_points: &[Point3<f64>],
    to_points: &[Point3<f64>],
) -> Option<RigidTransform> {
    if from_points.is_empty() || from_points.len() != to_points.len() {
        return None;
    }

    let from_centroid = centroid(from_points);
    let to_centroid = centroid(to_points);

    let h = from_points
        .iter()
        .zip(to_points.iter())
        .fold(Matrix3::zeros(), |acc, (f, t)| {
            acc + (t - to_centroid) * (f - from_centroid).transpose()
        });

    let svd = h.svd(true, true);
    let u = svd.u?;
    let v_t = svd.v_t?;

    let mut correction = Matrix3::identity();
    if (u * v_t).determinant() < 0.0 {
        correction[(2, 2)] = -1.0;
    }

    let rotation = Rotation3::from_matrix_unchecked(u * correction * v_t);
    let translation = to_centroid.coords - rotation * from_centroid.coords;

    Some(RigidTransform {
        rotation,
        translation,
    })
}

fn centroid(points: &[Point3<f64>]) -> Point3<f64> {
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Point3::from(sum / points.len() as f64)
}
