use super::context::{ClassificationContext, ConformerReference};
use crate::core::conformers::{self, NtC, StepMetrics, StepParameter};
use crate::core::models::step::{Step, StepResidue};
use crate::core::utils::geometry::{angle_difference, normalize_angle};
use crate::engine::config::ReshapeConfig;
use crate::engine::error::NtcError;
use crate::engine::measure::{measure_nu_angles, measure_step, pseudorotation};
use crate::engine::reference::superpose_reference;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Name reported for a step that could not be assigned to any conformer.
pub const UNASSIGNED_NTC: &str = "NANT";
/// Class reported for a step that could not be assigned to any conformer.
pub const UNASSIGNED_CLASS: &str = "NAN";

/// A check that prevented a step from being assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Violation {
    NotEnoughNearestNeighbors,
    TooFewClusterVotes,
    AverageNeighborsTooFar,
    TotalDistanceTooHigh,
    PseudorotationTooDifferent,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Violation::NotEnoughNearestNeighbors => "not enough nearest neighbors",
            Violation::TooFewClusterVotes => "too few votes for the winning cluster",
            Violation::AverageNeighborsTooFar => "torsions too far from the average of the neighbors",
            Violation::TotalDistanceTooHigh => "total distance to the cluster mean too high",
            Violation::PseudorotationTooDifferent => "ribose pseudorotation too different",
        };
        f.write_str(message)
    }
}

/// The outcome of classifying one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedStep {
    /// The assigned conformer, if every check passed.
    pub assigned_ntc: Option<&'static str>,
    /// The conformer whose cluster mean is closest in torsion space.
    pub closest_ntc: &'static str,
    /// Cluster number of the assigned conformer.
    pub cluster_number: Option<u32>,
    /// Confidence of the assignment, 0 to 100. Zero when unassigned.
    pub confal: f64,
    /// RMSD in Angstroms between the step and its reference for the closest conformer.
    pub rmsd_to_closest: f64,
    pub nearest_neighbors: usize,
    /// The measured step parameters.
    pub metrics: StepMetrics,
    /// Measured minus reference values of the closest conformer.
    pub differences: StepMetrics,
    pub violations: Vec<Violation>,
}

impl ClassifiedStep {
    pub fn ntc_name(&self) -> &'static str {
        self.assigned_ntc.unwrap_or(UNASSIGNED_NTC)
    }

    pub fn class_name(&self) -> &'static str {
        self.assigned_ntc
            .and_then(conformers::lookup)
            .map(NtC::class)
            .unwrap_or(UNASSIGNED_CLASS)
    }
}

/// Classifies a step against the golden steps of `context`.
///
/// Golden steps whose torsions all lie within the nearest-neighbor cutoff vote for
/// their conformer with weight `1 / (d^2 + 1)`, `d` being the torsion distance. The
/// winning conformer is assigned only if enough neighbors were found, it collected
/// enough of the vote, the step is close to both the mean of the winner's neighbors
/// and the winner's cluster mean, and both riboses have a compatible pucker.
///
/// The closest conformer, the RMSD to it and the deviations from it are reported
/// whether or not the step was assigned.
///
/// # Errors
///
/// Returns [`NtcError::Geometry`] if the step cannot be measured or reshaped and
/// [`NtcError::Numeric`] if the superposition onto the closest conformer fails.
pub fn classify(
    context: &ClassificationContext,
    step: &Step,
    reshape: &ReshapeConfig,
) -> Result<ClassifiedStep, NtcError> {
    let limits = context.limits();
    let metrics = measure_step(step)?;
    let phases = [
        pseudorotation(&measure_nu_angles(step, StepResidue::First)?),
        pseudorotation(&measure_nu_angles(step, StepResidue::Second)?),
    ];

    let neighbors = context.nearest_neighbors(&metrics);
    let mut violations = Vec::new();
    let mut winner = None;

    if neighbors.len() < limits.minimum_nearest_neighbors {
        violations.push(Violation::NotEnoughNearestNeighbors);
    } else if let Some((ntc_index, fraction)) = vote(context, &neighbors) {
        let reference = context.reference(ntc_index).ok_or_else(|| {
            NtcError::NotFound(format!("cluster of NtC {}", conformers::all()[ntc_index]))
        })?;

        if fraction < limits.minimum_cluster_votes {
            violations.push(Violation::TooFewClusterVotes);
        }
        let average = neighbor_average(context, &neighbors, ntc_index);
        if StepParameter::TORSIONS.iter().any(|&p| {
            angle_difference(metrics.get(p), average.get(p)).abs() > limits.average_neighbors_torsion_cutoff
        }) {
            violations.push(Violation::AverageNeighborsTooFar);
        }
        if metrics.torsion_distance(&reference.mean) > limits.total_distance_cutoff {
            violations.push(Violation::TotalDistanceTooHigh);
        }
        if phases
            .iter()
            .zip(reference.pseudorotation)
            .any(|(&measured, expected)| {
                angle_difference(measured, expected).abs() > limits.pseudorotation_cutoff
            })
        {
            violations.push(Violation::PseudorotationTooDifferent);
        }
        winner = Some((ntc_index, reference));
    }

    let assigned = winner.filter(|_| violations.is_empty());

    let closest_index = context
        .references()
        .map(|(index, reference)| (index, metrics.torsion_distance(&reference.mean)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(index, _)| index)
        .ok_or_else(|| NtcError::NotFound("conformer clusters".to_string()))?;
    let closest = &conformers::all()[closest_index];
    let rmsd_to_closest = superpose_reference(step, closest, reshape)?.rmsd;

    let result = ClassifiedStep {
        assigned_ntc: assigned.map(|(index, _)| conformers::all()[index].name),
        closest_ntc: closest.name,
        cluster_number: assigned.map(|(_, reference)| reference.cluster_number),
        confal: assigned.map_or(0.0, |(_, reference)| confal(&metrics, reference)),
        rmsd_to_closest,
        nearest_neighbors: neighbors.len(),
        metrics,
        differences: metrics.differences(&closest.metrics),
        violations,
    };
    debug!(
        step = %step,
        ntc = result.ntc_name(),
        closest = result.closest_ntc,
        "Step classified"
    );
    Ok(result)
}

/// Weighted vote of the neighbors. Returns the winning conformer and its share of the
/// total weight; ties go to the conformer listed first in the NtC table.
fn vote(context: &ClassificationContext, neighbors: &[(f64, usize)]) -> Option<(usize, f64)> {
    let mut votes: BTreeMap<usize, f64> = BTreeMap::new();
    for &(distance, index) in neighbors {
        let ntc_index = context.golden_step(index).ntc_index;
        *votes.entry(ntc_index).or_default() += 1.0 / (distance * distance + 1.0);
    }
    let total: f64 = votes.values().sum();

    let mut best: Option<(usize, f64)> = None;
    for (&ntc_index, &weight) in &votes {
        if best.is_none_or(|(_, best_weight)| weight > best_weight) {
            best = Some((ntc_index, weight));
        }
    }
    best.map(|(ntc_index, weight)| (ntc_index, weight / total))
}

/// Circular mean of each torsion over the neighbors assigned to `ntc_index`.
fn neighbor_average(
    context: &ClassificationContext,
    neighbors: &[(f64, usize)],
    ntc_index: usize,
) -> StepMetrics {
    let members: Vec<&StepMetrics> = neighbors
        .iter()
        .map(|&(_, index)| context.golden_step(index))
        .filter(|golden| golden.ntc_index == ntc_index)
        .map(|golden| &golden.metrics)
        .collect();

    let mut average = StepMetrics::default();
    for parameter in StepParameter::TORSIONS {
        let (sin, cos) = members.iter().fold((0.0, 0.0), |(sin, cos), metrics| {
            let radians = metrics.get(parameter).to_radians();
            (sin + radians.sin(), cos + radians.cos())
        });
        average.set(parameter, normalize_angle(f64::atan2(sin, cos).to_degrees()));
    }
    average
}

/// Geometric mean over all parameters with a positive sigma of
/// `exp(-d^2 / (2 sigma^2))`, scaled to 0..100.
fn confal(metrics: &StepMetrics, reference: &ConformerReference) -> f64 {
    let differences = metrics.differences(&reference.mean);
    let (log_sum, count) = StepParameter::ALL
        .iter()
        .filter_map(|&parameter| {
            let sigma = reference.sigmas.get(parameter);
            (sigma.is_finite() && sigma > 0.0).then(|| {
                let d = differences.get(parameter);
                -(d * d) / (2.0 * sigma * sigma)
            })
        })
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        return 0.0;
    }
    100.0 * (log_sum / count as f64).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::test_fixtures::build_step;
    use crate::engine::classification::testing::{context_for, resources_for};
    use crate::engine::config::ClassificationLimits;

    fn classify_built(context: &ClassificationContext, conformer: &str) -> ClassifiedStep {
        classify(context, &build_step(conformer), &ReshapeConfig::default()).unwrap()
    }

    #[test]
    fn step_is_assigned_to_its_own_conformer() {
        let context = context_for(&["AA00", "BB00"], ClassificationLimits::default());
        let result = classify_built(&context, "AA00");

        assert_eq!(result.assigned_ntc, Some("AA00"));
        assert_eq!(result.ntc_name(), "AA00");
        assert_eq!(result.class_name(), "AA");
        assert_eq!(result.closest_ntc, "AA00");
        assert_eq!(result.nearest_neighbors, 8);
        assert_eq!(result.cluster_number, Some(1));
        assert!(result.violations.is_empty());
        assert!((result.confal - 100.0).abs() < 1e-9);
        assert!(result.rmsd_to_closest < 1e-6);
        for parameter in StepParameter::TORSIONS {
            assert!(result.differences.get(parameter).abs() < 1e-6, "{parameter}");
        }
    }

    #[test]
    fn b_form_step_is_assigned_to_bb00() {
        let context = context_for(&["AA00", "BB00"], ClassificationLimits::default());
        let result = classify_built(&context, "BB00");

        assert_eq!(result.assigned_ntc, Some("BB00"));
        assert_eq!(result.class_name(), "BB");
        assert_eq!(result.cluster_number, Some(2));
    }

    #[test]
    fn step_without_neighbors_is_unassigned_but_has_a_closest_conformer() {
        let context = context_for(&["AA00", "BB00"], ClassificationLimits::default());
        let result = classify_built(&context, "OP03");

        assert_eq!(result.assigned_ntc, None);
        assert_eq!(result.ntc_name(), UNASSIGNED_NTC);
        assert_eq!(result.class_name(), UNASSIGNED_CLASS);
        assert_eq!(result.nearest_neighbors, 0);
        assert_eq!(result.violations, vec![Violation::NotEnoughNearestNeighbors]);
        assert_eq!(result.confal, 0.0);
        assert_eq!(result.cluster_number, None);
        assert!(["AA00", "BB00"].contains(&result.closest_ntc));
        assert!(result.rmsd_to_closest > 0.0);
    }

    #[test]
    fn minimum_neighbor_count_is_configurable() {
        let limits = ClassificationLimits {
            minimum_nearest_neighbors: 9,
            ..Default::default()
        };
        let context = context_for(&["AA00", "BB00"], limits);
        let result = classify_built(&context, "AA00");

        assert_eq!(result.assigned_ntc, None);
        assert_eq!(result.nearest_neighbors, 8);
        assert_eq!(result.closest_ntc, "AA00");
    }

    #[test]
    fn distance_from_cluster_mean_is_checked() {
        let mut resources = resources_for(&["AA00", "BB00"]);
        let aa00 = conformers::index_of("AA00").unwrap();
        for cluster in resources.clusters.iter_mut().filter(|c| c.ntc_index == aa00) {
            for parameter in StepParameter::TORSIONS {
                let shifted = cluster.mean.get(parameter) + 5.0;
                cluster.mean.set(parameter, normalize_angle(shifted));
            }
        }
        let limits = ClassificationLimits {
            total_distance_cutoff: 10.0,
            ..Default::default()
        };
        let context = ClassificationContext::from_resources(resources, limits).unwrap();
        let result = classify_built(&context, "AA00");

        assert_eq!(result.assigned_ntc, None);
        assert_eq!(result.violations, vec![Violation::TotalDistanceTooHigh]);
    }

    #[test]
    fn incompatible_ribose_pucker_is_rejected() {
        let mut resources = resources_for(&["AA00", "BB00"]);
        let aa00 = conformers::index_of("AA00").unwrap();
        for nu in resources.nu_angles.iter_mut().filter(|n| n.ntc_index == aa00) {
            nu.first = nu.first.map(|angle| -angle);
        }
        let context =
            ClassificationContext::from_resources(resources, ClassificationLimits::default()).unwrap();
        let result = classify_built(&context, "AA00");

        assert_eq!(result.assigned_ntc, None);
        assert_eq!(result.violations, vec![Violation::PseudorotationTooDifferent]);
    }

    #[test]
    fn classification_is_deterministic() {
        let context = context_for(&["AA00", "BB00"], ClassificationLimits::default());
        let step = build_step("AA00");
        let first = classify(&context, &step, &ReshapeConfig::default()).unwrap();
        let second = classify(&context, &step, &ReshapeConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn incomplete_step_fails_the_call_only() {
        let context = context_for(&["AA00", "BB00"], ClassificationLimits::default());
        let mut step = build_step("AA00");
        let p = step.atom_id(StepResidue::Second, "P").unwrap();
        step.structure_mut().remove_atom(p);

        assert!(matches!(
            classify(&context, &step, &ReshapeConfig::default()),
            Err(NtcError::Geometry(_))
        ));
        assert_eq!(classify_built(&context, "AA00").assigned_ntc, Some("AA00"));
    }

    #[test]
    fn violations_render_as_messages() {
        assert_eq!(
            Violation::NotEnoughNearestNeighbors.to_string(),
            "not enough nearest neighbors"
        );
    }
}
