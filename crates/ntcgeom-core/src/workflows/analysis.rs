use super::steps::{AltConfStep, next_steps, previous_steps};
use crate::core::conformers::{self, NtC};
use crate::core::models::step::Step;
use crate::core::models::structure::Structure;
use crate::engine::classification::{ClassificationContext, ClassifiedStep};
use crate::engine::config::ReshapeConfig;
use crate::engine::connectivity::{self, Connectivity, Neighbor};
use crate::engine::error::NtcError;
use crate::engine::reference::{self, Superposition};
use crate::engine::reshape::apply_ntc;
use crate::engine::similarity::{self, Similarity};
use serde::Serialize;
use tracing::{info, instrument};

/// Connectivities against one neighboring step, labeled with the alternate
/// conformation that step was expanded over.
#[derive(Debug, Clone, Serialize)]
pub struct AltConfConnectivities {
    pub altconf: Option<char>,
    pub connectivities: Vec<Connectivity>,
}

/// Connectivities of a step to all of its neighbors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Connectivities {
    pub previous: Vec<AltConfConnectivities>,
    pub next: Vec<AltConfConnectivities>,
}

fn resolve(name: &str) -> Result<&'static NtC, NtcError> {
    conformers::lookup(name).ok_or_else(|| NtcError::UnknownConformer(name.to_string()))
}

/// Reshapes `step` in place to the conformer called `name`.
///
/// # Errors
///
/// Returns [`NtcError::UnknownConformer`] for a name missing from the table, or the
/// geometry error of a failed reshape. On failure the step is left untouched.
#[instrument(skip_all, fields(ntc = name, step = %step))]
pub fn apply_conformer(step: &mut Step, name: &str, config: &ReshapeConfig) -> Result<(), NtcError> {
    let ntc = resolve(name)?;
    apply_ntc(step, ntc, config)?;
    info!("Conformer applied");
    Ok(())
}

/// Applies `name` to the step and writes the new coordinates back into `structure`.
///
/// # Return
///
/// The number of atoms of `structure` that were moved.
pub fn apply_conformer_to_structure(
    structure: &mut Structure,
    step: &AltConfStep,
    name: &str,
    config: &ReshapeConfig,
) -> Result<usize, NtcError> {
    let mut reshaped = step.step.clone();
    apply_conformer(&mut reshaped, name, config)?;
    Ok(structure.update_from_step(&reshaped))
}

/// Compares `step` with every conformer of the table, in table order.
#[instrument(skip_all, fields(step = %step))]
pub fn measure_similarities(step: &Step, config: &ReshapeConfig) -> Result<Vec<Similarity>, NtcError> {
    let similarities = similarity::measure_similarities(step, conformers::all(), config)?;
    if let Some(best) = similarities
        .iter()
        .min_by(|a, b| a.rmsd.total_cmp(&b.rmsd))
    {
        info!(best = best.ntc, rmsd = best.rmsd, "Similarities measured");
    }
    Ok(similarities)
}

/// Measures how every conformer of each neighboring step joins `step` reshaped to
/// `target`.
///
/// # Arguments
///
/// * `target` - Name of the conformer `step` is reshaped to.
/// * `step` - The step of interest, as extracted from `structure`.
/// * `structure` - The full structure the neighbors are taken from.
/// * `config` - Settings of the kinematic model used for reshaping.
///
/// # Return
///
/// One entry per neighboring step and alternate conformation. A side with no
/// neighboring nucleotide step yields an empty list.
///
/// # Errors
///
/// Returns [`NtcError::UnknownConformer`] for an unknown `target`, and the first
/// geometry or numeric failure of any comparison.
#[instrument(skip_all, fields(ntc = target, step = %step.step))]
pub fn measure_connectivity(
    target: &str,
    step: &AltConfStep,
    structure: &Structure,
    config: &ReshapeConfig,
) -> Result<Connectivities, NtcError> {
    let ntc = resolve(target)?;
    let candidates = conformers::all();

    let measure = |neighbor_step: &AltConfStep, side: Neighbor, altconf: Option<char>| {
        connectivity::measure_connectivities(&step.step, ntc, &neighbor_step.step, side, candidates, config)
            .map(|connectivities| AltConfConnectivities {
                altconf,
                connectivities,
            })
    };

    let previous = previous_steps(structure, step)
        .iter()
        .map(|previous| measure(previous, Neighbor::Previous, previous.altconf1))
        .collect::<Result<Vec<_>, _>>()?;
    let next = next_steps(structure, step)
        .iter()
        .map(|next| measure(next, Neighbor::Next, next.altconf2))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        previous = previous.len(),
        next = next.len(),
        "Connectivities measured"
    );
    Ok(Connectivities { previous, next })
}

/// Reference of `step` for the conformer called `name`, superposed onto `step`.
pub fn superpose_reference(step: &Step, name: &str, config: &ReshapeConfig) -> Result<Superposition, NtcError> {
    reference::superpose_reference(step, resolve(name)?, config)
}

/// Classifies `step` against a loaded classification context.
#[instrument(skip_all, fields(step = %step))]
pub fn classify(
    step: &Step,
    context: &ClassificationContext,
    config: &ReshapeConfig,
) -> Result<ClassifiedStep, NtcError> {
    let classified = context.classify(step, config)?;
    info!(
        ntc = classified.ntc_name(),
        closest = classified.closest_ntc,
        confal = classified.confal,
        "Step classified"
    );
    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conformers::StepParameter;
    use crate::core::models::step::StepResidue;
    use crate::core::models::test_fixtures::{build_step, build_strand};
    use crate::core::utils::geometry::angle_difference;
    use crate::engine::classification::testing::context_for;
    use crate::engine::config::ClassificationLimits;
    use crate::engine::measure::measure_step;
    use crate::workflows::steps::extract_step;

    #[test]
    fn unknown_conformer_names_are_rejected() {
        let mut step = build_step("AA00");
        let config = ReshapeConfig::default();

        assert!(matches!(
            apply_conformer(&mut step, "XX99", &config),
            Err(NtcError::UnknownConformer(name)) if name == "XX99"
        ));
        assert!(matches!(
            superpose_reference(&step, "", &config),
            Err(NtcError::UnknownConformer(_))
        ));
    }

    #[test]
    fn failed_apply_leaves_the_step_untouched() {
        let mut step = build_step("AA00");
        let n9 = step.atom_id(StepResidue::Second, "N9").unwrap();
        step.structure_mut().remove_atom(n9);
        let before = step.clone();

        let result = apply_conformer(&mut step, "BB00", &ReshapeConfig::default());

        assert!(matches!(result, Err(NtcError::Geometry(_))));
        for id in step.atom_ids() {
            assert_eq!(
                step.structure().atom(id).unwrap().position,
                before.structure().atom(id).unwrap().position
            );
        }
    }

    #[test]
    fn applied_conformer_is_written_back_to_the_structure() {
        let (mut structure, residues) = build_strand(&["A", "G", "C"], &["AA00", "AA00"]);
        let step = extract_step(&structure, residues[0], None, None).unwrap();
        let config = ReshapeConfig::default();

        let moved = apply_conformer_to_structure(&mut structure, &step, "BB00", &config).unwrap();
        assert!(moved > 0);

        let updated = extract_step(&structure, residues[0], None, None).unwrap();
        let measured = measure_step(&updated.step).unwrap();
        let target = conformers::lookup("BB00").unwrap();
        for parameter in StepParameter::TORSIONS {
            let diff = angle_difference(measured.get(parameter), target.metrics.get(parameter));
            assert!(diff.abs() < 1e-6, "{parameter}: {diff}");
        }
    }

    #[test]
    fn similarities_cover_the_whole_table() {
        let step = build_step("BB00");
        let similarities = measure_similarities(&step, &ReshapeConfig::default()).unwrap();

        assert_eq!(similarities.len(), conformers::all().len());
        let best = similarities
            .iter()
            .min_by(|a, b| a.euclidean_distance.total_cmp(&b.euclidean_distance))
            .unwrap();
        assert_eq!(best.ntc, "BB00");
    }

    #[test]
    fn connectivity_at_chain_ends_has_one_side() {
        let (structure, residues) = build_strand(&["A", "G", "C"], &["AA00", "AA00"]);
        let config = ReshapeConfig::default();

        let first = extract_step(&structure, residues[0], None, None).unwrap();
        let result = measure_connectivity("AA00", &first, &structure, &config).unwrap();
        assert!(result.previous.is_empty());
        assert_eq!(result.next.len(), 1);
        assert_eq!(result.next[0].altconf, None);
        assert_eq!(result.next[0].connectivities.len(), conformers::all().len());

        let last = extract_step(&structure, residues[1], None, None).unwrap();
        let result = measure_connectivity("AA00", &last, &structure, &config).unwrap();
        assert!(result.next.is_empty());
        assert_eq!(result.previous.len(), 1);

        let aa00 = &result.previous[0].connectivities[0];
        assert_eq!(aa00.ntc, "AA00");
        assert!(aa00.c5_distance < 0.1 && aa00.o3_distance < 0.1, "{aa00:?}");
    }

    #[test]
    fn connectivity_rejects_an_unknown_target() {
        let (structure, residues) = build_strand(&["A", "G"], &["AA00"]);
        let step = extract_step(&structure, residues[0], None, None).unwrap();
        assert!(matches!(
            measure_connectivity("NANT", &step, &structure, &ReshapeConfig::default()),
            Err(NtcError::UnknownConformer(_))
        ));
    }

    #[test]
    fn classify_uses_the_given_context() {
        let context = context_for(&["AA00", "BB00"], ClassificationLimits::default());
        let classified = classify(&build_step("BB00"), &context, &ReshapeConfig::default()).unwrap();

        assert_eq!(classified.ntc_name(), "BB00");
        assert_eq!(classified.class_name(), "BB");
    }
}
