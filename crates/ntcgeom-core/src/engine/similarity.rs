use super::config::ReshapeConfig;
use super::error::NtcError;
use super::measure::measure_step;
use super::reference::superpose_reference;
use crate::core::conformers::NtC;
use crate::core::models::step::Step;
use serde::Serialize;

/// How close a step is to one reference conformer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Similarity {
    pub ntc: &'static str,
    /// RMSD in Angstroms between the step and its reference for the conformer.
    pub rmsd: f64,
    /// Euclidean distance over the nine step torsions, in degrees.
    pub euclidean_distance: f64,
}

/// Scores a step against every conformer in `conformers`.
///
/// # Return
///
/// One record per conformer, in the order of `conformers`.
///
/// # Errors
///
/// Fails as a whole if the step cannot be measured or any single comparison fails;
/// no partial list is returned.
pub fn measure_similarities(
    step: &Step,
    conformers: &[NtC],
    config: &ReshapeConfig,
) -> Result<Vec<Similarity>, NtcError> {
    let measured = measure_step(step)?;
    conformers
        .iter()
        .map(|ntc| {
            let superposition = superpose_reference(step, ntc, config)?;
            Ok(Similarity {
                ntc: ntc.name,
                rmsd: superposition.rmsd,
                euclidean_distance: measured.torsion_distance(&ntc.metrics),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conformers;
    use crate::core::models::step::StepResidue;
    use crate::core::models::test_fixtures::build_step;
    use crate::engine::error::GeometryError;

    #[test]
    fn similarities_follow_the_order_of_the_conformer_set() {
        let step = build_step("AA00");
        let set = conformers::range("AA00", "AA04").unwrap();
        let similarities = measure_similarities(&step, set, &ReshapeConfig::default()).unwrap();

        let names: Vec<_> = similarities.iter().map(|s| s.ntc).collect();
        assert_eq!(names, ["AA00", "AA01", "AA02", "AA03", "AA04"]);
        assert!(similarities[0].rmsd < 1e-6);
        assert!(similarities[0].euclidean_distance < 1e-6);
        for other in &similarities[1..] {
            assert!(other.euclidean_distance > similarities[0].euclidean_distance);
        }
    }

    #[test]
    fn distant_conformers_score_worse() {
        let step = build_step("BB00");
        let set = [*conformers::lookup("BB00").unwrap(), *conformers::lookup("AA00").unwrap()];
        let similarities = measure_similarities(&step, &set, &ReshapeConfig::default()).unwrap();

        assert!(similarities[1].rmsd > similarities[0].rmsd);
        assert!(similarities[1].euclidean_distance > 30.0);
    }

    #[test]
    fn any_failure_fails_the_whole_call() {
        let mut step = build_step("AA00");
        let n9 = step.atom_id(StepResidue::Second, "N9").unwrap();
        step.structure_mut().remove_atom(n9);

        let set = conformers::range("AA00", "AA01").unwrap();
        let result = measure_similarities(&step, set, &ReshapeConfig::default());
        assert!(matches!(
            result,
            Err(NtcError::Geometry(GeometryError::MissingAtom { .. }))
        ));
    }
}
