use super::{alt_label, load_structure, select_steps};
use crate::cli::ClassifyArgs;
use crate::config::AppConfig;
use crate::data::DataManager;
use crate::error::Result;
use ntcgeom::core::conformers::StepParameter;
use ntcgeom::engine::classification::{ClassificationContext, ClassifiedStep};
use ntcgeom::engine::error::NtcError;
use ntcgeom::workflows::analysis;
use std::fmt::Write;
use tracing::info;

pub fn run(args: ClassifyArgs, config: &AppConfig) -> Result<()> {
    let data_manager = DataManager::new()?;
    let classification = config.classification(args.params.as_deref(), &data_manager)?;
    let context = ClassificationContext::load(&classification).map_err(NtcError::from)?;
    info!(
        "Classification context ready with {} golden steps",
        context.golden_step_count()
    );

    let structure = load_structure(&args.step.input)?;
    let reshape = config.reshape();
    for step in select_steps(&structure, &args.step)? {
        let classified = analysis::classify(&step.step, &context, &reshape)?;
        println!("{} [{}]", step.step, alt_label(&step));
        print!("{}", format_classification(&classified));
    }
    Ok(())
}

fn format_classification(classified: &ClassifiedStep) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  NtC {} (class {}), confal {:.1}",
        classified.ntc_name(),
        classified.class_name(),
        classified.confal
    );
    if let Some(cluster) = classified.cluster_number {
        let _ = writeln!(out, "  cluster {}", cluster);
    }
    let _ = writeln!(
        out,
        "  closest {} at RMSD {:.3}, {} nearest neighbor(s)",
        classified.closest_ntc, classified.rmsd_to_closest, classified.nearest_neighbors
    );
    for violation in &classified.violations {
        let _ = writeln!(out, "  violation: {}", violation);
    }
    let _ = writeln!(out, "  {:<10} {:>9} {:>9}", "parameter", "value", "diff");
    for parameter in StepParameter::ALL {
        let _ = writeln!(
            out,
            "  {:<10} {:>9.2} {:>9.2}",
            parameter.name(),
            classified.metrics.get(parameter),
            classified.differences.get(parameter)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntcgeom::core::conformers::{self, StepMetrics};
    use ntcgeom::engine::classification::Violation;

    fn classified(assigned: Option<&'static str>, violations: Vec<Violation>) -> ClassifiedStep {
        let metrics = conformers::lookup("BB00").unwrap().metrics;
        ClassifiedStep {
            assigned_ntc: assigned,
            closest_ntc: "BB00",
            cluster_number: assigned.map(|_| 2),
            confal: if assigned.is_some() { 87.5 } else { 0.0 },
            rmsd_to_closest: 0.25,
            nearest_neighbors: 9,
            metrics,
            differences: StepMetrics::default(),
            violations,
        }
    }

    #[test]
    fn assigned_steps_report_cluster_and_confal() {
        let text = format_classification(&classified(Some("BB00"), Vec::new()));
        assert!(text.starts_with("  NtC BB00 (class BB), confal 87.5"));
        assert!(text.contains("cluster 2"));
        assert!(!text.contains("violation"));
    }

    #[test]
    fn unassigned_steps_list_their_violations() {
        let text = format_classification(&classified(None, vec![Violation::TotalDistanceTooHigh]));
        assert!(text.starts_with("  NtC NANT (class NAN), confal 0.0"));
        assert!(text.contains("violation: total distance to the cluster mean too high"));
        assert!(text.contains("closest BB00"));
    }
}
