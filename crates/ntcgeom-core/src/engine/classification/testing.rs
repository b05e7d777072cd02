//! Synthetic classification resources derived from the strand fixtures.

use super::context::{ClassificationContext, ClassificationResources};
use crate::core::conformers::{self, StepMetrics, StepParameter};
use crate::core::io::resources::{Cluster, Confal, GoldenStep, NuAngles};
use crate::core::models::step::StepResidue;
use crate::core::models::test_fixtures::build_step;
use crate::core::utils::geometry::normalize_angle;
use crate::engine::config::ClassificationLimits;
use crate::engine::measure::{measure_nu_angles, measure_step};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const OFFSETS: [f64; 8] = [-3.0, -2.0, -1.0, -0.5, 0.5, 1.0, 2.0, 3.0];

const SIGMAS: StepMetrics = StepMetrics::from_values([
    12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 0.5, 0.5, 12.0,
]);

fn perturbed(metrics: &StepMetrics, offset: f64) -> StepMetrics {
    let mut out = *metrics;
    for (j, parameter) in StepParameter::TORSIONS.into_iter().enumerate() {
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        out.set(parameter, normalize_angle(metrics.get(parameter) + sign * offset));
    }
    out
}

/// Resources in which each named conformer has eight golden steps scattered around
/// the measured geometry of its fixture step, a cluster centered on that geometry,
/// uniform sigmas and the fixture's own nu angles. Cluster numbers follow the order
/// of `names`, starting at 1.
pub(crate) fn resources_for(names: &[&str]) -> ClassificationResources {
    let mut resources = ClassificationResources {
        golden_steps: Vec::new(),
        clusters: Vec::new(),
        confals: Vec::new(),
        nu_angles: Vec::new(),
    };

    for (i, &name) in names.iter().enumerate() {
        let ntc_index = conformers::index_of(name).unwrap();
        let step = build_step(name);
        let metrics = measure_step(&step).unwrap();

        for (k, offset) in OFFSETS.into_iter().enumerate() {
            resources.golden_steps.push(GoldenStep {
                name: format!("{name}_{k}"),
                ntc_index,
                metrics: perturbed(&metrics, offset),
            });
        }
        resources.clusters.push(Cluster {
            number: i as u32 + 1,
            ntc_index,
            mean: metrics,
        });
        resources.confals.push(Confal {
            ntc_index,
            sigmas: SIGMAS,
        });
        resources.nu_angles.push(NuAngles {
            ntc_index,
            first: measure_nu_angles(&step, StepResidue::First).unwrap(),
            second: measure_nu_angles(&step, StepResidue::Second).unwrap(),
        });
    }
    resources
}

pub(crate) fn context_for(names: &[&str], limits: ClassificationLimits) -> ClassificationContext {
    ClassificationContext::from_resources(resources_for(names), limits).unwrap()
}

fn metric_columns(metrics: &StepMetrics) -> String {
    metrics
        .values()
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

const METRIC_HEADER: &str =
    "delta_1,epsilon_1,zeta_1,alpha_2,beta_2,gamma_2,delta_2,chi_1,chi_2,cc,nn,mu";

/// Writes `resources` as the four CSV files a context is loaded from.
pub(crate) fn write_resources(directory: &Path, resources: &ClassificationResources) {
    let name = |index: usize| conformers::all()[index].name;

    let mut golden = format!("step,ntc,{METRIC_HEADER}\n");
    for step in &resources.golden_steps {
        writeln!(golden, "{},{},{}", step.name, name(step.ntc_index), metric_columns(&step.metrics)).unwrap();
    }
    let mut clusters = format!("cluster,ntc,{METRIC_HEADER}\n");
    for cluster in &resources.clusters {
        writeln!(clusters, "{},{},{}", cluster.number, name(cluster.ntc_index), metric_columns(&cluster.mean)).unwrap();
    }
    let mut confals = format!("ntc,{METRIC_HEADER}\n");
    for confal in &resources.confals {
        writeln!(confals, "{},{}", name(confal.ntc_index), metric_columns(&confal.sigmas)).unwrap();
    }
    let mut nus = String::from("ntc,nu0_1,nu1_1,nu2_1,nu3_1,nu4_1,nu0_2,nu1_2,nu2_2,nu3_2,nu4_2\n");
    for nu in &resources.nu_angles {
        let values: Vec<String> = nu.first.iter().chain(&nu.second).map(|v| v.to_string()).collect();
        writeln!(nus, "{},{}", name(nu.ntc_index), values.join(",")).unwrap();
    }

    fs::write(directory.join("golden_steps.csv"), golden).unwrap();
    fs::write(directory.join("clusters.csv"), clusters).unwrap();
    fs::write(directory.join("confals.csv"), confals).unwrap();
    fs::write(directory.join("nu_angles.csv"), nus).unwrap();
}
