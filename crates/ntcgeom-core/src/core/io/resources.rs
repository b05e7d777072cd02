use crate::core::conformers::{self, StepMetrics};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The four data files the classifier is initialized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    GoldenSteps,
    Clusters,
    Confals,
    NuAngles,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::GoldenSteps,
        ResourceKind::Clusters,
        ResourceKind::Confals,
        ResourceKind::NuAngles,
    ];

    /// File name of the resource inside the parameters directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ResourceKind::GoldenSteps => "golden_steps.csv",
            ResourceKind::Clusters => "clusters.csv",
            ResourceKind::Confals => "confals.csv",
            ResourceKind::NuAngles => "nu_angles.csv",
        }
    }

    pub fn path_in(self, directory: &Path) -> PathBuf {
        directory.join(self.file_name())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ResourceKind::GoldenSteps => "golden steps",
            ResourceKind::Clusters => "clusters",
            ResourceKind::Confals => "confals",
            ResourceKind::NuAngles => "Nu angles",
        };
        f.write_str(description)
    }
}

#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Unknown NtC '{name}' in '{path}'")]
    UnknownConformer { path: String, name: String },
    #[error("No records in '{path}'")]
    Empty { path: String },
    #[error("'{path}' has no entry for NtC '{name}'")]
    Incomplete { path: String, name: String },
}

/// A curated reference step with known NtC assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenStep {
    pub name: String,
    /// Index of the assigned conformer in the NtC table.
    pub ntc_index: usize,
    pub metrics: StepMetrics,
}

/// Mean parameters of one conformer cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub number: u32,
    pub ntc_index: usize,
    pub mean: StepMetrics,
}

/// Per-parameter standard deviations of one conformer, used for the confal score.
#[derive(Debug, Clone, PartialEq)]
pub struct Confal {
    pub ntc_index: usize,
    pub sigmas: StepMetrics,
}

/// Reference ribose torsions nu0..nu4 of both residues of one conformer.
#[derive(Debug, Clone, PartialEq)]
pub struct NuAngles {
    pub ntc_index: usize,
    pub first: [f64; 5],
    pub second: [f64; 5],
}

#[derive(Debug, Deserialize)]
struct GoldenStepRecord {
    step: String,
    ntc: String,
    delta_1: f64,
    epsilon_1: f64,
    zeta_1: f64,
    alpha_2: f64,
    beta_2: f64,
    gamma_2: f64,
    delta_2: f64,
    chi_1: f64,
    chi_2: f64,
    cc: f64,
    nn: f64,
    mu: f64,
}

#[derive(Debug, Deserialize)]
struct ClusterRecord {
    cluster: u32,
    ntc: String,
    delta_1: f64,
    epsilon_1: f64,
    zeta_1: f64,
    alpha_2: f64,
    beta_2: f64,
    gamma_2: f64,
    delta_2: f64,
    chi_1: f64,
    chi_2: f64,
    cc: f64,
    nn: f64,
    mu: f64,
}

#[derive(Debug, Deserialize)]
struct ConfalRecord {
    ntc: String,
    delta_1: f64,
    epsilon_1: f64,
    zeta_1: f64,
    alpha_2: f64,
    beta_2: f64,
    gamma_2: f64,
    delta_2: f64,
    chi_1: f64,
    chi_2: f64,
    cc: f64,
    nn: f64,
    mu: f64,
}

#[derive(Debug, Deserialize)]
struct NuAnglesRecord {
    ntc: String,
    nu0_1: f64,
    nu1_1: f64,
    nu2_1: f64,
    nu3_1: f64,
    nu4_1: f64,
    nu0_2: f64,
    nu1_2: f64,
    nu2_2: f64,
    nu3_2: f64,
    nu4_2: f64,
}

pub fn load_golden_steps(path: &Path) -> Result<Vec<GoldenStep>, ResourceLoadError> {
    read_records::<GoldenStepRecord, _>(path, |record| {
        Ok(GoldenStep {
            ntc_index: conformer_index(path, &record.ntc)?,
            name: record.step,
            metrics: StepMetrics::from_values([
                record.delta_1,
                record.epsilon_1,
                record.zeta_1,
                record.alpha_2,
                record.beta_2,
                record.gamma_2,
                record.delta_2,
                record.chi_1,
                record.chi_2,
                record.cc,
                record.nn,
                record.mu,
            ]),
        })
    })
}

pub fn load_clusters(path: &Path) -> Result<Vec<Cluster>, ResourceLoadError> {
    read_records::<ClusterRecord, _>(path, |record| {
        Ok(Cluster {
            number: record.cluster,
            ntc_index: conformer_index(path, &record.ntc)?,
            mean: StepMetrics::from_values([
                record.delta_1,
                record.epsilon_1,
                record.zeta_1,
                record.alpha_2,
                record.beta_2,
                record.gamma_2,
                record.delta_2,
                record.chi_1,
                record.chi_2,
                record.cc,
                record.nn,
                record.mu,
            ]),
        })
    })
}

pub fn load_confals(path: &Path) -> Result<Vec<Confal>, ResourceLoadError> {
    read_records::<ConfalRecord, _>(path, |record| {
        Ok(Confal {
            ntc_index: conformer_index(path, &record.ntc)?,
            sigmas: StepMetrics::from_values([
                record.delta_1,
                record.epsilon_1,
                record.zeta_1,
                record.alpha_2,
                record.beta_2,
                record.gamma_2,
                record.delta_2,
                record.chi_1,
                record.chi_2,
                record.cc,
                record.nn,
                record.mu,
            ]),
        })
    })
}

pub fn load_nu_angles(path: &Path) -> Result<Vec<NuAngles>, ResourceLoadError> {
    read_records::<NuAnglesRecord, _>(path, |record| {
        Ok(NuAngles {
            ntc_index: conformer_index(path, &record.ntc)?,
            first: [
                record.nu0_1,
                record.nu1_1,
                record.nu2_1,
                record.nu3_1,
                record.nu4_1,
            ],
            second: [
                record.nu0_2,
                record.nu1_2,
                record.nu2_2,
                record.nu3_2,
                record.nu4_2,
            ],
        })
    })
}

/// Fails with [`ResourceLoadError::Incomplete`] unless every NtC in `required` has an
/// entry among `available`.
pub fn ensure_complete(
    path: &Path,
    required: impl IntoIterator<Item = usize>,
    available: &[usize],
) -> Result<(), ResourceLoadError> {
    for index in required {
        if !available.contains(&index) {
            return Err(ResourceLoadError::Incomplete {
                path: display(path),
                name: conformers::all()[index].name.to_string(),
            });
        }
    }
    Ok(())
}

fn read_records<R, T>(
    path: &Path,
    mut convert: impl FnMut(R) -> Result<T, ResourceLoadError>,
) -> Result<Vec<T>, ResourceLoadError>
where
    R: for<'de> Deserialize<'de>,
{
    if !path.is_file() {
        return Err(ResourceLoadError::Io {
            path: display(path),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ResourceLoadError::Csv {
            path: display(path),
            source: e,
        })?;

    let mut items = Vec::new();
    for result in reader.deserialize::<R>() {
        let record = result.map_err(|e| ResourceLoadError::Csv {
            path: display(path),
            source: e,
        })?;
        items.push(convert(record)?);
    }

    if items.is_empty() {
        return Err(ResourceLoadError::Empty { path: display(path) });
    }
    Ok(items)
}

fn conformer_index(path: &Path, name: &str) -> Result<usize, ResourceLoadError> {
    conformers::index_of(name).ok_or_else(|| ResourceLoadError::UnknownConformer {
        path: display(path),
        name: name.to_string(),
    })
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
