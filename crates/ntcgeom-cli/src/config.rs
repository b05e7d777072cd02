use crate::data::DataManager;
use crate::error::{CliError, Result};
use ntcgeom::engine::config::{
    ClassificationConfig, ClassificationConfigBuilder, ClassificationLimits, ReshapeConfig,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialClassificationConfig {
    parameters_path: Option<PathBuf>,
    average_neighbors_torsion_cutoff: Option<f64>,
    nearest_neighbor_torsions_cutoff: Option<f64>,
    total_distance_cutoff: Option<f64>,
    pseudorotation_cutoff: Option<f64>,
    minimum_cluster_votes: Option<f64>,
    minimum_nearest_neighbors: Option<usize>,
    number_of_used_nearest_neighbors: Option<usize>,
}

impl PartialClassificationConfig {
    fn limits(&self) -> ClassificationLimits {
        let defaults = ClassificationLimits::default();
        ClassificationLimits {
            average_neighbors_torsion_cutoff: self
                .average_neighbors_torsion_cutoff
                .unwrap_or(defaults.average_neighbors_torsion_cutoff),
            nearest_neighbor_torsions_cutoff: self
                .nearest_neighbor_torsions_cutoff
                .unwrap_or(defaults.nearest_neighbor_torsions_cutoff),
            total_distance_cutoff: self
                .total_distance_cutoff
                .unwrap_or(defaults.total_distance_cutoff),
            pseudorotation_cutoff: self
                .pseudorotation_cutoff
                .unwrap_or(defaults.pseudorotation_cutoff),
            minimum_cluster_votes: self
                .minimum_cluster_votes
                .unwrap_or(defaults.minimum_cluster_votes),
            minimum_nearest_neighbors: self
                .minimum_nearest_neighbors
                .unwrap_or(defaults.minimum_nearest_neighbors),
            number_of_used_nearest_neighbors: self
                .number_of_used_nearest_neighbors
                .unwrap_or(defaults.number_of_used_nearest_neighbors),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialReshapeConfig {
    min_contact_distance: Option<f64>,
    max_contact_distance: Option<f64>,
    bond_tolerance: Option<f64>,
}

impl From<PartialReshapeConfig> for ReshapeConfig {
    fn from(p: PartialReshapeConfig) -> Self {
        let defaults = ReshapeConfig::default();
        Self {
            min_contact_distance: p.min_contact_distance.unwrap_or(defaults.min_contact_distance),
            max_contact_distance: p.max_contact_distance.unwrap_or(defaults.max_contact_distance),
            bond_tolerance: p.bond_tolerance.unwrap_or(defaults.bond_tolerance),
        }
    }
}

/// Settings read from the optional configuration file.
///
/// ```toml
/// [classification]
/// parameters-path = "/data/ntc"
/// total-distance-cutoff = 60.0
///
/// [reshape]
/// max-contact-distance = 4.0
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    classification: Option<PartialClassificationConfig>,
    reshape: Option<PartialReshapeConfig>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` if given, otherwise uses the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    pub fn reshape(&self) -> ReshapeConfig {
        self.reshape.clone().unwrap_or_default().into()
    }

    pub fn limits(&self) -> ClassificationLimits {
        self.classification.clone().unwrap_or_default().limits()
    }

    /// Builds the classification settings.
    ///
    /// The parameters directory is taken from `override_path`, then from the
    /// configuration file, then from the managed data directory.
    pub fn classification(
        &self,
        override_path: Option<&Path>,
        data_manager: &DataManager,
    ) -> Result<ClassificationConfig> {
        let parameters_path = override_path
            .map(Path::to_path_buf)
            .or_else(|| {
                self.classification
                    .as_ref()
                    .and_then(|c| c.parameters_path.clone())
            })
            .unwrap_or_else(|| data_manager.get_data_path().to_path_buf());
        debug!("Using NtC parameters from {:?}", &parameters_path);

        ClassificationConfigBuilder::new()
            .parameters_path(parameters_path)
            .limits(self.limits())
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
