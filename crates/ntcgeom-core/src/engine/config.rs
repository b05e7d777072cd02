use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Tolerances of the classifier. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationLimits {
    /// Maximum deviation of any torsion from the mean of the voting neighbors.
    pub average_neighbors_torsion_cutoff: f64,
    /// Maximum deviation of any torsion between the step and a golden step for the
    /// latter to count as a neighbor.
    pub nearest_neighbor_torsions_cutoff: f64,
    /// Maximum Euclidean torsion distance from the assigned cluster mean.
    pub total_distance_cutoff: f64,
    /// Maximum deviation of either ribose pseudorotation phase from the cluster's.
    pub pseudorotation_cutoff: f64,
    /// Minimum weighted vote fraction of the winning cluster.
    pub minimum_cluster_votes: f64,
    pub minimum_nearest_neighbors: usize,
    pub number_of_used_nearest_neighbors: usize,
}

impl Default for ClassificationLimits {
    fn default() -> Self {
        Self {
            average_neighbors_torsion_cutoff: 28.0,
            nearest_neighbor_torsions_cutoff: 28.0,
            total_distance_cutoff: 60.0,
            pseudorotation_cutoff: 72.0,
            minimum_cluster_votes: 0.001111,
            minimum_nearest_neighbors: 7,
            number_of_used_nearest_neighbors: 11,
        }
    }
}

impl ClassificationLimits {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let angles = [
            ("average_neighbors_torsion_cutoff", self.average_neighbors_torsion_cutoff),
            ("nearest_neighbor_torsions_cutoff", self.nearest_neighbor_torsions_cutoff),
            ("total_distance_cutoff", self.total_distance_cutoff),
            ("pseudorotation_cutoff", self.pseudorotation_cutoff),
        ];
        for (name, value) in angles {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("{value} is not a positive angle"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.minimum_cluster_votes) {
            return Err(ConfigError::InvalidParameter {
                name: "minimum_cluster_votes",
                reason: format!("{} is not a fraction", self.minimum_cluster_votes),
            });
        }
        if self.minimum_nearest_neighbors == 0
            || self.number_of_used_nearest_neighbors < self.minimum_nearest_neighbors
        {
            return Err(ConfigError::InvalidParameter {
                name: "number_of_used_nearest_neighbors",
                reason: format!(
                    "{} used neighbors cannot satisfy a minimum of {}",
                    self.number_of_used_nearest_neighbors, self.minimum_nearest_neighbors
                ),
            });
        }
        Ok(())
    }
}

/// Settings of the kinematic model built when reshaping a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReshapeConfig {
    /// Lower bound of the contact search window in Angstroms.
    pub min_contact_distance: f64,
    /// Upper bound of the contact search window in Angstroms.
    pub max_contact_distance: f64,
    /// Slack added to the sum of covalent radii when deciding whether a contact is a bond.
    pub bond_tolerance: f64,
}

impl Default for ReshapeConfig {
    fn default() -> Self {
        Self {
            min_contact_distance: 0.0,
            max_contact_distance: 4.0,
            bond_tolerance: 0.45,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationConfig {
    /// Directory holding the four classification resource files.
    pub parameters_path: PathBuf,
    pub limits: ClassificationLimits,
}

#[derive(Default)]
pub struct ClassificationConfigBuilder {
    parameters_path: Option<PathBuf>,
    limits: Option<ClassificationLimits>,
}

impl ClassificationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameters_path(mut self, path: PathBuf) -> Self {
        self.parameters_path = Some(path);
        self
    }
    pub fn limits(mut self, limits: ClassificationLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn build(self) -> Result<ClassificationConfig, ConfigError> {
        let parameters_path = self
            .parameters_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::MissingParameter("parameters_path"))?;
        let limits = self.limits.unwrap_or_default();
        limits.validate()?;

        Ok(ClassificationConfig {
            parameters_path,
            limits,
        })
    }
}
