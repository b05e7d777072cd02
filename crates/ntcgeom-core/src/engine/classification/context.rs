use super::classifier::{self, ClassifiedStep};
use crate::core::conformers::{StepMetrics, StepParameter};
use crate::core::io::resources::{
    self, Cluster, Confal, GoldenStep, NuAngles, ResourceKind, ResourceLoadError,
};
use crate::core::models::step::Step;
use crate::core::utils::geometry::angle_difference;
use crate::engine::config::{
    ClassificationConfig, ClassificationConfigBuilder, ClassificationLimits, ReshapeConfig,
};
use crate::engine::error::{ConfigurationError, NtcError};
use crate::engine::measure::pseudorotation;
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

const EMBEDDING_DIMENSIONS: usize = 2 * StepParameter::TORSIONS.len();

/// The four classification resources, as read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResources {
    pub golden_steps: Vec<GoldenStep>,
    pub clusters: Vec<Cluster>,
    pub confals: Vec<Confal>,
    pub nu_angles: Vec<NuAngles>,
}

impl ClassificationResources {
    /// Loads all four resource files from `directory`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResourceLoad`] naming the first file that is missing
    /// or cannot be parsed.
    #[instrument(skip_all, fields(path = %directory.display()))]
    pub fn load(directory: &Path) -> Result<Self, ConfigurationError> {
        let golden_steps =
            load_kind(directory, ResourceKind::GoldenSteps, resources::load_golden_steps)?;
        let clusters = load_kind(directory, ResourceKind::Clusters, resources::load_clusters)?;
        let confals = load_kind(directory, ResourceKind::Confals, resources::load_confals)?;
        let nu_angles = load_kind(directory, ResourceKind::NuAngles, resources::load_nu_angles)?;
        debug!(
            golden_steps = golden_steps.len(),
            clusters = clusters.len(),
            "Classification resources loaded"
        );
        Ok(Self {
            golden_steps,
            clusters,
            confals,
            nu_angles,
        })
    }
}

fn load_kind<T>(
    directory: &Path,
    kind: ResourceKind,
    loader: fn(&Path) -> Result<Vec<T>, ResourceLoadError>,
) -> Result<Vec<T>, ConfigurationError> {
    loader(&kind.path_in(directory))
        .map_err(|source| ConfigurationError::ResourceLoad { kind, source })
}

/// Reference data of one conformer that takes part in classification.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ConformerReference {
    pub cluster_number: u32,
    pub mean: StepMetrics,
    pub sigmas: StepMetrics,
    /// Pseudorotation phases of the first and second ribose.
    pub pseudorotation: [f64; 2],
}

/// Everything the classifier needs, built once and read-only afterwards.
///
/// The context holds no interior mutability, so a shared reference can be used from
/// any number of threads at once.
pub struct ClassificationContext {
    golden_steps: Vec<GoldenStep>,
    embedding: ImmutableKdTree<f64, EMBEDDING_DIMENSIONS>,
    references: HashMap<usize, ConformerReference>,
    limits: ClassificationLimits,
}

impl ClassificationContext {
    /// Loads the resources named by `config` and builds the context.
    pub fn load(config: &ClassificationConfig) -> Result<Self, ConfigurationError> {
        let resources = ClassificationResources::load(&config.parameters_path)?;
        Self::from_resources(resources, config.limits)
    }

    /// Builds a context from resources already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ResourceLoad`] with
    /// [`ResourceLoadError::Incomplete`] if a conformer that has golden steps or a
    /// cluster lacks an entry in another resource, and [`ConfigurationError::Invalid`]
    /// if the limits are inconsistent.
    pub fn from_resources(
        resources: ClassificationResources,
        limits: ClassificationLimits,
    ) -> Result<Self, ConfigurationError> {
        limits.validate()?;
        for (kind, empty) in [
            (ResourceKind::GoldenSteps, resources.golden_steps.is_empty()),
            (ResourceKind::Clusters, resources.clusters.is_empty()),
        ] {
            if empty {
                return Err(ConfigurationError::ResourceLoad {
                    kind,
                    source: ResourceLoadError::Empty {
                        path: kind.file_name().to_string(),
                    },
                });
            }
        }

        let required: BTreeSet<usize> = resources
            .golden_steps
            .iter()
            .map(|step| step.ntc_index)
            .chain(resources.clusters.iter().map(|cluster| cluster.ntc_index))
            .collect();
        let available = |kind: ResourceKind, indices: Vec<usize>| {
            resources::ensure_complete(Path::new(kind.file_name()), required.iter().copied(), &indices)
                .map_err(|source| ConfigurationError::ResourceLoad { kind, source })
        };
        available(
            ResourceKind::Clusters,
            resources.clusters.iter().map(|c| c.ntc_index).collect(),
        )?;
        available(
            ResourceKind::Confals,
            resources.confals.iter().map(|c| c.ntc_index).collect(),
        )?;
        available(
            ResourceKind::NuAngles,
            resources.nu_angles.iter().map(|n| n.ntc_index).collect(),
        )?;

        let sigmas: HashMap<usize, StepMetrics> = resources
            .confals
            .iter()
            .map(|confal| (confal.ntc_index, confal.sigmas))
            .collect();
        let phases: HashMap<usize, [f64; 2]> = resources
            .nu_angles
            .iter()
            .map(|nu| {
                (
                    nu.ntc_index,
                    [pseudorotation(&nu.first), pseudorotation(&nu.second)],
                )
            })
            .collect();

        let mut references = HashMap::with_capacity(resources.clusters.len());
        for cluster in &resources.clusters {
            let (Some(&cluster_sigmas), Some(&phase)) =
                (sigmas.get(&cluster.ntc_index), phases.get(&cluster.ntc_index))
            else {
                continue;
            };
            references.entry(cluster.ntc_index).or_insert(ConformerReference {
                cluster_number: cluster.number,
                mean: cluster.mean,
                sigmas: cluster_sigmas,
                pseudorotation: phase,
            });
        }

        let points: Vec<[f64; EMBEDDING_DIMENSIONS]> = resources
            .golden_steps
            .iter()
            .map(|step| embed(&step.metrics))
            .collect();
        let embedding = ImmutableKdTree::new_from_slice(&points);

        info!(
            golden_steps = resources.golden_steps.len(),
            conformers = references.len(),
            "Classification context ready"
        );
        Ok(Self {
            golden_steps: resources.golden_steps,
            embedding,
            references,
            limits,
        })
    }

    pub fn limits(&self) -> &ClassificationLimits {
        &self.limits
    }

    pub fn golden_step_count(&self) -> usize {
        self.golden_steps.len()
    }

    /// Number of conformers with a cluster in the loaded resources.
    pub fn conformer_count(&self) -> usize {
        self.references.len()
    }

    pub(super) fn golden_step(&self, index: usize) -> &GoldenStep {
        &self.golden_steps[index]
    }

    pub(super) fn reference(&self, ntc_index: usize) -> Option<&ConformerReference> {
        self.references.get(&ntc_index)
    }

    pub(super) fn references(&self) -> impl Iterator<Item = (usize, &ConformerReference)> {
        self.references.iter().map(|(&index, reference)| (index, reference))
    }

    /// Golden steps whose every torsion lies within the nearest-neighbor cutoff of
    /// `metrics`, closest first, as `(torsion distance, golden step index)`.
    ///
    /// At most `number_of_used_nearest_neighbors` are returned.
    pub(super) fn nearest_neighbors(&self, metrics: &StepMetrics) -> Vec<(f64, usize)> {
        let cutoff = self.limits.nearest_neighbor_torsions_cutoff;
        // Each torsion within the cutoff contributes at most one chord of this length.
        let chord = 2.0 * (cutoff.min(180.0).to_radians() / 2.0).sin();
        let radius = StepParameter::TORSIONS.len() as f64 * chord * chord + 1e-9;

        let query = embed(metrics);
        let mut neighbors: Vec<(f64, usize)> = self
            .embedding
            .within_unsorted::<SquaredEuclidean>(&query, radius)
            .into_iter()
            .map(|neighbor| neighbor.item as usize)
            .filter(|&index| {
                let golden = &self.golden_steps[index].metrics;
                StepParameter::TORSIONS.iter().all(|&parameter| {
                    angle_difference(metrics.get(parameter), golden.get(parameter)).abs() <= cutoff
                })
            })
            .map(|index| (metrics.torsion_distance(&self.golden_steps[index].metrics), index))
            .collect();

        neighbors.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        neighbors.truncate(self.limits.number_of_used_nearest_neighbors);
        neighbors
    }

    /// Classifies a step. See [`classifier::classify`].
    pub fn classify(&self, step: &Step, reshape: &ReshapeConfig) -> Result<ClassifiedStep, NtcError> {
        classifier::classify(self, step, reshape)
    }
}

/// Maps the nine torsions onto the unit circle so that Euclidean distance respects
/// angular periodicity.
fn embed(metrics: &StepMetrics) -> [f64; EMBEDDING_DIMENSIONS] {
    let mut point = [0.0; EMBEDDING_DIMENSIONS];
    for (i, torsion) in metrics.torsions().iter().enumerate() {
        let radians = torsion.to_radians();
        point[2 * i] = radians.cos();
        point[2 * i + 1] = radians.sin();
    }
    point
}

/// Whether a [`ContextSlot`] holds a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Uninitialized,
    Ready,
}

/// A process-wide holder for the classification context.
///
/// Initialization happens under the slot's lock, so concurrent first callers load the
/// resources once. Classification itself runs on a shared handle outside the lock.
#[derive(Default)]
pub struct ContextSlot {
    context: Mutex<Option<Arc<ClassificationContext>>>,
}

impl ContextSlot {
    pub const fn new() -> Self {
        Self {
            context: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<ClassificationContext>>> {
        self.context.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> ContextState {
        match *self.lock() {
            Some(_) => ContextState::Ready,
            None => ContextState::Uninitialized,
        }
    }

    /// Loads a new context from `config`, replacing any existing one.
    ///
    /// On failure the previous context, if any, is kept.
    pub fn initialize(&self, config: &ClassificationConfig) -> Result<(), ConfigurationError> {
        let mut slot = self.lock();
        let context = ClassificationContext::load(config)?;
        *slot = Some(Arc::new(context));
        Ok(())
    }

    /// Loads a context unless one is already present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingPath`] if no context is present and no path
    /// was given, or the loading error otherwise.
    pub fn initialize_if_needed(
        &self,
        parameters_path: Option<&Path>,
        limits: ClassificationLimits,
    ) -> Result<Arc<ClassificationContext>, ConfigurationError> {
        let mut slot = self.lock();
        if let Some(context) = slot.as_ref() {
            return Ok(Arc::clone(context));
        }

        let path = parameters_path.ok_or(ConfigurationError::MissingPath)?;
        let config = ClassificationConfigBuilder::new()
            .parameters_path(path.to_path_buf())
            .limits(limits)
            .build()?;
        let context = Arc::new(ClassificationContext::load(&config)?);
        *slot = Some(Arc::clone(&context));
        Ok(context)
    }

    /// Installs an already built context.
    pub fn set(&self, context: ClassificationContext) {
        *self.lock() = Some(Arc::new(context));
    }

    /// Drops the held context.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// A shared handle to the held context.
    pub fn context(&self) -> Result<Arc<ClassificationContext>, ConfigurationError> {
        self.lock().clone().ok_or(ConfigurationError::Uninitialized)
    }

    /// Classifies a step with the held context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Uninitialized`] if the slot is empty. A failed
    /// classification leaves the slot as it was.
    pub fn classify(&self, step: &Step, reshape: &ReshapeConfig) -> Result<ClassifiedStep, NtcError> {
        let context = self.context()?;
        context.classify(step, reshape)
    }
}
