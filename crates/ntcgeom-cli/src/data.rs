use crate::error::{CliError, Result};
use directories::ProjectDirs;
use ntcgeom::core::io::resources::ResourceKind;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Presence of one classification resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStatus {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub present: bool,
}

/// Locates the directory holding the NtC classification parameter files.
#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    /// Reports which of the four resource files exist in the data directory.
    pub fn resource_status(&self) -> Vec<ResourceStatus> {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| {
                let path = kind.path_in(&self.base_path);
                ResourceStatus {
                    kind,
                    present: path.is_file(),
                    path,
                }
            })
            .collect()
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        let config_path = Self::get_path_config_file()?;
        Self::write_path_override(&config_path, path)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn write_path_override(config_path: &Path, path: &Path) -> Result<()> {
        let value = path
            .to_str()
            .ok_or_else(|| CliError::Argument(format!("Path {:?} is not valid UTF-8", path)))?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, value)?;
        info!("Parameters path set to {:?}", path);
        Ok(())
    }

    fn read_path_override(config_path: &Path) -> Result<Option<PathBuf>> {
        if !config_path.exists() {
            return Ok(None);
        }
        let custom_path_str = fs::read_to_string(config_path)?.trim().to_string();
        if custom_path_str.is_empty() {
            warn!("Custom path config file is empty, falling back to default path.");
            return Ok(None);
        }
        Ok(Some(PathBuf::from(custom_path_str)))
    }

    fn determine_data_path() -> Result<PathBuf> {
        let custom = match Self::get_path_config_file() {
            Ok(config_path) => Self::read_path_override(&config_path)?,
            Err(_) => None,
        };
        custom.map_or_else(Self::get_default_data_path, Ok)
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("cz", "dnatco", "ntcgeom")
    }

    fn get_path_config_file() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join("path.conf"))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("parameters"))
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}
