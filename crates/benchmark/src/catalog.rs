//! Discover benchmark experiments from the extracted archive

// standard library
use std::collections::BTreeMap;
use std::path::Path;

// internal modules
use crate::error::{Error, Result};

// external crates
use actools_utils::StringExt;
use itertools::Itertools;
use log::{debug, trace};

/// Marker in the file names of per-experiment flux files
const FLUX_MARKER: &str = "fluxes";

/// Suffix stripped from flux file names to get the experiment name
const FLUX_SUFFIX: &str = "_fluxes";

/// Experiments available for each element or material
///
/// Built fresh from the directory tree every time, nothing is cached.
///
/// ```rust
/// # use actools_benchmark::ExperimentCatalog;
/// let catalog: ExperimentCatalog = [
///     ("Os", vec!["2000exp_5min"]),
///     ("NiCr", vec!["1996exp_7hour", "1996exp_5min", "2000exp_5min"]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(catalog.elements().collect::<Vec<_>>(), vec!["NiCr", "Os"]);
/// assert_eq!(catalog.experiments("Os").unwrap(), &["2000exp_5min"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentCatalog {
    experiments: BTreeMap<String, Vec<String>>,
}

impl ExperimentCatalog {
    /// Scan the extracted benchmark tree
    ///
    /// Every folder directly under `root` with no `_` in its name is treated
    /// as an element or material. Any file in it with `fluxes` in the name
    /// marks an experiment, named by the file name without `_fluxes`.
    ///
    /// Folders without any flux files are left out.
    pub fn scan<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::MissingSourceDir {
                path: root.to_path_buf(),
            });
        }

        let mut experiments = BTreeMap::new();

        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }

            let element = entry.file_name().to_string_lossy().to_string();
            if element.contains('_') {
                trace!("Skipping {element}, not an element folder");
                continue;
            }

            let names = flux_experiments(&entry.path())?;
            if names.is_empty() {
                debug!("No flux files found for {element}");
                continue;
            }

            debug!("Found {} experiments for {element}", names.len());
            experiments.insert(element, names);
        }

        Ok(Self { experiments })
    }

    /// Element names in alphabetical order
    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.experiments.keys().map(String::as_str)
    }

    /// Experiments for a single element
    pub fn experiments(&self, element: &str) -> Option<&[String]> {
        self.experiments.get(element).map(Vec::as_slice)
    }

    /// Every element and its experiments, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.experiments
            .iter()
            .map(|(element, names)| (element.as_str(), names.as_slice()))
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// True if no elements were found
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

impl<E, X> FromIterator<(E, Vec<X>)> for ExperimentCatalog
where
    E: Into<String>,
    X: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (E, Vec<X>)>>(iter: I) -> Self {
        let experiments = iter
            .into_iter()
            .map(|(element, names)| {
                (
                    element.into(),
                    names.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { experiments }
    }
}

/// Experiment names from the flux files in a single element folder
fn flux_experiments(folder: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let name = entry?.file_name().to_string_lossy().to_string();
        if name.contains(FLUX_MARKER) {
            names.push(name.without(FLUX_SUFFIX));
        }
    }

    Ok(names.into_iter().sorted().dedup().collect())
}
