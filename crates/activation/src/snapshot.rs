//! Material state at a single point in simulated time

// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// internal modules
use crate::error::Result;

// external crates
use serde::{Deserialize, Serialize};

/// Values keyed by nuclide name
pub type NuclideValues = BTreeMap<String, f64>;

/// Isotopic composition of a material at one point in time
///
/// This is the seam to whatever a depletion solver hands back for each step.
/// Every method reports all nuclides the snapshot knows about for a metric,
/// and nuclides with no entry are treated as zero by the result reader.
pub trait Snapshot {
    /// Mass by nuclide (g)
    fn masses(&self) -> NuclideValues;

    /// Number of atoms by nuclide
    fn atoms(&self) -> NuclideValues;

    /// Decay heat by nuclide (W)
    fn decay_heat(&self) -> NuclideValues;

    /// Activity by nuclide (Bq)
    fn activity(&self) -> NuclideValues;
}

/// Per-nuclide quantities
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NuclideState {
    /// Nuclide name e.g. "Co60"
    pub name: String,
    /// Number of atoms
    pub atoms: f64,
    /// Mass (g)
    #[serde(rename = "grams")]
    pub mass: f64,
    /// Activity (Bq)
    #[serde(default)]
    pub activity: f64,
    /// Decay heat (W)
    #[serde(default)]
    pub heat: f64,
}

/// Plain snapshot holding a list of nuclide states
///
/// Useful for solvers that can dump their results to file, and for anything
/// that needs a snapshot without a solver behind it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MaterialSnapshot {
    /// Every nuclide present in the material
    pub nuclides: Vec<NuclideState>,
}

impl MaterialSnapshot {
    /// Collect a single quantity into a map, summing repeated names
    fn collect<F: Fn(&NuclideState) -> f64>(&self, value: F) -> NuclideValues {
        let mut values = NuclideValues::new();
        for nuclide in &self.nuclides {
            *values.entry(nuclide.name.clone()).or_insert(0.0) += value(nuclide);
        }
        values
    }
}

impl Snapshot for MaterialSnapshot {
    fn masses(&self) -> NuclideValues {
        self.collect(|n| n.mass)
    }

    fn atoms(&self) -> NuclideValues {
        self.collect(|n| n.atoms)
    }

    fn decay_heat(&self) -> NuclideValues {
        self.collect(|n| n.heat)
    }

    fn activity(&self) -> NuclideValues {
        self.collect(|n| n.activity)
    }
}

/// Read a list of snapshots from a JSON file
///
/// The file is a JSON array with one [MaterialSnapshot] per step, including
/// the initial state.
pub fn read_snapshots_json<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialSnapshot>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}
