//! Supported result metrics

// internal modules
use crate::error::{Error, Result};
use crate::snapshot::{NuclideValues, Snapshot};

// external crates
use serde::{Deserialize, Serialize};

/// Quantity read from every material snapshot
///
/// Each variant maps onto exactly one extraction from a [Snapshot], so an
/// unsupported metric is rejected when it is parsed rather than part way
/// through a batch.
///
/// ```rust
/// # use actools_activation::Metric;
/// # use std::str::FromStr;
/// assert_eq!(Metric::from_str("decay_heat").unwrap(), Metric::DecayHeat);
/// assert_eq!(Metric::Activity.units(), "Bq");
/// assert!(Metric::from_str("dose").is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Nuclide mass (g)
    Mass,
    /// Number of atoms
    Atoms,
    /// Decay heat (W)
    DecayHeat,
    /// Activity (Bq)
    Activity,
}

impl Metric {
    /// Every supported metric
    pub const ALL: [Metric; 4] = [
        Metric::Mass,
        Metric::Atoms,
        Metric::DecayHeat,
        Metric::Activity,
    ];

    /// Short name used for keys and file names
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Mass => "mass",
            Metric::Atoms => "atoms",
            Metric::DecayHeat => "decay_heat",
            Metric::Activity => "activity",
        }
    }

    /// Units of the values
    pub fn units(&self) -> &'static str {
        match self {
            Metric::Mass => "g",
            Metric::Atoms => "",
            Metric::DecayHeat => "W",
            Metric::Activity => "Bq",
        }
    }

    /// Values for every nuclide the snapshot reports for this metric
    pub fn extract<S: Snapshot + ?Sized>(&self, snapshot: &S) -> NuclideValues {
        match self {
            Metric::Mass => snapshot.masses(),
            Metric::Atoms => snapshot.atoms(),
            Metric::DecayHeat => snapshot.decay_heat(),
            Metric::Activity => snapshot.activity(),
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mass" => Ok(Metric::Mass),
            "atom" | "atoms" => Ok(Metric::Atoms),
            "decay_heat" | "heat" => Ok(Metric::DecayHeat),
            "activity" => Ok(Metric::Activity),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
