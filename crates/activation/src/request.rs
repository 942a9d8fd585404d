//! Inputs for a single activation run

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// internal modules
use crate::error::{RequestError, Result};
use crate::material::Material;

// external crates
use actools_utils::{Error as SliceError, SliceExt};
use serde::{Deserialize, Serialize};

/// Well known group structures and their number of groups
///
/// The boundaries themselves belong to the solver, only the group count is
/// needed to check a flux spectrum against one of these.
const GROUP_STRUCTURES: [(&str, usize); 20] = [
    ("CASMO-2", 2),
    ("CASMO-4", 4),
    ("CASMO-8", 8),
    ("CASMO-16", 16),
    ("CASMO-25", 25),
    ("CASMO-40", 40),
    ("CASMO-70", 70),
    ("VITAMIN-J-42", 42),
    ("VITAMIN-J-175", 175),
    ("SCALE-44", 44),
    ("SCALE-252", 252),
    ("MPACT-51", 51),
    ("MPACT-60", 60),
    ("MPACT-69", 69),
    ("XMAS-172", 172),
    ("TRIPOLI-315", 315),
    ("SHEM-361", 361),
    ("CCFE-709", 709),
    ("UKAEA-1102", 1102),
    ("ECCO-1968", 1968),
];

/// Number of groups in a named group structure
///
/// ```rust
/// # use actools_activation::group_count;
/// assert_eq!(group_count("CCFE-709"), Some(709));
/// assert_eq!(group_count("ccfe-709"), Some(709));
/// assert_eq!(group_count("MADE-UP-3"), None);
/// ```
pub fn group_count(name: &str) -> Option<usize> {
    GROUP_STRUCTURES
        .iter()
        .find(|(structure, _)| structure.eq_ignore_ascii_case(name))
        .map(|(_, groups)| *groups)
}

/// Energy group structure for a multigroup flux
///
/// Either explicit boundaries (eV), low to high energy, or the name of a
/// predefined structure known to the solver.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EnergyGroups {
    /// Explicit group boundaries (eV)
    Boundaries(Vec<f64>),
    /// Predefined structure name e.g. "CCFE-709"
    Named(String),
}

impl EnergyGroups {
    /// Number of groups a flux spectrum must have to match
    pub fn groups(&self) -> std::result::Result<usize, RequestError> {
        match self {
            EnergyGroups::Boundaries(bounds) => Ok(bounds.len().saturating_sub(1)),
            EnergyGroups::Named(name) => {
                group_count(name).ok_or_else(|| RequestError::UnknownGroupStructure {
                    name: name.clone(),
                })
            }
        }
    }
}

/// Everything needed to activate one material
///
/// A request is not modified once built. The [Activator](crate::Activator)
/// checks every request with [ActivationRequest::validate()] before any solver
/// work is done.
///
/// ```rust
/// # use actools_activation::{ActivationRequest, EnergyGroups, Material};
/// let material = Material::new("Os", 22.59, 1.0).with_temperature(293.6);
///
/// let request = ActivationRequest::new(
///     material,
///     vec![1.0e10, 3.0e10],
///     EnergyGroups::Boundaries(vec![0.0, 1.0e6, 14.1e6]),
///     vec![1.0e12, 0.0],
///     vec![300.0, 3600.0],
/// );
///
/// assert!(request.validate().is_ok());
/// assert_eq!(request.normalised_flux().unwrap(), vec![0.25, 0.75]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivationRequest {
    /// Material to irradiate
    material: Material,
    /// Multigroup flux, one value per energy group
    #[serde(rename = "multigroup_flux")]
    flux: Vec<f64>,
    /// Energy group boundaries or a named structure
    energy: EnergyGroups,
    /// Source rate for each time step
    #[serde(rename = "source_rate")]
    source_rates: Vec<f64>,
    /// Duration of each time step
    timesteps: Vec<f64>,
}

impl ActivationRequest {
    /// Build a new request
    pub fn new(
        material: Material,
        flux: Vec<f64>,
        energy: EnergyGroups,
        source_rates: Vec<f64>,
        timesteps: Vec<f64>,
    ) -> Self {
        Self {
            material,
            flux,
            energy,
            source_rates,
            timesteps,
        }
    }

    /// Material to irradiate
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Multigroup flux as given
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Energy group structure
    pub fn energy(&self) -> &EnergyGroups {
        &self.energy
    }

    /// Source rate for each time step
    pub fn source_rates(&self) -> &[f64] {
        &self.source_rates
    }

    /// Duration of each time step
    pub fn timesteps(&self) -> &[f64] {
        &self.timesteps
    }

    /// Check the request is well formed
    ///
    /// Explicit energy boundaries must be strictly ascending with exactly one
    /// more value than the flux. Named structures must be known and match the
    /// flux length. The flux must be non-negative with a non-zero sum, and
    /// there must be one positive time step per source rate.
    pub fn validate(&self) -> std::result::Result<(), RequestError> {
        // energy groups first, the flux length only means anything against them
        if let EnergyGroups::Boundaries(bounds) = &self.energy {
            bounds.check_ascending().map_err(|e| match e {
                SliceError::SliceNotAscending { position, .. } => {
                    RequestError::NotAscending { position }
                }
                _ => RequestError::UndefinedBoundaries,
            })?;
        }

        let groups = self.energy.groups()?;
        if self.flux.len() != groups {
            return Err(match &self.energy {
                EnergyGroups::Boundaries(bounds) => RequestError::LengthMismatch {
                    flux: self.flux.len(),
                    boundaries: bounds.len(),
                },
                EnergyGroups::Named(name) => RequestError::GroupCountMismatch {
                    name: name.clone(),
                    flux: self.flux.len(),
                    groups,
                },
            });
        }

        if let Some(position) = self.flux.iter().position(|v| *v < 0.0) {
            return Err(RequestError::NegativeFlux { position });
        }

        self.normalised_flux()?;

        if self.timesteps.is_empty() {
            return Err(RequestError::EmptyTimesteps);
        }

        if let Some(position) = self
            .timesteps
            .iter()
            .position(|t| !t.is_finite() || *t <= 0.0)
        {
            return Err(RequestError::NonPositiveTimestep { position });
        }

        if self.source_rates.len() != self.timesteps.len() {
            return Err(RequestError::SourceRateMismatch {
                source_rates: self.source_rates.len(),
                timesteps: self.timesteps.len(),
            });
        }

        Ok(())
    }

    /// Flux spectrum scaled to sum to 1
    ///
    /// Only the shape of the spectrum matters to the solver, the magnitude is
    /// carried by the source rates.
    pub fn normalised_flux(&self) -> std::result::Result<Vec<f64>, RequestError> {
        self.flux.try_normalise().map_err(|e| match e {
            SliceError::SliceSumIsZero => RequestError::ZeroFlux,
            _ => RequestError::UndefinedFlux,
        })
    }
}

/// Read a batch of requests from a JSON file
///
/// ```json
/// [
///     {
///         "material": { "name": "Os", "temperature": 293.6, "density": 22.59, "volume": 1.0 },
///         "multigroup_flux": [1.0e10, 3.0e10],
///         "energy": "CASMO-2",
///         "source_rate": [1.0e12, 0.0],
///         "timesteps": [300.0, 3600.0]
///     }
/// ]
/// ```
pub fn read_requests_json<P: AsRef<Path>>(path: P) -> Result<Vec<ActivationRequest>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}
