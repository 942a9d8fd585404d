// external crates
use serde::{Deserialize, Serialize};

/// Material to be irradiated
///
/// Only the temperature is checked here. Everything else is handed to the
/// solver untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Material {
    /// Name used in log messages and errors
    pub name: String,
    /// Temperature (K), must be set before depletion
    pub temperature: Option<f64>,
    /// Density (g/cm3)
    pub density: f64,
    /// Volume (cm3)
    pub volume: f64,
    /// Nuclide names and atom fractions
    #[serde(default)]
    pub nuclides: Vec<(String, f64)>,
}

impl Material {
    /// New material with no temperature and no nuclides
    pub fn new(name: &str, density: f64, volume: f64) -> Self {
        Self {
            name: name.to_string(),
            density,
            volume,
            ..Default::default()
        }
    }

    /// Set the temperature (K)
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Add a nuclide by atom fraction
    pub fn add_nuclide(&mut self, name: &str, fraction: f64) {
        self.nuclides.push((name.to_string(), fraction));
    }
}
