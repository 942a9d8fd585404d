//! Seam to the external depletion solver

// standard library
use std::path::{Path, PathBuf};

// internal modules
use crate::chain::Chain;
use crate::config::CROSS_SECTIONS_VAR;
use crate::error::{Error, Result};
use crate::material::Material;
use crate::request::EnergyGroups;
use crate::snapshot::Snapshot;
use crate::time::TimeUnit;

/// External material depletion/activation solver
///
/// Cross section collapse and time integration are entirely the solver's
/// business. An implementation only needs to turn one [DepletionInput] into a
/// list of snapshots, one for the initial state and one at the end of every
/// time step.
///
/// The [Activator](crate::Activator) calls into a solver strictly one request
/// at a time, so implementations are free to hold process-wide state.
///
/// ```rust
/// # use actools_activation::{DepletionInput, DepletionSolver, MaterialSnapshot, Result, SolverContext};
/// /// A solver where nothing ever happens
/// struct Inert;
///
/// impl DepletionSolver for Inert {
///     type Snapshot = MaterialSnapshot;
///
///     fn deplete(&mut self, _: &SolverContext, input: &DepletionInput) -> Result<Vec<MaterialSnapshot>> {
///         Ok(vec![MaterialSnapshot::default(); input.timesteps.len() + 1])
///     }
/// }
/// ```
pub trait DepletionSolver {
    /// Material state the solver reports at each step
    type Snapshot: Snapshot;

    /// Parse a chain file
    ///
    /// Defaults to the JSON format of [Chain::from_json()]. Solvers with their
    /// own chain format should override this.
    fn load_chain(&mut self, path: &Path) -> Result<Chain> {
        Chain::from_json(path)
    }

    /// Whether [deplete()](DepletionSolver::deplete) needs a cross section library
    ///
    /// If true, the batch fails up front when no library is configured.
    fn requires_cross_sections(&self) -> bool {
        false
    }

    /// Deplete a single material over every time step
    ///
    /// Any failure should be wrapped with [Error::solver()].
    fn deplete(
        &mut self,
        context: &SolverContext,
        input: &DepletionInput,
    ) -> Result<Vec<Self::Snapshot>>;
}

/// Settings shared by every request in a batch
#[derive(Debug)]
pub struct SolverContext<'a> {
    /// Scratch directory for solver files, removed after the batch
    pub workdir: &'a Path,
    /// Chain loaded for the batch
    pub chain: &'a Chain,
    /// Depth for chain reduction, `None` for the full chain
    pub reduce_chain_level: Option<u32>,
    /// Unit of the time step durations
    pub unit: TimeUnit,
    pub(crate) cross_sections: Option<PathBuf>,
}

impl SolverContext<'_> {
    /// Cross section library, for solvers that need one
    ///
    /// Always set when the solver reports
    /// [requires_cross_sections()](DepletionSolver::requires_cross_sections).
    pub fn cross_sections(&self) -> Result<&Path> {
        self.cross_sections
            .as_deref()
            .ok_or(Error::MissingCrossSections {
                env_var: CROSS_SECTIONS_VAR,
            })
    }
}

/// Everything the solver needs for one material
#[derive(Debug)]
pub struct DepletionInput<'a> {
    /// Material to deplete
    pub material: &'a Material,
    /// Multigroup flux normalised to sum to 1
    pub flux: &'a [f64],
    /// Energy group structure of the flux
    pub energy: &'a EnergyGroups,
    /// Source rate for each time step
    pub source_rates: &'a [f64],
    /// Duration of each time step
    pub timesteps: &'a [f64],
    /// Reaction names to include
    pub reactions: &'a [String],
    /// ENDF MT numbers matching `reactions`
    pub reaction_mts: &'a [u32],
}
