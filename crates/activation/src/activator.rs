//! Batch activation runs

// standard library
use std::path::{Path, PathBuf};

// internal modules
use crate::chain::Chain;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::metric::Metric;
use crate::nuclide::Nuclide;
use crate::reaction::reaction_mt;
use crate::request::ActivationRequest;
use crate::series::{read_output, ActivationResults};
use crate::solver::{DepletionInput, DepletionSolver, SolverContext};
use crate::time::TimeUnit;

// external crates
use log::{debug, info, warn};

/// Runs a batch of [ActivationRequest]s through a [DepletionSolver]
///
/// Every request in the batch shares one chain load and one scratch directory.
/// Requests are run one after another in input order, and results come back
/// in the same order.
///
/// Before any solver work:
/// - every material must have a temperature
/// - every request must pass [ActivationRequest::validate()]
/// - a chain file must be found, either given explicitly or in the [Config]
///
/// When no nuclides or reactions are given, everything in the chain is used.
///
/// ```rust, no_run
/// # use actools_activation::{Activator, Config, Metric, TimeUnit};
/// # use actools_activation::{read_requests_json, DepletionSolver};
/// # fn run<S: DepletionSolver>(solver: &mut S) -> actools_activation::Result<()> {
/// let requests = read_requests_json("requests.json")?;
///
/// let activator = Activator::new(requests)
///     .with_config(Config::from_env())
///     .with_unit(TimeUnit::Days)
///     .with_nuclides(&["Co60", "Mn54"]);
///
/// for results in activator.activate(solver, &[Metric::Mass, Metric::Activity])? {
///     results.write_json("results.json")?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Activator {
    requests: Vec<ActivationRequest>,
    config: Config,
    unit: TimeUnit,
    reduce_chain_level: Option<u32>,
    chain_file: Option<PathBuf>,
    cross_sections: Option<PathBuf>,
    nuclides: Option<Vec<String>>,
    reactions: Option<Vec<String>>,
}

/// Everything resolved once per batch
#[derive(Debug)]
struct Batch {
    chain: Chain,
    nuclides: Vec<String>,
    reactions: Vec<String>,
    reaction_mts: Vec<u32>,
    cross_sections: Option<PathBuf>,
}

impl Activator {
    /// New activator for a batch of requests
    ///
    /// Defaults to time steps in seconds and a chain reduction depth of 5.
    pub fn new(requests: Vec<ActivationRequest>) -> Self {
        Self {
            requests,
            config: Config::default(),
            unit: TimeUnit::Seconds,
            reduce_chain_level: Some(5),
            chain_file: None,
            cross_sections: None,
            nuclides: None,
            reactions: None,
        }
    }

    /// Fallback configuration for data paths
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Unit of every time step duration
    pub fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Chain reduction depth, `None` to use the full chain
    pub fn with_reduce_chain_level(mut self, level: Option<u32>) -> Self {
        self.reduce_chain_level = level;
        self
    }

    /// Chain file, overriding the configuration
    pub fn with_chain_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.chain_file = Some(path.into());
        self
    }

    /// Cross section library, overriding the configuration
    pub fn with_cross_sections<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cross_sections = Some(path.into());
        self
    }

    /// Nuclides to report, an empty list means every chain nuclide
    pub fn with_nuclides<T: AsRef<str>>(mut self, nuclides: &[T]) -> Self {
        self.nuclides = Some(nuclides.iter().map(|n| n.as_ref().to_string()).collect());
        self
    }

    /// Reactions to include, defaults to every chain reaction
    pub fn with_reactions<T: AsRef<str>>(mut self, reactions: &[T]) -> Self {
        self.reactions = Some(reactions.iter().map(|r| r.as_ref().to_string()).collect());
        self
    }

    /// Requests in the batch
    pub fn requests(&self) -> &[ActivationRequest] {
        &self.requests
    }

    /// Run every request, stopping at the first failure
    ///
    /// Returns one [ActivationResults] per request in input order. An empty
    /// list of metrics defaults to mass only.
    ///
    /// The scratch directory is removed whether or not the batch succeeds.
    pub fn activate<S: DepletionSolver>(
        &self,
        solver: &mut S,
        metrics: &[Metric],
    ) -> Result<Vec<ActivationResults>> {
        let batch = self.prepare(solver)?;
        let workdir = scratch_dir()?;

        let mut results = Vec::with_capacity(self.requests.len());
        for (index, request) in self.requests.iter().enumerate() {
            results.push(self.run(solver, &batch, workdir.path(), index, request, metrics)?);
        }

        workdir.close()?;
        Ok(results)
    }

    /// Run every request, keeping solver failures to their own request
    ///
    /// Problems with the batch as a whole, such as a missing chain file or a
    /// malformed request, still fail immediately. Only errors raised while
    /// running an individual request are isolated, and the rest of the batch
    /// carries on.
    pub fn activate_isolated<S: DepletionSolver>(
        &self,
        solver: &mut S,
        metrics: &[Metric],
    ) -> Result<Vec<Result<ActivationResults>>> {
        let batch = self.prepare(solver)?;
        let workdir = scratch_dir()?;

        let mut results = Vec::with_capacity(self.requests.len());
        for (index, request) in self.requests.iter().enumerate() {
            let result = self.run(solver, &batch, workdir.path(), index, request, metrics);
            if let Err(e) = &result {
                warn!("Request {index} failed, continuing with the batch: {e}");
            }
            results.push(result);
        }

        workdir.close()?;
        Ok(results)
    }

    /// Check every request and resolve the shared batch data
    fn prepare<S: DepletionSolver>(&self, solver: &mut S) -> Result<Batch> {
        // all preconditions before any solver work is done
        for (index, request) in self.requests.iter().enumerate() {
            if request.material().temperature.is_none() {
                return Err(Error::MissingTemperature {
                    index,
                    material: request.material().name.clone(),
                });
            }
        }

        for (index, request) in self.requests.iter().enumerate() {
            request
                .validate()
                .map_err(|source| Error::InvalidRequest { index, source })?;
        }

        let chain_file = self.config.resolve_chain_file(self.chain_file.as_deref())?;
        let chain_file = std::path::absolute(&chain_file)?;
        info!("Using chain file {}", chain_file.display());
        let chain = solver.load_chain(&chain_file)?;

        let nuclides = match &self.nuclides {
            Some(nuclides) if !nuclides.is_empty() => nuclides
                .iter()
                .map(|n| Nuclide::canonical(n))
                .collect::<Result<Vec<String>>>()?,
            _ => chain.nuclide_names(),
        };

        let reactions = match &self.reactions {
            Some(reactions) => reactions.clone(),
            None => chain.reactions(),
        };

        let reaction_mts = reactions
            .iter()
            .map(|r| reaction_mt(r))
            .collect::<Result<Vec<u32>>>()?;

        debug!(
            "Batch of {} requests with {} nuclides and reactions {:?}",
            self.requests.len(),
            nuclides.len(),
            reactions
        );

        let cross_sections = self
            .config
            .resolve_cross_sections(self.cross_sections.as_deref());

        let cross_sections = if solver.requires_cross_sections() {
            Some(cross_sections?)
        } else {
            cross_sections.ok()
        };

        Ok(Batch {
            chain,
            nuclides,
            reactions,
            reaction_mts,
            cross_sections,
        })
    }

    /// Deplete a single request and read back the results
    fn run<S: DepletionSolver>(
        &self,
        solver: &mut S,
        batch: &Batch,
        workdir: &Path,
        index: usize,
        request: &ActivationRequest,
        metrics: &[Metric],
    ) -> Result<ActivationResults> {
        info!(
            "Activating \"{}\" ({}/{})",
            request.material().name,
            index + 1,
            self.requests.len()
        );

        let flux = request
            .normalised_flux()
            .map_err(|source| Error::InvalidRequest { index, source })?;

        let context = SolverContext {
            workdir,
            chain: &batch.chain,
            reduce_chain_level: self.reduce_chain_level,
            unit: self.unit,
            cross_sections: batch.cross_sections.clone(),
        };

        let input = DepletionInput {
            material: request.material(),
            flux: &flux,
            energy: request.energy(),
            source_rates: request.source_rates(),
            timesteps: request.timesteps(),
            reactions: &batch.reactions,
            reaction_mts: &batch.reaction_mts,
        };

        let snapshots = solver.deplete(&context, &input)?;

        let expected = request.timesteps().len() + 1;
        if snapshots.len() != expected {
            return Err(Error::SnapshotCount {
                index,
                expected,
                found: snapshots.len(),
            });
        }

        let metrics = if metrics.is_empty() {
            &[Metric::Mass][..]
        } else {
            metrics
        };

        Ok(read_output(
            &snapshots,
            &batch.nuclides,
            metrics,
            request.timesteps(),
            self.unit,
        ))
    }
}

/// Scratch directory for the lifetime of a batch
fn scratch_dir() -> Result<tempfile::TempDir> {
    let dir = tempfile::Builder::new().prefix("actools-").tempdir()?;
    debug!("Scratch directory {}", dir.path().display());
    Ok(dir)
}
