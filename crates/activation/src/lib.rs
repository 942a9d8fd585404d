//! Material activation runs against an external depletion solver
//!
//! This crate is the glue between a batch of activation requests and whatever
//! solver does the real work of collapsing cross sections and integrating the
//! Bateman equations. None of the numerical work is done here.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use actools_activation::*;
//! # fn run<S: DepletionSolver>(solver: &mut S) -> Result<()> {
//! // Osmium foil in a two group spectrum, 5 minutes on and an hour off
//! let material = Material::new("Os", 22.59, 1.0).with_temperature(293.6);
//! let request = ActivationRequest::new(
//!     material,
//!     vec![1.0e10, 3.0e10],
//!     EnergyGroups::Boundaries(vec![0.0, 1.0e6, 14.1e6]),
//!     vec![1.0e12, 0.0],
//!     vec![5.0, 60.0],
//! );
//!
//! let results = Activator::new(vec![request])
//!     .with_chain_file("chain.json")
//!     .with_unit(TimeUnit::Minutes)
//!     .activate(solver, &[Metric::Activity])?;
//!
//! // Cumulative time and activity of Os191 at each step
//! let activity = results[0].get(Metric::Activity).unwrap();
//! println!("{:?} {:?}", activity.time(), activity.get("Os191"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core concepts
//!
//! An [Activator] holds a batch of [ActivationRequest]s. Each is checked, the
//! flux is normalised to unit sum, and the request is handed to a
//! [DepletionSolver] along with the shared [Chain] and a scratch directory.
//!
//! The solver returns one [Snapshot] per step (including the initial state),
//! which [read_output()] turns into a [MetricSeries] for every requested
//! [Metric].
//!
//! ### Data paths
//!
//! Chain files and cross sections are resolved from explicit arguments first,
//! then the [Config]. See [Config::from_env()] for the environment variables
//! used.

// Modules
mod activator;
mod chain;
mod config;
mod error;
mod material;
mod metric;
mod nuclide;
mod parsers;
mod reaction;
mod request;
mod series;
mod snapshot;
mod solver;
mod time;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use activator::Activator;

#[doc(inline)]
pub use chain::{Chain, ChainNuclide};

#[doc(inline)]
pub use config::{Config, CHAIN_FILE_VAR, CROSS_SECTIONS_VAR};

#[doc(inline)]
pub use error::{Error, RequestError, Result};

#[doc(inline)]
pub use material::Material;

#[doc(inline)]
pub use metric::Metric;

#[doc(inline)]
pub use nuclide::{IsomerState, Nuclide};

#[doc(inline)]
pub use reaction::reaction_mt;

#[doc(inline)]
pub use request::{group_count, read_requests_json, ActivationRequest, EnergyGroups};

#[doc(inline)]
pub use series::{read_output, ActivationResults, MetricSeries};

#[doc(inline)]
pub use snapshot::{read_snapshots_json, MaterialSnapshot, NuclideState, NuclideValues, Snapshot};

#[doc(inline)]
pub use solver::{DepletionInput, DepletionSolver, SolverContext};

#[doc(inline)]
pub use time::TimeUnit;
