//! Result and Error types for the activation module

/// Type alias for `Result<T, activation::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `actools-activation`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise JSON content
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Failure writing tabular output
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// No chain file from either the explicit argument or the configuration
    #[error(
        "chain file must be given either as an argument to the Activator or in the \
         configuration ({env_var}), neither was set"
    )]
    MissingChainFile { env_var: &'static str },

    /// No cross section library from the configuration
    #[error(
        "cross section data must be given either as an argument to the Activator or in \
         the configuration ({env_var}), neither was set"
    )]
    MissingCrossSections { env_var: &'static str },

    /// Material was handed over without a temperature
    #[error("material \"{material}\" of request {index} must have a temperature set before depletion")]
    MissingTemperature { index: usize, material: String },

    /// A request failed validation, with the index into the batch
    #[error("request {index} is malformed")]
    InvalidRequest {
        index: usize,
        #[source]
        source: RequestError,
    },

    /// Metric name not recognised
    #[error("invalid metric \"{0}\", expected one of mass, atoms, decay_heat, activity")]
    UnknownMetric(String),

    /// Reaction name not in the known reaction table
    #[error("unknown reaction \"{0}\"")]
    UnknownReaction(String),

    /// Time unit symbol not recognised
    #[error("unknown time unit \"{0}\", expected one of s, min, h, d, a")]
    UnknownTimeUnit(String),

    /// Could not interpret a nuclide name
    #[error("could not interpret \"{0}\" as a nuclide")]
    InvalidNuclide(String),

    /// Solver returned the wrong number of material states for a request
    #[error("request {index} gave {found} snapshots, expected {expected} (one per time step plus the initial state)")]
    SnapshotCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Anything going wrong inside the external solver
    #[error("depletion solver failed")]
    Solver(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap any error raised by a solver implementation
    pub fn solver<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Solver(error.into())
    }
}

/// Reasons an individual [ActivationRequest](crate::ActivationRequest) is rejected
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RequestError {
    /// Flux values do not fit between the energy group boundaries
    #[error("flux has {flux} values, expected one fewer than the {boundaries} boundaries")]
    LengthMismatch { flux: usize, boundaries: usize },

    /// Flux values do not match the group count of a named structure
    #[error("flux has {flux} values but \"{name}\" has {groups} groups")]
    GroupCountMismatch {
        name: String,
        flux: usize,
        groups: usize,
    },

    /// Energy boundaries must go from low to high energy
    #[error("energy boundaries must be strictly ascending, failed at position {position}")]
    NotAscending { position: usize },

    /// Energy boundaries contain NAN or infinite values
    #[error("energy boundaries contain undefined values")]
    UndefinedBoundaries,

    /// Named group structure is not one of the known set
    #[error("unknown energy group structure \"{name}\"")]
    UnknownGroupStructure { name: String },

    /// Flux is not allowed to be negative
    #[error("negative flux value at position {position}")]
    NegativeFlux { position: usize },

    /// Flux is empty or contains undefined values
    #[error("flux contains no values or undefined values")]
    UndefinedFlux,

    /// Normalisation would divide by zero
    #[error("flux sums to zero and can not be normalised")]
    ZeroFlux,

    /// Need at least one time step
    #[error("no time steps given")]
    EmptyTimesteps,

    /// Time steps must have a positive duration
    #[error("time step at position {position} is not a positive duration")]
    NonPositiveTimestep { position: usize },

    /// Source rates must align with the time steps
    #[error("{source_rates} source rates given for {timesteps} time steps")]
    SourceRateMismatch { source_rates: usize, timesteps: usize },
}
