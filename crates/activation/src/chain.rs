//! Decay and reaction chain data

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// internal modules
use crate::error::Result;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Decay/reaction chain used for a batch of activation runs
///
/// Only the parts of a chain needed to set up a run are kept here, which is
/// every nuclide name and the reactions each can undergo. Decay constants,
/// branching ratios, yields, etc... are the business of the solver.
///
/// A chain is loaded once per [Activator](crate::Activator) run and shared by
/// every request in the batch.
///
/// ```rust
/// # use actools_activation::{Chain, ChainNuclide};
/// let chain = Chain {
///     nuclides: vec![
///         ChainNuclide::new("Co59", &["(n,gamma)", "(n,2n)"]),
///         ChainNuclide::new("Co60", &["(n,gamma)"]),
///     ],
/// };
///
/// assert_eq!(chain.nuclide_names(), vec!["Co59", "Co60"]);
/// assert_eq!(chain.reactions(), vec!["(n,gamma)", "(n,2n)"]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Chain {
    /// Every nuclide in the chain, in file order
    pub nuclides: Vec<ChainNuclide>,
}

/// A single chain entry
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ChainNuclide {
    /// Nuclide name, e.g. "Co60"
    pub name: String,
    /// Reaction names this nuclide can undergo, e.g. "(n,gamma)"
    #[serde(default)]
    pub reactions: Vec<String>,
}

impl ChainNuclide {
    /// Convenience constructor
    pub fn new(name: &str, reactions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            reactions: reactions.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Chain {
    /// Read a chain from a JSON file
    ///
    /// ```json
    /// {
    ///     "nuclides": [
    ///         { "name": "Co59", "reactions": ["(n,gamma)", "(n,2n)"] },
    ///         { "name": "Co60" }
    ///     ]
    /// }
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let chain: Chain = serde_json::from_reader(reader)?;
        debug!(
            "Loaded chain from {} with {} nuclides",
            path.as_ref().display(),
            chain.nuclides.len()
        );
        Ok(chain)
    }

    /// Names of every nuclide in the chain
    pub fn nuclide_names(&self) -> Vec<String> {
        self.nuclides.iter().map(|n| n.name.clone()).collect()
    }

    /// Every reaction declared anywhere in the chain
    ///
    /// Duplicates are removed, keeping the order in which they first appear.
    pub fn reactions(&self) -> Vec<String> {
        let mut reactions: Vec<String> = Vec::new();
        for reaction in self.nuclides.iter().flat_map(|n| &n.reactions) {
            if !reactions.contains(reaction) {
                reactions.push(reaction.clone());
            }
        }
        reactions
    }

    /// Number of nuclides in the chain
    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    /// True if there are no nuclides in the chain
    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }
}
