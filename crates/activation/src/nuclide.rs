//! Nuclide identifiers

// standard library
use std::str::FromStr;

// internal modules
use crate::error::{Error, Result};
use crate::parsers::nuclide_from_str;

// external crates
use actools_utils::f;
use serde::{Deserialize, Serialize};

/// Definition for a particular nuclide
///
/// The `FromStr` trait is implemented and will try to parse a string into
/// a nuclide. Expects `<element><separator><isotope><metastable>` at most but
/// only the first is required. e.g.
///
/// - Element only Co, C
/// - Isotope Co60, co-60, C0
/// - Metastable Co60_m1 Co60m1 Co60m2 ...
/// - Fispact Co60m Co60n
///
/// Names are always written back out in the GNDS style used by chain files and
/// solver snapshots, so anything a user types can be matched against them.
///
/// ```rust
/// # use actools_activation::{Nuclide, IsomerState};
/// # use std::str::FromStr;
/// let nuclide = Nuclide::from_str("ag-110m").unwrap();
/// assert_eq!(nuclide.state, IsomerState::Excited(1));
/// assert_eq!(nuclide.name(), "Ag110_m1");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nuclide {
    /// Element symbol, capitalised
    pub symbol: String,
    /// Mass number (Z+N), missing for elements
    pub isotope: Option<u16>,
    /// Excited state status
    pub state: IsomerState,
}

impl Nuclide {
    /// A name for the nuclide with consistent formatting
    ///
    /// ```rust
    /// # use actools_activation::{Nuclide, IsomerState};
    /// let mut nuclide = Nuclide {
    ///     symbol: "Eu".to_string(),
    ///     isotope: Some(152),
    ///     state: IsomerState::Ground
    /// };
    /// assert_eq!(nuclide.name(), "Eu152");
    ///
    /// nuclide.state = IsomerState::Excited(2);
    /// assert_eq!(nuclide.name(), "Eu152_m2");
    /// ```
    pub fn name(&self) -> String {
        match self.isotope {
            Some(a) => f!("{}{}{}", self.symbol, a, self.state),
            None => self.symbol.clone(),
        }
    }

    /// Canonical form of any acceptable nuclide name
    ///
    /// ```rust
    /// # use actools_activation::Nuclide;
    /// assert_eq!(Nuclide::canonical("co60").unwrap(), "Co60");
    /// assert!(Nuclide::canonical("not a nuclide").is_err());
    /// ```
    pub fn canonical(name: &str) -> Result<String> {
        Ok(Self::from_str(name)?.name())
    }
}

impl FromStr for Nuclide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match nuclide_from_str(s.trim()) {
            Ok(("", nuclide)) => Ok(nuclide),
            _ => Err(Error::InvalidNuclide(s.to_string())),
        }
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Variants of excited states
///
/// A nuclide can either be in the ground state, or some excited state, using
/// `_m1` for the first excited state, `_m2` for the second, and so on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsomerState {
    #[default]
    Ground,
    Excited(u8),
}

impl std::fmt::Display for IsomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IsomerState::Ground => Ok(()),
            IsomerState::Excited(e) => write!(f, "_m{e}"),
        }
    }
}
