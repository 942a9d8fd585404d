//! Units for time step durations

// internal modules
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Unit of the time step durations
///
/// The `FromStr` trait is implemented for the usual symbols, and the reverse is
/// available through [TimeUnit::symbol()].
///
/// ```rust
/// # use actools_activation::TimeUnit;
/// # use std::str::FromStr;
/// assert_eq!(TimeUnit::from_str("d").unwrap(), TimeUnit::Days);
/// assert_eq!(TimeUnit::Days.symbol(), "d");
/// assert_eq!(TimeUnit::Hours.seconds(), 3600.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    /// Seconds (`s`)
    #[default]
    #[serde(rename = "s")]
    Seconds,
    /// Minutes (`min`)
    #[serde(rename = "min")]
    Minutes,
    /// Hours (`h`)
    #[serde(rename = "h")]
    Hours,
    /// Days (`d`)
    #[serde(rename = "d")]
    Days,
    /// Julian years (`a`)
    #[serde(rename = "a")]
    Years,
}

impl TimeUnit {
    /// Symbol for the unit
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Years => "a",
        }
    }

    /// Length of one unit in seconds
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => 86400.0,
            TimeUnit::Years => 365.25 * 86400.0,
        }
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "seconds" => Ok(TimeUnit::Seconds),
            "min" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hours" => Ok(TimeUnit::Hours),
            "d" | "days" => Ok(TimeUnit::Days),
            "a" | "y" | "years" => Ok(TimeUnit::Years),
            _ => Err(Error::UnknownTimeUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
