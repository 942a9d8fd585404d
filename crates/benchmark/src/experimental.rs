//! Reader for measured decay heat data

// standard library
use std::path::Path;

// internal modules
use crate::error::{Error, Result};

// external crates
use log::trace;

/// Measured values from a benchmark experiment
///
/// Three aligned columns: cooling time (min), measured value, and its
/// uncertainty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentalData {
    /// Cooling time (min)
    pub minutes: Vec<f64>,
    /// Measured value
    pub values: Vec<f64>,
    /// Absolute uncertainty on the value
    pub uncertainties: Vec<f64>,
}

impl ExperimentalData {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    /// True if there are no rows
    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

/// Read an experimental data file
///
/// See [parse_experimental_data()] for the rules applied to each line.
pub fn read_experimental_data<P: AsRef<Path>>(path: P) -> Result<ExperimentalData> {
    parse_experimental_data(&std::fs::read_to_string(path)?)
}

/// Parse whitespace separated `<minutes> <value> <uncertainty>` rows
///
/// Lines without exactly three fields are skipped, as are rows where all three
/// values are zero. A three field line that is not numeric is an error.
///
/// ```rust
/// # use actools_benchmark::parse_experimental_data;
/// let data = parse_experimental_data("0.0 0.0 0.0\n0.0 5.0 0.1\nheader line\n").unwrap();
/// assert_eq!(data.values, vec![5.0]);
/// ```
pub fn parse_experimental_data(content: &str) -> Result<ExperimentalData> {
    let mut data = ExperimentalData::default();

    for (index, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            trace!("Skipping line {}: \"{line}\"", index + 1);
            continue;
        }

        let parse = |s: &str| {
            s.parse::<f64>().map_err(|_| Error::ParseError {
                line: index + 1,
                content: line.to_string(),
            })
        };

        let minutes = parse(fields[0])?;
        let value = parse(fields[1])?;
        let uncertainty = parse(fields[2])?;

        if minutes == 0.0 && value == 0.0 && uncertainty == 0.0 {
            continue;
        }

        data.minutes.push(minutes);
        data.values.push(value);
        data.uncertainties.push(uncertainty);
    }

    Ok(data)
}
