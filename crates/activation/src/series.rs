//! Per-nuclide time series built from solver snapshots

// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// internal modules
use crate::error::Result;
use crate::metric::Metric;
use crate::snapshot::Snapshot;
use crate::time::TimeUnit;

// external crates
use actools_utils::{f, SliceExt};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Time series of one metric for every retained nuclide
///
/// There is one value per snapshot, including the initial state, so every
/// series is one longer than the list of time steps.
///
/// - `time` is the cumulative time at each snapshot, starting at 0
/// - `total` is the sum over every nuclide the snapshot reported
/// - `nuclides` holds a series for each requested nuclide
///
/// Because `total` includes nuclides that were never requested, it can be
/// larger than the sum of the retained series.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetricSeries {
    metric: Metric,
    unit: TimeUnit,
    time: Vec<f64>,
    total: Vec<f64>,
    nuclides: BTreeMap<String, Vec<f64>>,
}

impl MetricSeries {
    /// Metric the values are for
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Unit of the time values
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Cumulative time at each snapshot
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Sum over all reported nuclides at each snapshot
    pub fn total(&self) -> &[f64] {
        &self.total
    }

    /// Every retained nuclide series
    pub fn nuclides(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.nuclides
    }

    /// Series for a single nuclide, if retained
    pub fn get(&self, nuclide: &str) -> Option<&[f64]> {
        self.nuclides.get(nuclide).map(Vec::as_slice)
    }

    /// Label for the time column, e.g. `time_d`
    pub fn time_label(&self) -> String {
        f!("time_{}", self.unit.symbol())
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.total.len()
    }

    /// True if there are no snapshots
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// Drop every nuclide whose series is exactly zero throughout
    ///
    /// This is purely cosmetic and applied to each metric independently.
    pub fn without_zeros(self) -> Self {
        let metric = self.metric;
        let nuclides = self
            .nuclides
            .into_iter()
            .filter(|(name, values)| {
                let keep = !values.is_all_zero();
                if !keep {
                    debug!("Dropping {name} from {metric}, zero at every step");
                }
                keep
            })
            .collect();

        Self { nuclides, ..self }
    }

    /// Write the series as a CSV table
    ///
    /// Columns are the time, the total, then one per nuclide. Each row is one
    /// snapshot.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec![self.time_label(), "total".to_string()];
        header.extend(self.nuclides.keys().cloned());
        writer.write_record(&header)?;

        for step in 0..self.len() {
            let mut row = vec![
                self.time.get(step).copied().unwrap_or(f64::NAN),
                self.total[step],
            ];
            row.extend(self.nuclides.values().map(|values| values[step]));
            writer.write_record(row.iter().map(|v| v.to_string()))?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// All metric series for one activation run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ActivationResults {
    series: BTreeMap<Metric, MetricSeries>,
}

impl ActivationResults {
    /// Series for a metric, if it was requested
    pub fn get(&self, metric: Metric) -> Option<&MetricSeries> {
        self.series.get(&metric)
    }

    /// Iterate over every metric series
    pub fn iter(&self) -> impl Iterator<Item = &MetricSeries> {
        self.series.values()
    }

    /// Number of metrics
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True if no metrics were requested
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Write every series to a JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }
}

/// Turn solver snapshots into metric series
///
/// For every metric and every requested nuclide, the value is read at each
/// snapshot. Nuclides a snapshot does not report count as `0.0`, so every
/// series has one value per snapshot. The `total` is summed over everything
/// the snapshot reports, requested or not.
///
/// Nuclides that are zero at every step are dropped afterwards.
///
/// ```rust
/// # use actools_activation::{read_output, Metric, MaterialSnapshot, NuclideState, TimeUnit};
/// let snapshot = |grams: f64| MaterialSnapshot {
///     nuclides: vec![NuclideState { name: "Co60".into(), mass: grams, ..Default::default() }],
/// };
///
/// let snapshots = vec![snapshot(0.0), snapshot(0.5), snapshot(1.5)];
/// let nuclides = vec!["Co60".to_string(), "Ni60".to_string()];
///
/// let results = read_output(&snapshots, &nuclides, &[Metric::Mass], &[10.0, 20.0], TimeUnit::Days);
/// let mass = results.get(Metric::Mass).unwrap();
///
/// assert_eq!(mass.time(), &[0.0, 10.0, 30.0]);
/// assert_eq!(mass.get("Co60").unwrap(), &[0.0, 0.5, 1.5]);
/// assert!(mass.get("Ni60").is_none());
/// ```
pub fn read_output<S: Snapshot>(
    snapshots: &[S],
    nuclides: &[String],
    metrics: &[Metric],
    timesteps: &[f64],
    unit: TimeUnit,
) -> ActivationResults {
    let time = timesteps.cumulative_from_zero();

    if time.len() != snapshots.len() {
        warn!(
            "{} snapshots for {} time steps, expected {}",
            snapshots.len(),
            timesteps.len(),
            time.len()
        );
    }

    let series = metrics
        .iter()
        .map(|metric| {
            let series = collect_series(snapshots, nuclides, *metric, &time, unit);
            (*metric, series.without_zeros())
        })
        .collect();

    ActivationResults { series }
}

/// Build the full, unfiltered series for a single metric
fn collect_series<S: Snapshot>(
    snapshots: &[S],
    nuclides: &[String],
    metric: Metric,
    time: &[f64],
    unit: TimeUnit,
) -> MetricSeries {
    let mut total = Vec::with_capacity(snapshots.len());
    let mut values: BTreeMap<String, Vec<f64>> = nuclides
        .iter()
        .map(|n| (n.clone(), Vec::with_capacity(snapshots.len())))
        .collect();

    for snapshot in snapshots {
        let reported = metric.extract(snapshot);

        for (name, series) in values.iter_mut() {
            series.push(reported.get(name).copied().unwrap_or(0.0));
        }

        total.push(reported.values().sum());
    }

    MetricSeries {
        metric,
        unit,
        time: time.to_vec(),
        total,
        nuclides: values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{MaterialSnapshot, NuclideState};

    fn state(name: &str, mass: f64, activity: f64) -> NuclideState {
        NuclideState {
            name: name.to_string(),
            atoms: mass * 1.0e22,
            mass,
            activity,
            heat: activity * 1.0e-13,
        }
    }

    fn three_snapshots() -> Vec<MaterialSnapshot> {
        vec![
            MaterialSnapshot {
                nuclides: vec![state("Co59", 10.0, 0.0)],
            },
            MaterialSnapshot {
                nuclides: vec![state("Co59", 9.0, 0.0), state("Fe56", 0.5, 0.0)],
            },
            MaterialSnapshot {
                nuclides: vec![
                    state("Co59", 8.0, 0.0),
                    state("Co60", 1.5, 2.0e9),
                    state("Fe56", 0.5, 0.0),
                ],
            },
        ]
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_nuclides_are_zero_filled() {
        let results = read_output(
            &three_snapshots(),
            &names(&["Co60"]),
            &[Metric::Mass],
            &[10.0, 20.0],
            TimeUnit::Days,
        );

        let mass = results.get(Metric::Mass).unwrap();
        assert_eq!(mass.get("Co60").unwrap(), &[0.0, 0.0, 1.5]);
        assert_eq!(mass.len(), 3);
    }

    #[test]
    fn absent_everywhere_is_pruned() {
        let results = read_output(
            &three_snapshots(),
            &names(&["Co60", "Mn54"]),
            &[Metric::Mass],
            &[10.0, 20.0],
            TimeUnit::Days,
        );

        let mass = results.get(Metric::Mass).unwrap();
        assert!(mass.get("Mn54").is_none());
        assert!(mass.get("Co60").is_some());
    }

    #[test]
    fn total_includes_unrequested_nuclides() {
        let results = read_output(
            &three_snapshots(),
            &names(&["Co60"]),
            &[Metric::Mass],
            &[10.0, 20.0],
            TimeUnit::Days,
        );

        let mass = results.get(Metric::Mass).unwrap();
        assert_eq!(mass.total(), &[10.0, 9.5, 10.0]);
    }

    #[test]
    fn pruning_is_per_metric() {
        let results = read_output(
            &three_snapshots(),
            &names(&["Co59", "Co60"]),
            &[Metric::Mass, Metric::Activity],
            &[10.0, 20.0],
            TimeUnit::Seconds,
        );

        // stable Co59 has mass but no activity
        assert!(results.get(Metric::Mass).unwrap().get("Co59").is_some());
        assert!(results.get(Metric::Activity).unwrap().get("Co59").is_none());
        assert!(results.get(Metric::Activity).unwrap().get("Co60").is_some());
    }

    #[test]
    fn cumulative_time() {
        let snapshots = vec![MaterialSnapshot::default(); 4];
        let results = read_output(
            &snapshots,
            &[],
            &[Metric::Atoms],
            &[10.0, 20.0, 30.0],
            TimeUnit::Days,
        );

        let atoms = results.get(Metric::Atoms).unwrap();
        assert_eq!(atoms.time(), &[0.0, 10.0, 30.0, 60.0]);
        assert_eq!(atoms.time_label(), "time_d");
    }

    #[test]
    fn only_requested_metrics() {
        let results = read_output(
            &three_snapshots(),
            &names(&["Co60"]),
            &[Metric::DecayHeat],
            &[10.0, 20.0],
            TimeUnit::Days,
        );
        assert_eq!(results.len(), 1);
        assert!(results.get(Metric::Mass).is_none());
    }

    #[test]
    fn csv_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mass.csv");

        let results = read_output(
            &three_snapshots(),
            &names(&["Co59", "Co60"]),
            &[Metric::Mass],
            &[10.0, 20.0],
            TimeUnit::Days,
        );
        results.get(Metric::Mass).unwrap().write_csv(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "time_d,total,Co59,Co60");
        assert_eq!(lines[3], "30,10,8,1.5");
    }

    #[test]
    fn json_keyed_by_metric() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let results = read_output(
            &three_snapshots(),
            &names(&["Co60"]),
            &[Metric::Mass, Metric::DecayHeat],
            &[10.0, 20.0],
            TimeUnit::Hours,
        );
        results.write_json(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let series = &value["series"];
        assert!(series.get("mass").is_some());
        assert!(series.get("decay_heat").is_some());
        assert_eq!(series["mass"]["unit"], "h");
        assert_eq!(series["mass"]["nuclides"]["Co60"][2], 1.5);
    }
}
