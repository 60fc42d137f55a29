use crate::workflow::config::FetchConfig;
use anyhow::Context;
use chrono::Local;
use flightcore::output::{write_csv, write_json};
use flightcore::prelude::StateSource;
use flightcore::telemetry::FilterMetrics;
use flightcore::GeoFilter;
use log::info;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing within the radius; no files were touched.
    Empty { metrics: FilterMetrics },
    Written {
        metrics: FilterMetrics,
        json_out: PathBuf,
        csv_out: PathBuf,
        nearest: Option<(String, f64)>,
    },
}

impl RunOutcome {
    pub fn metrics(&self) -> &FilterMetrics {
        match self {
            RunOutcome::Empty { metrics } | RunOutcome::Written { metrics, .. } => metrics,
        }
    }
}

pub struct Runner {
    config: FetchConfig,
}

impl Runner {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Fetch, filter and persist one snapshot.
    pub fn execute(&self, source: &dyn StateSource) -> anyhow::Result<RunOutcome> {
        let response = source
            .fetch()
            .with_context(|| format!("fetching states from {}", source.describe()))?;
        info!(
            "fetched {} states from {} (time {})",
            response.states.len(),
            source.describe(),
            response.time
        );

        let filter = GeoFilter::new(self.config.to_filter_config());
        let output = filter.apply(&response, &Local);

        if output.snapshot.is_empty() {
            info!(
                "no flights within {} km, leaving outputs untouched",
                self.config.area.radius_km
            );
            return Ok(RunOutcome::Empty {
                metrics: output.metrics,
            });
        }

        let snapshot = output.snapshot;
        write_json(&self.config.json_out, &snapshot)
            .with_context(|| format!("writing {}", self.config.json_out.display()))?;
        let rows = write_csv(&self.config.csv_out, &snapshot.flights)
            .with_context(|| format!("writing {}", self.config.csv_out.display()))?;
        info!(
            "wrote {} flights to {} and {}",
            rows,
            self.config.json_out.display(),
            self.config.csv_out.display()
        );

        Ok(RunOutcome::Written {
            metrics: output.metrics,
            json_out: self.config.json_out.clone(),
            csv_out: self.config.csv_out.clone(),
            nearest: snapshot
                .nearest()
                .map(|flight| {
                    let icao24 = flight.icao24.clone().unwrap_or_else(|| "unknown".into());
                    (icao24, flight.distance)
                }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::synthetic::{GeneratorConfig, SyntheticSource};
    use crate::source::FileSource;
    use flightcore::prelude::AreaConfig;
    use flightcore::Snapshot;

    fn config_in(dir: &std::path::Path) -> FetchConfig {
        FetchConfig::default().with_output_dir(dir)
    }

    fn synthetic(count: usize, missing_position_ratio: f64) -> SyntheticSource {
        SyntheticSource::new(
            GeneratorConfig {
                count,
                seed: 42,
                missing_position_ratio,
                time: Some(1_700_000_000),
                ..Default::default()
            },
            AreaConfig::default(),
        )
    }

    #[test]
    fn runner_writes_json_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let runner = Runner::new(config.clone());

        let outcome = runner.execute(&synthetic(80, 0.0)).unwrap();

        let RunOutcome::Written { metrics, nearest, .. } = outcome else {
            panic!("expected files to be written");
        };
        let snapshot = Snapshot::load(&config.json_out).unwrap();
        assert_eq!(snapshot.len(), metrics.kept);
        assert!(snapshot.flights.iter().all(|f| f.distance <= 100.0));
        assert!(nearest.unwrap().1 <= 100.0);

        let csv_text = std::fs::read_to_string(&config.csv_out).unwrap();
        assert_eq!(csv_text.lines().count(), metrics.kept + 1);
    }

    #[test]
    fn empty_result_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let runner = Runner::new(config.clone());

        let outcome = runner.execute(&synthetic(25, 1.0)).unwrap();

        assert!(matches!(outcome, RunOutcome::Empty { .. }));
        assert_eq!(outcome.metrics().missing_position, 25);
        assert!(!config.json_out.exists());
        assert!(!config.csv_out.exists());
    }

    #[test]
    fn empty_result_keeps_previous_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.json_out, "previous").unwrap();

        let body = dir.path().join("states.json");
        std::fs::write(&body, r#"{"time":1700000000,"states":null}"#).unwrap();
        Runner::new(config.clone())
            .execute(&FileSource::new(&body))
            .unwrap();

        assert_eq!(std::fs::read_to_string(&config.json_out).unwrap(), "previous");
    }

    #[test]
    fn fetch_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(config_in(dir.path()));
        let err = runner
            .execute(&FileSource::new(dir.path().join("missing.json")))
            .unwrap_err();
        assert!(format!("{err:#}").contains("fetching states from"));
    }
}
