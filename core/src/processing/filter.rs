use chrono::TimeZone;
use std::fmt::Display;

use crate::feed::{FlightRecord, Snapshot, StateResponse, StateVector};
use crate::math::geo::{haversine_distance, DistanceOptions};
use crate::prelude::FilterConfig;
use crate::processing::timefmt::format_epoch;
use crate::telemetry::{FilterMetrics, LogManager};

/// Result of one filter pass.
#[derive(Debug, Clone)]
pub struct FilterOutput {
    pub snapshot: Snapshot,
    pub metrics: FilterMetrics,
}

/// Keeps the states within the configured radius and shapes them into
/// [`FlightRecord`]s, preserving upstream order.
pub struct GeoFilter {
    config: FilterConfig,
    logger: LogManager,
}

impl GeoFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }

    /// Kilometres from the reference point, unrounded.
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> f64 {
        let area = &self.config.area;
        haversine_distance(
            area.latitude,
            area.longitude,
            latitude,
            longitude,
            DistanceOptions::kilometers(),
        )
    }

    /// Runs the filter, formatting timestamps in `tz`.
    pub fn apply<Tz>(&self, response: &StateResponse, tz: &Tz) -> FilterOutput
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let time = format_epoch(response.time, &self.config.date_format, tz);
        let mut metrics = FilterMetrics::new();
        let mut flights = Vec::new();

        for state in &response.states {
            metrics.record_seen();

            // a sparse feed is normal, so missing positions are not warned about
            let Some((latitude, longitude)) = state.position() else {
                metrics.record_missing_position();
                self.logger.detail(&format!(
                    "{} skipped: no position",
                    state.icao24.as_deref().unwrap_or("unknown")
                ));
                continue;
            };

            let distance = self.distance_km(latitude, longitude);
            if distance > self.config.area.radius_km {
                metrics.record_out_of_range();
                continue;
            }

            metrics.record_kept(state.on_ground == Some(true));
            flights.push(self.shape(state, (latitude, longitude), distance, response.time, &time, tz));
        }

        self.logger.record(&format!("GeoFilter {}", metrics));

        FilterOutput {
            snapshot: Snapshot::new(response.time, time, flights),
            metrics,
        }
    }

    fn shape<Tz>(
        &self,
        state: &StateVector,
        (latitude, longitude): (f64, f64),
        distance: f64,
        timestamp: i64,
        time: &str,
        tz: &Tz,
    ) -> FlightRecord
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        FlightRecord {
            timestamp,
            time: time.to_string(),
            distance,
            icao24: state.icao24.clone(),
            callsign: state.callsign.as_ref().map(|c| c.trim().to_string()),
            origin_country: state.origin_country.clone(),
            last_contact: state.last_contact,
            last_contact_time: state
                .last_contact
                .map(|epoch| format_epoch(epoch, &self.config.date_format, tz)),
            longitude,
            latitude,
            baro_altitude: state.baro_altitude,
            on_ground: state.on_ground,
            velocity: state.velocity,
            true_track: state.true_track,
            vertical_rate: state.vertical_rate,
            sensors: state.sensors.clone(),
            geo_altitude: state.geo_altitude,
            squawk: state.squawk.clone(),
            spi: state.spi,
            position_source: state.position_source,
        }
    }
}
