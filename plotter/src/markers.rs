use flightcore::math::StatsHelper;
use flightcore::Snapshot;
use image::Rgb;

/// Geometric altitude range mapped onto the marker size range.
pub const ALTITUDE_RANGE: (f64, f64) = (0.0, 5000.0);
/// Marker area in pt², as matplotlib's scatter `s`.
pub const SIZE_RANGE: (f64, f64) = (5.0, 45.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub longitude: f64,
    pub latitude: f64,
    pub size: f64,
    pub color: Rgb<u8>,
}

/// Marker area for a geometric altitude; a missing altitude counts as 0.
///
/// Not clamped, so altitudes above the range grow past the largest size.
pub fn marker_size(geo_altitude: Option<f64>) -> f64 {
    StatsHelper::linear_map(
        geo_altitude.unwrap_or(0.0),
        ALTITUDE_RANGE.0,
        ALTITUDE_RANGE.1,
        SIZE_RANGE.0,
        SIZE_RANGE.1,
    )
}

/// Samples the "jet" colormap at `fraction` in `[0, 1]`.
pub fn jet(fraction: f64) -> Rgb<u8> {
    let x = fraction.clamp(0.0, 1.0);
    let channel = |offset: f64| {
        let value = (1.5 - (4.0 * x - offset).abs()).clamp(0.0, 1.0);
        (value * 255.0).round() as u8
    };
    Rgb([channel(3.0), channel(2.0), channel(1.0)])
}

/// One marker per flight, coloured by velocity relative to the snapshot's
/// slowest and fastest aircraft.
pub fn build_markers(snapshot: &Snapshot) -> Vec<Marker> {
    let velocities = snapshot.flights.iter().filter_map(|f| f.velocity);
    let (slowest, fastest) = StatsHelper::min_max(velocities).unwrap_or((0.0, 0.0));

    snapshot
        .flights
        .iter()
        .map(|flight| {
            let fraction = flight
                .velocity
                .map(|v| StatsHelper::normalize(v, slowest, fastest))
                .unwrap_or(0.0);
            Marker {
                longitude: flight.longitude,
                latitude: flight.latitude,
                size: marker_size(flight.geo_altitude),
                color: jet(fraction),
            }
        })
        .collect()
}
