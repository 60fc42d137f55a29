/// Mean earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
}

/// Caller-selected output shape for [`haversine_distance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceOptions {
    pub unit: DistanceUnit,
    /// Round to the nearest whole unit.
    pub round: bool,
    pub earth_radius: f64,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::Meters,
            round: false,
            earth_radius: EARTH_RADIUS_M,
        }
    }
}

impl DistanceOptions {
    pub fn kilometers() -> Self {
        Self {
            unit: DistanceUnit::Kilometers,
            ..Default::default()
        }
    }

    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }
}

/// Great-circle distance between two lat/lon points given in degrees.
///
/// Inputs are not range checked; out-of-range angles just flow through the
/// trigonometry.
pub fn haversine_distance(
    start_lat: f64,
    start_lon: f64,
    end_lat: f64,
    end_lon: f64,
    options: DistanceOptions,
) -> f64 {
    let lat_a = start_lat.to_radians();
    let lat_b = end_lat.to_radians();
    let d_lat = lat_b - lat_a;
    let d_lon = end_lon.to_radians() - start_lon.to_radians();

    // square of half the chord length, clamped since rounding can overshoot 1 at antipodes
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    let mut distance = options.earth_radius * c;
    if options.unit == DistanceUnit::Kilometers {
        distance /= 1000.0;
    }
    if options.round {
        distance = distance.round();
    }
    distance
}
