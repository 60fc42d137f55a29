use flightcore::prelude::{AreaConfig, FeedResult, StateSource};
use flightcore::{StateResponse, StateVector};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic `/states/all` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    /// Half-width in degrees of the box states are scattered over.
    pub spread_deg: f64,
    pub on_ground_ratio: f64,
    pub missing_position_ratio: f64,
    /// Snapshot epoch; `None` uses the current time.
    pub time: Option<i64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: 0,
            spread_deg: 2.0,
            on_ground_ratio: 0.1,
            missing_position_ratio: 0.05,
            time: None,
        }
    }
}

fn build_state(
    rng: &mut StdRng,
    index: usize,
    area: &AreaConfig,
    config: &GeneratorConfig,
    time: i64,
) -> StateVector {
    let spread = config.spread_deg.abs().max(f64::EPSILON);
    let on_ground = rng.gen_bool(config.on_ground_ratio.clamp(0.0, 1.0));
    let unpositioned = rng.gen_bool(config.missing_position_ratio.clamp(0.0, 1.0));

    let latitude = area.latitude + rng.gen_range(-spread..spread);
    let longitude = area.longitude + rng.gen_range(-spread..spread);
    let (altitude, velocity) = if on_ground {
        (None, rng.gen_range(0.0..15.0))
    } else {
        (Some(rng.gen_range(300.0..12_000.0)), rng.gen_range(70.0..260.0))
    };

    StateVector {
        icao24: Some(format!("{:06x}", rng.gen_range(0..0x00ff_ffffu32))),
        // upstream pads callsigns to eight characters
        callsign: Some(format!("{:<8}", format!("SYN{index:04}"))),
        origin_country: Some("Synthetic".into()),
        time_position: Some(time - rng.gen_range(0..10)),
        last_contact: Some(time - rng.gen_range(0..5)),
        longitude: (!unpositioned).then_some(longitude),
        latitude: (!unpositioned).then_some(latitude),
        baro_altitude: altitude,
        on_ground: Some(on_ground),
        velocity: Some(velocity),
        true_track: Some(rng.gen_range(0.0..360.0)),
        vertical_rate: altitude.map(|_| rng.gen_range(-15.0..15.0)),
        sensors: None,
        geo_altitude: altitude.map(|alt| alt + rng.gen_range(-60.0..60.0)),
        squawk: Some(format!("{:04o}", rng.gen_range(0..0o7777))),
        spi: Some(false),
        position_source: Some(0),
    }
}

pub fn build_state_response(config: &GeneratorConfig, area: &AreaConfig) -> StateResponse {
    let time = config.time.unwrap_or_else(|| chrono::Utc::now().timestamp());
    let mut rng = StdRng::seed_from_u64(config.seed);
    let states = (0..config.count)
        .map(|index| build_state(&mut rng, index, area, config, time))
        .collect();
    StateResponse::new(time, states)
}

/// Seeded stand-in for the live feed.
pub struct SyntheticSource {
    config: GeneratorConfig,
    area: AreaConfig,
}

impl SyntheticSource {
    pub fn new(config: GeneratorConfig, area: AreaConfig) -> Self {
        Self { config, area }
    }
}

impl StateSource for SyntheticSource {
    fn fetch(&self) -> FeedResult<StateResponse> {
        Ok(build_state_response(&self.config, &self.area))
    }

    fn describe(&self) -> String {
        format!("synthetic feed ({} states, seed {})", self.config.count, self.config.seed)
    }
}
