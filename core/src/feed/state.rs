use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of positional fields in an OpenSky state array.
pub const STATE_FIELD_COUNT: usize = 17;

/// One aircraft's last known state as delivered by `/states/all`.
///
/// Upstream sends a positional JSON array; it is decoded straight into named
/// fields so a truncated array fails here instead of shifting values
/// downstream. Any single field may be `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    pub icao24: Option<String>,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub time_position: Option<i64>,
    pub last_contact: Option<i64>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub baro_altitude: Option<f64>,
    pub on_ground: Option<bool>,
    pub velocity: Option<f64>,
    pub true_track: Option<f64>,
    pub vertical_rate: Option<f64>,
    pub sensors: Option<Vec<i64>>,
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    pub spi: Option<bool>,
    pub position_source: Option<u8>,
}

impl StateVector {
    /// Latitude and longitude, when both are reported.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

struct StateVectorVisitor;

impl StateVectorVisitor {
    fn next<'de, A, T>(seq: &mut A, index: usize) -> Result<T, A::Error>
    where
        A: SeqAccess<'de>,
        T: Deserialize<'de>,
    {
        seq.next_element()?
            .ok_or_else(|| de::Error::invalid_length(index, &StateVectorVisitor))
    }
}

impl<'de> Visitor<'de> for StateVectorVisitor {
    type Value = StateVector;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a state array with at least {STATE_FIELD_COUNT} elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<StateVector, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let state = StateVector {
            icao24: Self::next(&mut seq, 0)?,
            callsign: Self::next(&mut seq, 1)?,
            origin_country: Self::next(&mut seq, 2)?,
            time_position: Self::next(&mut seq, 3)?,
            last_contact: Self::next(&mut seq, 4)?,
            longitude: Self::next(&mut seq, 5)?,
            latitude: Self::next(&mut seq, 6)?,
            baro_altitude: Self::next(&mut seq, 7)?,
            on_ground: Self::next(&mut seq, 8)?,
            velocity: Self::next(&mut seq, 9)?,
            true_track: Self::next(&mut seq, 10)?,
            vertical_rate: Self::next(&mut seq, 11)?,
            sensors: Self::next(&mut seq, 12)?,
            geo_altitude: Self::next(&mut seq, 13)?,
            squawk: Self::next(&mut seq, 14)?,
            spi: Self::next(&mut seq, 15)?,
            position_source: Self::next(&mut seq, 16)?,
        };
        // extended responses append the aircraft category
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(state)
    }
}

impl<'de> Deserialize<'de> for StateVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(StateVectorVisitor)
    }
}

impl Serialize for StateVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(STATE_FIELD_COUNT))?;
        seq.serialize_element(&self.icao24)?;
        seq.serialize_element(&self.callsign)?;
        seq.serialize_element(&self.origin_country)?;
        seq.serialize_element(&self.time_position)?;
        seq.serialize_element(&self.last_contact)?;
        seq.serialize_element(&self.longitude)?;
        seq.serialize_element(&self.latitude)?;
        seq.serialize_element(&self.baro_altitude)?;
        seq.serialize_element(&self.on_ground)?;
        seq.serialize_element(&self.velocity)?;
        seq.serialize_element(&self.true_track)?;
        seq.serialize_element(&self.vertical_rate)?;
        seq.serialize_element(&self.sensors)?;
        seq.serialize_element(&self.geo_altitude)?;
        seq.serialize_element(&self.squawk)?;
        seq.serialize_element(&self.spi)?;
        seq.serialize_element(&self.position_source)?;
        seq.end()
    }
}
