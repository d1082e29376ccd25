//! Stop type.

use serde::{Deserialize, Deserializer, Serialize};

/// One location a tour must visit.
///
/// A stop carries an identifier, optional coordinates in degrees, and an
/// optional display address. Stops missing either coordinate are *unlocated*
/// and are skipped by the optimizer rather than rejected.
///
/// IDs are held as strings. Deserialization also accepts numeric IDs
/// (`{"id": 42}` becomes `"42"`), which serialize back as strings.
///
/// # Examples
///
/// ```
/// use u_tour::models::Stop;
///
/// let s = Stop::new("a", 37.5665, 126.9780).with_address("Seoul City Hall");
/// assert_eq!(s.id(), "a");
/// assert_eq!(s.coordinates(), Some((37.5665, 126.9780)));
/// assert_eq!(s.address(), Some("Seoul City Hall"));
///
/// let u = Stop::unlocated("b");
/// assert!(!u.is_located());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Stop {
    /// Creates a located stop.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            address: None,
        }
    }

    /// Creates a stop without coordinates.
    pub fn unlocated(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            latitude: None,
            longitude: None,
            address: None,
        }
    }

    /// Creates a stop from possibly missing coordinates.
    pub fn from_parts(
        id: impl Into<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            address: None,
        }
    }

    /// Sets the display address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Identifier, unique within one optimization call.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees, if known.
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Longitude in degrees, if known.
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Display address, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// `(latitude, longitude)` when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Returns `true` if both coordinates are present.
    pub fn is_located(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Returns `true` if the coordinates lie within `[-90, 90]` × `[-180, 180]`.
    ///
    /// Unlocated stops are considered in range; they are filtered, not rejected.
    pub fn is_in_range(&self) -> bool {
        match self.coordinates() {
            Some((lat, lng)) => {
                (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
            }
            None => true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
        RawId::Float(x) => x.to_string(),
    })
}

/// Returns the located stops, in input order.
pub fn located(stops: &[Stop]) -> Vec<Stop> {
    stops.iter().filter(|s| s.is_located()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new("x", 1.5, -2.5);
        assert_eq!(s.id(), "x");
        assert_eq!(s.latitude(), Some(1.5));
        assert_eq!(s.longitude(), Some(-2.5));
        assert!(s.address().is_none());
        assert!(s.is_located());
    }

    #[test]
    fn test_stop_partial_coordinates() {
        let s = Stop::from_parts("x", Some(1.0), None);
        assert!(s.coordinates().is_none());
        assert!(!s.is_located());
        let s = Stop::from_parts("y", None, Some(1.0));
        assert!(!s.is_located());
    }

    #[test]
    fn test_located_filter_keeps_order() {
        let stops = vec![
            Stop::new("a", 0.0, 0.0),
            Stop::unlocated("b"),
            Stop::new("c", 1.0, 1.0),
            Stop::from_parts("d", None, Some(3.0)),
        ];
        let ids: Vec<_> = located(&stops).iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_in_range() {
        assert!(Stop::new("a", 90.0, -180.0).is_in_range());
        assert!(!Stop::new("a", 90.1, 0.0).is_in_range());
        assert!(!Stop::new("a", 0.0, 181.0).is_in_range());
        assert!(Stop::unlocated("a").is_in_range());
    }

    #[test]
    fn test_deserialize_null_coordinates() {
        let json = r#"{"id":"a","latitude":null,"address":"Main St"}"#;
        let s: Stop = serde_json::from_str(json).expect("valid");
        assert_eq!(s.id(), "a");
        assert!(!s.is_located());
        assert_eq!(s.address(), Some("Main St"));
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let s: Stop = serde_json::from_str(r#"{"id":42,"latitude":1.0,"longitude":2.0}"#)
            .expect("valid");
        assert_eq!(s.id(), "42");
        assert_eq!(s.coordinates(), Some((1.0, 2.0)));

        let s: Stop = serde_json::from_str(r#"{"id":-3}"#).expect("valid");
        assert_eq!(s.id(), "-3");
        let s: Stop = serde_json::from_str(r#"{"id":1.5}"#).expect("valid");
        assert_eq!(s.id(), "1.5");

        let json = serde_json::to_value(Stop::new("7", 0.0, 0.0)).expect("serializable");
        assert_eq!(json["id"], "7");
        assert!(serde_json::from_str::<Stop>(r#"{"id":true}"#).is_err());
    }
}
