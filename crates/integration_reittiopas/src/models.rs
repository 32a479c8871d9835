//! Decoded journey planner responses
//!
//! [`ApiResponse`] is what a request returns: a JSON tree or the raw text
//! body. The typed views ([`Location`], [`RouteSegment`], [`Leg`]) pick the
//! fields callers commonly need out of a JSON tree and ignore the rest.

use bytes::Bytes;
use domain::{Coordinate, ResponseFormat};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ReittiopasError;

/// A decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Body parsed as JSON (`format=json`)
    Json(Value),
    /// Body bytes exactly as received (`format=txt`)
    Text(Bytes),
}

/// One route alternative: the segments travelled in order
pub type Itinerary = Vec<RouteSegment>;

impl ApiResponse {
    /// Decode a response body according to `format`
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` for malformed JSON and `UnsupportedFormat`
    /// for XML.
    pub fn decode(format: ResponseFormat, body: Bytes) -> Result<Self, ReittiopasError> {
        match format {
            ResponseFormat::Json => serde_json::from_slice(&body)
                .map(Self::Json)
                .map_err(|e| ReittiopasError::DecodeError(e.to_string())),
            ResponseFormat::Txt => Ok(Self::Text(body)),
            ResponseFormat::Xml => Err(ReittiopasError::UnsupportedFormat(format)),
        }
    }

    /// The JSON tree, if this is a JSON response
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw body as UTF-8, if this is a text response in that encoding
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|body| std::str::from_utf8(body).ok())
    }

    /// The raw body, if this is a text response
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Text(body) => Some(body),
            Self::Json(_) => None,
        }
    }

    /// Read a geocode response as a list of locations
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` for text responses or JSON of another shape.
    pub fn locations(&self) -> Result<Vec<Location>, ReittiopasError> {
        Vec::<Location>::deserialize(self.require_json()?)
            .map_err(|e| ReittiopasError::DecodeError(format!("unexpected geocode response: {e}")))
    }

    /// Read a route response as a list of itinerary alternatives
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` for text responses or JSON of another shape.
    pub fn itineraries(&self) -> Result<Vec<Itinerary>, ReittiopasError> {
        Vec::<Itinerary>::deserialize(self.require_json()?)
            .map_err(|e| ReittiopasError::DecodeError(format!("unexpected route response: {e}")))
    }

    /// Coordinate of the first location in a geocode response
    ///
    /// An empty result list is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` for text responses, a non-array body, or a
    /// first element without a well-formed `coords` field.
    pub fn first_coordinate(&self) -> Result<Option<Coordinate>, ReittiopasError> {
        let Value::Array(locations) = self.require_json()? else {
            return Err(ReittiopasError::DecodeError(
                "geocode response is not a list".to_string(),
            ));
        };

        let Some(first) = locations.first() else {
            return Ok(None);
        };

        let coords = first
            .get("coords")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ReittiopasError::DecodeError("location has no 'coords' field".to_string())
            })?;

        coords
            .parse::<Coordinate>()
            .map(Some)
            .map_err(|e| ReittiopasError::DecodeError(e.to_string()))
    }

    fn require_json(&self) -> Result<&Value, ReittiopasError> {
        self.as_json().ok_or_else(|| {
            ReittiopasError::DecodeError("response was not decoded as json".to_string())
        })
    }
}

/// A geocode match
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Position, sent as `"<easting>,<northing>"`
    #[serde(deserialize_with = "coordinate_from_str")]
    pub coords: Coordinate,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Location kind as reported by the API (e.g. `address`, `stop`)
    #[serde(default)]
    pub loc_type: Option<String>,
    /// City name
    #[serde(default)]
    pub city: Option<String>,
}

/// One segment of an itinerary alternative
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteSegment {
    /// Length in metres
    #[serde(default)]
    pub length: Option<f64>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Legs travelled in order
    #[serde(default)]
    pub legs: Vec<Leg>,
}

impl RouteSegment {
    /// Leg types in travel order, e.g. `["walk", "2", "walk"]`
    #[must_use]
    pub fn leg_types(&self) -> Vec<&str> {
        self.legs.iter().map(|leg| leg.leg_type.as_str()).collect()
    }
}

/// One leg of a route segment
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Leg {
    /// `walk`, or the API's numeric vehicle type code
    #[serde(rename = "type", deserialize_with = "string_or_number")]
    pub leg_type: String,
    /// Length in metres
    #[serde(default)]
    pub length: Option<f64>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Line code for vehicle legs
    #[serde(default)]
    pub code: Option<String>,
}

impl Leg {
    /// Whether this leg is on foot
    #[must_use]
    pub fn is_walk(&self) -> bool {
        self.leg_type == "walk"
    }
}

fn coordinate_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coordinate, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(serde::de::Error::custom)
}

/// The leg `type` field is `"walk"` or a vehicle code that may arrive as
/// either a string or a number
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for leg type, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOCODE_JSON: &str = r#"[
        {
            "locType": "address",
            "locTypeId": 900,
            "name": "Tekniikantie 14",
            "city": "Espoo",
            "lang": "en",
            "coords": "2546445,6675512"
        },
        {
            "locType": "address",
            "name": "Tekniikantie 14a",
            "city": "Espoo",
            "coords": "2546450,6675530"
        }
    ]"#;

    const ROUTE_JSON: &str = r#"[
        [{
            "length": 6242.8,
            "duration": 1320,
            "legs": [
                { "length": 310, "duration": 240, "type": "walk" },
                { "length": 5800, "duration": 900, "type": "2", "code": "1102T 1" },
                { "length": 132, "duration": 180, "type": "walk" }
            ]
        }],
        [{
            "length": 7100,
            "duration": 1500,
            "legs": [
                { "type": 6, "code": "1300M1" }
            ]
        }]
    ]"#;

    fn json(body: &str) -> ApiResponse {
        ApiResponse::decode(ResponseFormat::Json, Bytes::copy_from_slice(body.as_bytes())).unwrap()
    }

    #[test]
    fn test_decode_json() {
        let response = json(r#"{"a": [1, 2]}"#);
        assert_eq!(response.as_json().unwrap()["a"][1], 2);
        assert!(response.as_text().is_none());
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = ApiResponse::decode(ResponseFormat::Json, Bytes::from_static(b"<html>")).unwrap_err();
        assert!(matches!(err, ReittiopasError::DecodeError(_)));
    }

    #[test]
    fn test_decode_text_is_verbatim() {
        let body = "  Tekniikantie 14, Espoo\n2546445,6675512\n";
        let response = ApiResponse::decode(ResponseFormat::Txt, Bytes::from_static(body.as_bytes())).unwrap();
        assert_eq!(response.as_text(), Some(body));
        assert!(response.as_json().is_none());
    }

    #[test]
    fn test_decode_text_keeps_non_utf8_bytes() {
        let body: &[u8] = b"T\xf6\xf6l\xf6 2551796,6673513\n";
        let response = ApiResponse::decode(ResponseFormat::Txt, Bytes::from_static(body)).unwrap();
        assert_eq!(response.as_bytes(), Some(body));
        assert_eq!(response.as_text(), None);
    }

    #[test]
    fn test_decode_xml_is_unsupported() {
        let err = ApiResponse::decode(ResponseFormat::Xml, Bytes::from_static(b"<xml/>")).unwrap_err();
        assert!(matches!(
            err,
            ReittiopasError::UnsupportedFormat(ResponseFormat::Xml)
        ));
    }

    #[test]
    fn test_locations() {
        let locations = json(GEOCODE_JSON).locations().unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].coords, Coordinate::new(2_546_445, 6_675_512));
        assert_eq!(locations[0].name.as_deref(), Some("Tekniikantie 14"));
        assert_eq!(locations[0].loc_type.as_deref(), Some("address"));
        assert_eq!(locations[1].city.as_deref(), Some("Espoo"));
    }

    #[test]
    fn test_locations_bad_coords() {
        let err = json(r#"[{"coords": "north"}]"#).locations().unwrap_err();
        assert!(matches!(err, ReittiopasError::DecodeError(_)));
    }

    #[test]
    fn test_first_coordinate() {
        let coord = json(GEOCODE_JSON).first_coordinate().unwrap();
        assert_eq!(coord, Some(Coordinate::new(2_546_445, 6_675_512)));
    }

    #[test]
    fn test_first_coordinate_empty_result() {
        assert_eq!(json("[]").first_coordinate().unwrap(), None);
    }

    #[test]
    fn test_first_coordinate_ignores_later_elements() {
        let coord = json(r#"[{"coords": "1,2"}, {"no": "coords"}]"#)
            .first_coordinate()
            .unwrap();
        assert_eq!(coord, Some(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_first_coordinate_errors() {
        assert!(json(r#"{"coords": "1,2"}"#).first_coordinate().is_err());
        assert!(json(r#"[{"name": "x"}]"#).first_coordinate().is_err());
        assert!(json(r#"[{"coords": "1;2"}]"#).first_coordinate().is_err());
        let text = ApiResponse::Text(Bytes::from_static(b"1,2"));
        assert!(text.first_coordinate().is_err());
    }

    #[test]
    fn test_itineraries() {
        let itineraries = json(ROUTE_JSON).itineraries().unwrap();
        assert_eq!(itineraries.len(), 2);

        let first = &itineraries[0][0];
        assert_eq!(first.leg_types(), vec!["walk", "2", "walk"]);
        assert!(first.legs[0].is_walk());
        assert!(!first.legs[1].is_walk());
        assert_eq!(first.legs[1].code.as_deref(), Some("1102T 1"));
        assert_eq!(first.duration, Some(1320.0));

        let second = &itineraries[1][0];
        assert_eq!(second.leg_types(), vec!["6"]);
    }

    #[test]
    fn test_itineraries_wrong_shape() {
        let err = json(GEOCODE_JSON).itineraries().unwrap_err();
        assert!(matches!(err, ReittiopasError::DecodeError(_)));
    }

    #[test]
    fn test_text_has_no_typed_views() {
        let text = ApiResponse::Text(Bytes::from_static(b"[]"));
        assert!(text.locations().is_err());
        assert!(text.itineraries().is_err());
    }
}
