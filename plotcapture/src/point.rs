use std::convert::TryFrom;

use geo_types::{Coord, Point};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_latitude, check_longitude, Error};

/// A latitude/longitude pair in degrees.
///
/// Serialized as a `[lat, lng]` array. Deserialization validates the ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "use-serde",
    derive(Serialize, Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, Error> {
        check_latitude(lat)?;
        check_longitude(lng)?;
        Ok(Self { lat, lng })
    }

    /// Create a point without range checks, for coordinates reported by the map itself.
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn to_lat_lng(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = Error;

    fn try_from(lat_lng: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lat_lng[0], lat_lng[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        point.to_lat_lng()
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::from(Coord::from(point))
    }
}

impl TryFrom<Coord<f64>> for GeoPoint {
    type Error = Error;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

impl TryFrom<Point<f64>> for GeoPoint {
    type Error = Error;

    fn try_from(point: Point<f64>) -> Result<Self, Self::Error> {
        Self::try_from(point.0)
    }
}
