use std::convert::TryFrom;

use geo_types::{Coord, LineString, Polygon};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::area::compute_area_hectares;
use crate::session::CaptureSession;
use crate::{Error, GeoPoint, REQUIRED_POINTS};

/// A closed plot as handed over to the listing form.
///
/// Always holds exactly [`REQUIRED_POINTS`] points. Points serialize as
/// `[lat, lng]` pairs in selection order. When deserializing, the point
/// count is checked and the area is recomputed from the points; a
/// transmitted `area_hectares` is not trusted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "use-serde", derive(Serialize))]
pub struct AreaSubmission {
    points: Vec<GeoPoint>,
    area_hectares: f64,
}

impl AreaSubmission {
    /// Build a submission from the plot corners in selection order.
    pub fn from_points(points: Vec<GeoPoint>) -> Result<Self, Error> {
        if points.len() != REQUIRED_POINTS {
            return Err(Error::IncompletePolygon(points.len()));
        }
        let area_hectares = compute_area_hectares(&points);
        Ok(Self {
            points,
            area_hectares,
        })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn area_hectares(&self) -> f64 {
        self.area_hectares
    }

    pub fn lat_lng_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GeoPoint::to_lat_lng).collect()
    }

    /// the plot as a polygon with a closed exterior ring
    pub fn to_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self.points.iter().copied().map(Coord::from).collect();
        Polygon::new(LineString::from(coords), vec![])
    }
}

/// Only a closed session with exactly [`REQUIRED_POINTS`] points can be submitted.
impl TryFrom<&CaptureSession> for AreaSubmission {
    type Error = Error;

    fn try_from(session: &CaptureSession) -> Result<Self, Self::Error> {
        let points = session.points();
        match session.area_hectares() {
            Some(area_hectares) if points.len() == REQUIRED_POINTS => Ok(Self {
                points: points.to_vec(),
                area_hectares,
            }),
            _ => Err(Error::IncompletePolygon(points.len())),
        }
    }
}

#[cfg(feature = "use-serde")]
impl<'de> Deserialize<'de> for AreaSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Points {
            points: Vec<GeoPoint>,
        }

        let Points { points } = Points::deserialize(deserializer)?;
        Self::from_points(points).map_err(serde::de::Error::custom)
    }
}
