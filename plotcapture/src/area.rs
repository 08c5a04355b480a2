//! Approximate area of a polygon on the earth's surface.
//!
//! The polygon edges are projected onto `(longitude, sin(latitude))` and
//! the trapezoids under each edge are summed up. This is an equal-area
//! approximation on a sphere with the WGS-84 equatorial radius, without any
//! ellipsoidal correction. The values are kept bit-compatible with areas
//! already stored by the backend, so the summation order must not change.
use std::f64::consts::PI;

use geo_types::{LineString, Polygon};

use crate::GeoPoint;

/// WGS-84 equatorial radius in meters
pub const EARTH_RADIUS_M: f64 = 6378137.0;

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

pub const SQUARE_METERS_PER_KM2: f64 = 1_000_000.0;

const DEG_TO_RAD: f64 = PI / 180.0;

/// trait for types with an approximated spherical area
pub trait SphericalArea {
    /// Retrieves the area of `self` in square meters
    fn spherical_area_m2(&self) -> f64;

    /// Retrieves the area of `self` in hectares
    fn spherical_area_hectares(&self) -> f64 {
        self.spherical_area_m2() / SQUARE_METERS_PER_HECTARE
    }

    /// Retrieves the area of `self` in square kilometers
    fn spherical_area_km2(&self) -> f64 {
        self.spherical_area_m2() / SQUARE_METERS_PER_KM2
    }
}

/// Area in hectares of the ring spanned by `points` in the given order.
///
/// Rings with less than three points have an area of exactly `0`.
pub fn compute_area_hectares(points: &[GeoPoint]) -> f64 {
    points.spherical_area_hectares()
}

#[inline]
fn edge_term(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;
    (lng2 - lng1) * DEG_TO_RAD * (2.0 + (lat1 * DEG_TO_RAD).sin() + (lat2 * DEG_TO_RAD).sin())
}

/// area of a ring given as `(lat, lng)` tuples. The ring is closed implicitly
/// by the edge from the last to the first vertex.
fn ring_area_m2<I>(lat_lngs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut num_vertices = 0_usize;
    let mut sum = 0.0_f64;
    let mut first = None;
    let mut previous = None;

    for vertex in lat_lngs {
        num_vertices += 1;
        match previous {
            Some(prev) => sum += edge_term(prev, vertex),
            None => first = Some(vertex),
        }
        previous = Some(vertex);
    }

    if num_vertices < 3 {
        return 0.0;
    }
    if let (Some(last), Some(first)) = (previous, first) {
        sum += edge_term(last, first);
    }
    sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0
}

impl SphericalArea for [GeoPoint] {
    fn spherical_area_m2(&self) -> f64 {
        ring_area_m2(self.iter().map(|p| (p.lat(), p.lng())))
    }
}

impl SphericalArea for Vec<GeoPoint> {
    fn spherical_area_m2(&self) -> f64 {
        self.as_slice().spherical_area_m2()
    }
}

/// `x` is the longitude, `y` the latitude. An explicitly closed ring is fine
/// as the closing edge has no extent in longitude.
impl SphericalArea for LineString<f64> {
    fn spherical_area_m2(&self) -> f64 {
        ring_area_m2(self.0.iter().map(|c| (c.y, c.x)))
    }
}

/// the area of the exterior ring minus the areas of all holes
impl SphericalArea for Polygon<f64> {
    fn spherical_area_m2(&self) -> f64 {
        let holes: f64 = self
            .interiors()
            .iter()
            .map(|ring| ring.spherical_area_m2())
            .sum();
        (self.exterior().spherical_area_m2() - holes).max(0.0)
    }
}
