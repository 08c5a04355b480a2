//! Capture of a four-point plot on an interactive map and the approximation
//! of its area.
//!
//! A [`CaptureSession`] collects the points selected by the user. [`AreaCapture`]
//! additionally mirrors the session onto a map implementing [`MapLayers`]:
//! markers for the points, a polyline preview while drawing and the polygon
//! once the plot is closed. Map interaction can be routed through
//! [`events::EventHandlers`].
//!
//! The area is approximated by [`area::compute_area_hectares`], see the
//! [`area`] module for the formula.
#![warn(
    clippy::all,
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    nonstandard_style
)]

pub use {
    area::{compute_area_hectares, SphericalArea},
    capture::AreaCapture,
    error::Error,
    map::MapLayers,
    point::GeoPoint,
    session::{CaptureSession, Phase, SessionState},
    submission::AreaSubmission,
};

pub mod area;
mod capture;
pub mod error;
pub mod events;
mod map;
mod point;
mod session;
mod submission;

/// number of points which close a plot
pub const REQUIRED_POINTS: usize = 4;
