#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};

use crate::area::compute_area_hectares;
use crate::{GeoPoint, REQUIRED_POINTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "use-serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Phase {
    /// accepting points
    Drawing,

    /// all points selected and the area computed. Only a reset leaves this phase.
    Closed,
}

/// Snapshot of a [`CaptureSession`] returned after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub struct SessionState {
    pub phase: Phase,

    /// number of points still to be selected until the polygon closes
    pub points_remaining: usize,

    /// set once the polygon is closed
    pub area_hectares: Option<f64>,
}

/// The points selected for a single plot.
///
/// Points are kept in selection order, which defines the winding of the
/// resulting polygon. Once [`REQUIRED_POINTS`] points are selected the
/// session is closed and further points are ignored until [`CaptureSession::reset`]
/// is called.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaptureSession {
    points: Vec<GeoPoint>,
    area_hectares: Option<f64>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(REQUIRED_POINTS),
            area_hectares: None,
        }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn phase(&self) -> Phase {
        if self.area_hectares.is_some() {
            Phase::Closed
        } else {
            Phase::Drawing
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.phase() == Phase::Closed
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn area_hectares(&self) -> Option<f64> {
        self.area_hectares
    }

    pub fn points_remaining(&self) -> usize {
        REQUIRED_POINTS.saturating_sub(self.points.len())
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            phase: self.phase(),
            points_remaining: self.points_remaining(),
            area_hectares: self.area_hectares,
        }
    }

    /// Append a point. Closes the session when the last required point is added.
    ///
    /// Points added to a closed session are ignored.
    pub fn add_point(&mut self, point: GeoPoint) -> SessionState {
        if self.is_closed() {
            log::trace!("ignoring point {:?}, polygon is already closed", point);
            return self.state();
        }

        self.points.push(point);
        log::trace!(
            "added point {:?}, {} remaining",
            point,
            self.points_remaining()
        );

        if self.points.len() == REQUIRED_POINTS {
            let area = compute_area_hectares(&self.points);
            log::debug!("polygon closed with an area of {:.4} ha", area);
            self.area_hectares = Some(area);
        }
        self.state()
    }

    /// Remove the most recently added point while still drawing.
    pub fn undo_last_point(&mut self) -> SessionState {
        if !self.is_closed() && self.points.pop().is_some() {
            log::trace!("removed last point, {} remaining", self.points_remaining());
        }
        self.state()
    }

    pub fn reset(&mut self) -> SessionState {
        if !self.is_empty() {
            log::debug!("resetting session with {} points", self.points.len());
        }
        self.points.clear();
        self.area_hectares = None;
        self.state()
    }
}
