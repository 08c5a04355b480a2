use crate::map::MapLayers;
use crate::session::{CaptureSession, Phase, SessionState};
use crate::submission::AreaSubmission;
use crate::{Error, GeoPoint};

/// Drives a [`CaptureSession`] from map interaction and mirrors its
/// state onto the map.
///
/// Every selected point gets a marker. While drawing, two or three points are
/// connected by a polyline preview; the fourth point replaces the preview by
/// the closed polygon.
pub struct AreaCapture<M: MapLayers> {
    map: M,
    session: CaptureSession,
    markers: Vec<M::Handle>,
    shape: Option<M::Handle>,
}

impl<M: MapLayers> AreaCapture<M> {
    pub fn new(map: M) -> Self {
        Self {
            map,
            session: CaptureSession::new(),
            markers: Vec::new(),
            shape: None,
        }
    }

    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn into_map(self) -> M {
        self.map
    }

    pub fn add_point(&mut self, point: GeoPoint) -> SessionState {
        if self.session.is_closed() {
            log::trace!("map click ignored, polygon is closed");
            return self.session.state();
        }
        let state = self.session.add_point(point);
        self.markers.push(self.map.add_marker(point));
        self.redraw_shape();
        state
    }

    /// Remove the last selected point and its marker. Has no effect once the
    /// polygon is closed.
    pub fn undo_last_point(&mut self) -> SessionState {
        if self.session.is_closed() || self.session.is_empty() {
            return self.session.state();
        }
        let state = self.session.undo_last_point();
        if let Some(marker) = self.markers.pop() {
            self.map.remove_layer(marker);
        }
        self.redraw_shape();
        state
    }

    /// Remove everything drawn on the map and start over.
    pub fn reset(&mut self) {
        if let Some(shape) = self.shape.take() {
            self.map.remove_layer(shape);
        }
        for marker in self.markers.drain(..) {
            self.map.remove_layer(marker);
        }
        self.session.reset();
    }

    /// The closed plot, ready to be submitted.
    pub fn submission(&self) -> Result<AreaSubmission, Error> {
        AreaSubmission::try_from(&self.session)
    }

    fn redraw_shape(&mut self) {
        if let Some(shape) = self.shape.take() {
            self.map.remove_layer(shape);
        }
        let points = self.session.points();
        self.shape = match self.session.phase() {
            Phase::Closed => Some(self.map.draw_polygon(points)),
            Phase::Drawing if points.len() >= 2 => Some(self.map.draw_polyline(points)),
            Phase::Drawing => None,
        };
    }
}
