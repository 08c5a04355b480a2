use crate::GeoPoint;

/// The rendering capabilities of an interactive map used to give feedback
/// while a plot is drawn.
///
/// The capture only pushes commands to the map and never reads state back.
/// Every drawn layer is identified by a handle which is later passed to
/// [`MapLayers::remove_layer`].
pub trait MapLayers {
    type Handle;

    fn add_marker(&mut self, point: GeoPoint) -> Self::Handle;

    fn remove_layer(&mut self, handle: Self::Handle);

    /// open line through `points` in the given order
    fn draw_polyline(&mut self, points: &[GeoPoint]) -> Self::Handle;

    /// closed polygon through `points` in the given order
    fn draw_polygon(&mut self, points: &[GeoPoint]) -> Self::Handle;
}

impl<M: MapLayers + ?Sized> MapLayers for &mut M {
    type Handle = M::Handle;

    fn add_marker(&mut self, point: GeoPoint) -> Self::Handle {
        (**self).add_marker(point)
    }

    fn remove_layer(&mut self, handle: Self::Handle) {
        (**self).remove_layer(handle)
    }

    fn draw_polyline(&mut self, points: &[GeoPoint]) -> Self::Handle {
        (**self).draw_polyline(points)
    }

    fn draw_polygon(&mut self, points: &[GeoPoint]) -> Self::Handle {
        (**self).draw_polygon(points)
    }
}
