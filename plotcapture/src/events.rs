//! Typed dispatch of map interaction to a capture.
use std::fmt;

use hashbrown::HashMap;

use crate::capture::AreaCapture;
use crate::map::MapLayers;
use crate::session::SessionState;
use crate::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Reset,
    Undo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// the user selected a location on the map
    Click(GeoPoint),
    Reset,
    Undo,
}

impl MapEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click(_) => EventKind::Click,
            Self::Reset => EventKind::Reset,
            Self::Undo => EventKind::Undo,
        }
    }
}

pub type Handler<T> = fn(&mut T, &MapEvent) -> SessionState;

/// Handler table keyed by [`EventKind`].
pub struct EventHandlers<T> {
    handlers: HashMap<EventKind, Handler<T>>,
}

impl<T> EventHandlers<T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `kind`, replacing a previously registered one.
    pub fn on(&mut self, kind: EventKind, handler: Handler<T>) -> &mut Self {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Pass `event` to the handler registered for its kind. Returns `None`
    /// when there is none.
    pub fn dispatch(&self, target: &mut T, event: &MapEvent) -> Option<SessionState> {
        match self.handlers.get(&event.kind()) {
            Some(handler) => Some(handler(target, event)),
            None => {
                log::trace!("no handler registered for {:?}", event.kind());
                None
            }
        }
    }
}

impl<T> Default for EventHandlers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHandlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

fn on_click<M: MapLayers>(capture: &mut AreaCapture<M>, event: &MapEvent) -> SessionState {
    match event {
        MapEvent::Click(point) => capture.add_point(*point),
        other => {
            log::trace!("click handler ignoring {:?}", other);
            capture.state()
        }
    }
}

fn on_reset<M: MapLayers>(capture: &mut AreaCapture<M>, _event: &MapEvent) -> SessionState {
    capture.reset();
    capture.state()
}

fn on_undo<M: MapLayers>(capture: &mut AreaCapture<M>, _event: &MapEvent) -> SessionState {
    capture.undo_last_point()
}

impl<M: MapLayers> AreaCapture<M> {
    /// the default handlers: clicks add points, reset and undo act on the capture
    pub fn event_handlers() -> EventHandlers<Self> {
        let mut handlers = EventHandlers::new();
        handlers
            .on(EventKind::Click, on_click::<M>)
            .on(EventKind::Reset, on_reset::<M>)
            .on(EventKind::Undo, on_undo::<M>);
        handlers
    }
}

#[cfg(test)]
mod tests {
    use super::{on_click, EventHandlers, EventKind, MapEvent};
    use crate::capture::AreaCapture;
    use crate::map::testing::RecordingMap;
    use crate::session::{Phase, SessionState};
    use crate::GeoPoint;

    fn clicks() -> Vec<MapEvent> {
        [(45.80, 15.97), (45.80, 15.98), (45.81, 15.98), (45.81, 15.97)]
            .iter()
            .map(|(lat, lng)| MapEvent::Click(GeoPoint::new(*lat, *lng).unwrap()))
            .collect()
    }

    #[test]
    fn default_handlers() {
        let handlers = AreaCapture::<RecordingMap>::event_handlers();
        let mut capture = AreaCapture::new(RecordingMap::default());

        let mut last = None;
        for event in clicks() {
            last = handlers.dispatch(&mut capture, &event);
        }
        assert_eq!(last.map(|s| s.phase), Some(Phase::Closed));

        let state = handlers.dispatch(&mut capture, &MapEvent::Reset).unwrap();
        assert_eq!(state.phase, Phase::Drawing);
        assert!(capture.map().layers.is_empty());
    }

    #[test]
    fn unregistered_kind_is_not_dispatched() {
        let mut handlers = EventHandlers::<AreaCapture<RecordingMap>>::new();
        handlers.on(
            EventKind::Click,
            |capture: &mut AreaCapture<RecordingMap>, event: &MapEvent| match event {
                MapEvent::Click(point) => capture.add_point(*point),
                _ => capture.state(),
            },
        );
        assert!(!handlers.is_registered(EventKind::Reset));

        let mut capture = AreaCapture::new(RecordingMap::default());
        handlers.dispatch(&mut capture, &clicks()[0]);
        assert_eq!(handlers.dispatch(&mut capture, &MapEvent::Reset), None);
        assert_eq!(capture.session().points().len(), 1);
    }

    #[test]
    fn replaced_handler() {
        fn ignore(capture: &mut AreaCapture<RecordingMap>, _: &MapEvent) -> SessionState {
            capture.state()
        }

        let mut handlers = AreaCapture::<RecordingMap>::event_handlers();
        handlers.on(EventKind::Click, ignore);

        let mut capture = AreaCapture::new(RecordingMap::default());
        for event in clicks() {
            handlers.dispatch(&mut capture, &event);
        }
        assert!(capture.session().is_empty());
    }

    #[test]
    fn undo_and_late_clicks() {
        let handlers = AreaCapture::<RecordingMap>::event_handlers();
        let mut capture = AreaCapture::new(RecordingMap::default());

        let mut events = clicks();
        events.insert(2, MapEvent::Undo);
        events.push(MapEvent::Click(GeoPoint::new(45.0, 15.0).unwrap()));

        let states: Vec<_> = events
            .iter()
            .map(|event| handlers.dispatch(&mut capture, event).unwrap())
            .collect();
        let remaining: Vec<_> = states.iter().map(|s| s.points_remaining).collect();
        assert_eq!(remaining, vec![3, 2, 3, 2, 1, 0]);
        assert_eq!(states.last().map(|s| s.phase), Some(Phase::Closed));

        // the undone second click does not take part in the polygon
        let selected: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                MapEvent::Click(point) => Some(*point),
                _ => None,
            })
            .collect();
        assert_eq!(capture.session().points()[0], selected[0]);
        assert_eq!(capture.session().points()[1..], selected[2..]);

        // undo is ignored once the polygon is closed
        let undo = handlers.dispatch(&mut capture, &MapEvent::Undo).unwrap();
        assert_eq!(undo.phase, Phase::Closed);
        assert_eq!(capture.session().points().len(), 4);
    }

    #[test]
    fn click_handler_ignores_other_events() {
        let mut capture = AreaCapture::new(RecordingMap::default());
        on_click(&mut capture, &clicks()[0]);
        let before = capture.state();
        let num_commands = capture.map().num_commands;

        assert_eq!(on_click(&mut capture, &MapEvent::Reset), before);
        assert_eq!(on_click(&mut capture, &MapEvent::Undo), before);
        assert_eq!(capture.map().num_commands, num_commands);
        assert_eq!(capture.session().points().len(), 1);
    }
}
