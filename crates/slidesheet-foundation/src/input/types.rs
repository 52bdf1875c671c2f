use slidesheet_core::{Orientation, Point};

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer event in container coordinates.
///
/// `uptime_ms` is the host's monotonic event time; velocity tracking only
/// looks at differences between samples, so any fixed origin works.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_ms)
    }

    pub fn moved(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_ms)
    }

    pub fn up(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_ms)
    }

    pub fn cancel(x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), uptime_ms)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Integer x coordinate, truncated like platform touch positions.
    pub fn x(&self) -> i32 {
        self.position.x as i32
    }

    /// Integer y coordinate, truncated like platform touch positions.
    pub fn y(&self) -> i32 {
        self.position.y as i32
    }

    pub fn along(&self, orientation: Orientation) -> f32 {
        self.position.along(orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_default_pointer() {
        let event = PointerEvent::moved(12.7, -3.2, 40);
        assert_eq!(event.kind, PointerEventKind::Move);
        assert_eq!(event.id, 0);
        assert_eq!(event.x(), 12);
        assert_eq!(event.y(), -3);
        assert_eq!(event.with_id(7).id, 7);
    }
}
