pub mod drag;
pub mod visibility;

use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PointId};
use crate::error::{DrawingError, DrawingResult};

pub use drag::{DragBaseline, DragEngine};
pub use visibility::HandleVisibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

impl PointerButton {
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// One normalized pointer event as delivered by the host.
///
/// `time` is host-supplied monotonic seconds; the engine never reads a
/// clock of its own, which keeps drag/click disambiguation deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub point: PixelPoint,
    pub button: PointerButton,
    pub time: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(point: PixelPoint, button: PointerButton, time: f64) -> Self {
        Self {
            point,
            button,
            time,
        }
    }

    #[must_use]
    pub fn primary(x: f64, y: f64, time: f64) -> Self {
        Self::new(PixelPoint::new(x, y), PointerButton::Primary, time)
    }

    #[must_use]
    pub fn is_usable(self) -> bool {
        self.point.is_finite() && self.time.is_finite()
    }
}

/// Typed back-reference from a rendered element to what it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    Stroke { shape: usize },
    Fill { shape: usize },
    Handle { point: PointId },
}

/// Which drag interpretation is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    Shape(usize),
    Handle(PointId),
}

/// Derived gesture interpretation exposed to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawingMode {
    Idle,
    Drawing,
    DraggingShape,
    DraggingHandle,
    Erasing,
}

/// Plot-container listener registrations, one flag per event stream.
///
/// Mirrors host-side subscription handles: subscribe is idempotent and
/// router entry points drop events whose listener is not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalListeners {
    pub click: bool,
    pub pointer_down: bool,
    pub pointer_up: bool,
    pub pointer_move: bool,
}

impl GlobalListeners {
    pub fn subscribe_all(&mut self) {
        self.click = true;
        self.pointer_down = true;
        self.pointer_up = true;
        self.pointer_move = true;
    }

    pub fn unsubscribe_all(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.click || self.pointer_down || self.pointer_up || self.pointer_move
    }
}

/// Gesture state machine owning which interpretation is active.
///
/// All raw flags stay private; legal-state rules (drawing and erasing are
/// never both interpreted for one event, drags serialize mutation) are
/// enforced here and queried through accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeController {
    drawing_enabled: bool,
    erasing_enabled: bool,
    creating: bool,
    pointer_down: bool,
    drag: Option<DragKind>,
    settle_deadline: Option<f64>,
    settle_delay: f64,
    listeners: GlobalListeners,
}

impl ModeController {
    pub fn new(settle_delay: f64) -> DrawingResult<Self> {
        if !settle_delay.is_finite() || settle_delay < 0.0 {
            return Err(DrawingError::InvalidData(
                "drag settle delay must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            drawing_enabled: false,
            erasing_enabled: false,
            creating: false,
            pointer_down: false,
            drag: None,
            settle_deadline: None,
            settle_delay,
            listeners: GlobalListeners::default(),
        })
    }

    #[must_use]
    pub fn mode(self) -> DrawingMode {
        match self.drag {
            Some(DragKind::Shape(_)) => DrawingMode::DraggingShape,
            Some(DragKind::Handle(_)) => DrawingMode::DraggingHandle,
            None if self.erasing_enabled => DrawingMode::Erasing,
            None if self.drawing_enabled => DrawingMode::Drawing,
            None => DrawingMode::Idle,
        }
    }

    #[must_use]
    pub fn drawing_enabled(self) -> bool {
        self.drawing_enabled
    }

    #[must_use]
    pub fn erasing_enabled(self) -> bool {
        self.erasing_enabled
    }

    #[must_use]
    pub fn is_creating(self) -> bool {
        self.creating
    }

    #[must_use]
    pub fn is_pointer_down(self) -> bool {
        self.pointer_down
    }

    #[must_use]
    pub fn active_drag(self) -> Option<DragKind> {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn listeners(self) -> GlobalListeners {
        self.listeners
    }

    #[must_use]
    pub fn settle_delay(self) -> f64 {
        self.settle_delay
    }

    pub fn enable_drawing(&mut self) {
        self.erasing_enabled = false;
        self.drawing_enabled = true;
        // Idempotent: re-enabling never doubles a registration.
        self.listeners.subscribe_all();
    }

    pub fn disable_drawing(&mut self) {
        self.erasing_enabled = false;
        self.drawing_enabled = false;
        self.creating = false;
        self.listeners.unsubscribe_all();
    }

    pub fn enable_erasing(&mut self) {
        self.erasing_enabled = true;
    }

    pub fn disable_erasing(&mut self) {
        self.erasing_enabled = false;
    }

    pub fn set_creating(&mut self, creating: bool) {
        self.creating = creating;
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }

    pub fn begin_drag(&mut self, kind: DragKind) {
        self.drag = Some(kind);
        // A pending settle deadline belongs to the previous drag; clear it
        // so its expiry cannot leak into this one.
        self.settle_deadline = None;
    }

    /// Ends the active drag and opens the click-suppression window.
    pub fn finish_drag(&mut self, now: f64) {
        self.drag = None;
        if now.is_finite() {
            self.settle_deadline = Some(now + self.settle_delay);
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// True while a drag is active or inside the post-drag settle window.
    /// Clicks in this window must not create or finalize shapes.
    #[must_use]
    pub fn suppresses_click(self, now: f64) -> bool {
        if self.drag.is_some() {
            return true;
        }
        match self.settle_deadline {
            Some(deadline) => now < deadline,
            None => false,
        }
    }
}
