use serde::{Deserialize, Serialize};

use crate::core::{PointId, Viewport};
use crate::interaction::DrawingMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingContext {
    pub viewport: Viewport,
    pub time_visible_range: (f64, f64),
    pub value_domain: (f64, f64),
    pub anchor_count: usize,
    pub shape_count: usize,
    pub mode: DrawingMode,
}

/// Event stream exposed to plugins.
///
/// Rendering-side collaborators subscribe here to mirror engine state
/// onto their scene graph: grip visibility, stroke/fill drag pairing,
/// and shape lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawingEvent {
    DrawingEnabled,
    DrawingDisabled,
    ErasingEnabled,
    ErasingDisabled,
    AnchorInserted { shape: usize, point: PointId },
    ShapeErased { shape: usize, removed_points: usize },
    DrawingsCleared { shapes: usize },
    ShapeDragStarted { shape: usize },
    ShapeDragFinished { shape: usize },
    HandleDragged { shape: usize },
    HandleDragFinished { shape: usize },
    HandlesShown { shape: usize },
    HandlesHidden,
    StrokeHovered { shape: usize },
    StrokeSyncDragStarted { shape: usize },
    StrokeSyncDragStopped { shape: usize },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating
/// engine internals directly.
pub trait DrawingPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: DrawingEvent, context: DrawingContext);
}
