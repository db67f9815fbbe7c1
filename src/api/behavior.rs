use crate::core::Rgba;

use super::engine::DrawingModel;

/// Visual parameters of one editing grip, tweakable per shape type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    pub radius_px: f64,
    pub color: Option<Rgba>,
    pub draggable: bool,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            radius_px: 5.0,
            color: None,
            draggable: true,
        }
    }
}

/// Strategy hooks concrete shape types implement over the base engine.
///
/// Every method defaults to a no-op; the base engine only provides the
/// mapped coordinates and index bookkeeping. A trend-line type would
/// re-derive its projection in `update_segment`, a fan type would
/// recompute derived control points in `on_handle_dragged`, and so on.
pub trait ShapeBehavior {
    /// Recomputes shape-specific geometry after anchors of `shape` moved.
    fn update_segment(&mut self, _model: &mut DrawingModel, _shape: usize) {}

    /// Refreshes any derived presentation state after a batch of edits.
    fn update_elements(&mut self, _model: &mut DrawingModel) {}

    /// Adjusts grip appearance for this shape type.
    fn customize_handle(&mut self, _handle: &mut HandleStyle) {}

    /// Re-derivation hook invoked after one anchor was dragged to a new
    /// absolute position.
    fn on_handle_dragged(&mut self, _model: &mut DrawingModel, _shape: usize, _corner: &str) {}

    fn on_handle_drag_start(&mut self, _model: &mut DrawingModel) {}

    fn on_handle_drag_stop(&mut self, _model: &mut DrawingModel) {}

    fn on_pointer_over(&mut self, _model: &mut DrawingModel) {}

    fn on_pointer_out(&mut self, _model: &mut DrawingModel) {}
}

/// Base-engine behavior: every hook is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultShapeBehavior;

impl ShapeBehavior for DefaultShapeBehavior {}
