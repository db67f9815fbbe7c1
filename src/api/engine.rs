use indexmap::IndexMap;

use crate::core::{
    AnchorPoint, CoordinateMapper, DrawingStyle, PixelPoint, PointId, PointStore, ShapeIndex,
    TimeAxis, ValueAxis, Viewport,
};
use crate::error::{DrawingError, DrawingResult};
use crate::extensions::{DrawingContext, DrawingEvent, DrawingPlugin};
use crate::interaction::{DragEngine, DrawingMode, HandleVisibility, ModeController};

use super::behavior::{DefaultShapeBehavior, HandleStyle, ShapeBehavior};
use super::engine_config::DrawingEngineConfig;

/// Axes, viewport, and drawing data, bundled so behavior hooks can
/// mutate anchors while the engine keeps borrowing its gesture state.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingModel {
    pub(super) time_axis: TimeAxis,
    pub(super) value_axis: ValueAxis,
    pub(super) viewport: Viewport,
    pub(super) store: PointStore,
    pub(super) shapes: ShapeIndex,
    pub(super) style: DrawingStyle,
    pub(super) style_revision: u64,
}

impl DrawingModel {
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.time_axis, self.value_axis, self.viewport)
    }

    #[must_use]
    pub fn time_axis(&self) -> TimeAxis {
        self.time_axis
    }

    pub fn time_axis_mut(&mut self) -> &mut TimeAxis {
        &mut self.time_axis
    }

    #[must_use]
    pub fn value_axis(&self) -> ValueAxis {
        self.value_axis
    }

    pub fn value_axis_mut(&mut self) -> &mut ValueAxis {
        &mut self.value_axis
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PointStore {
        &mut self.store
    }

    #[must_use]
    pub fn shapes(&self) -> &ShapeIndex {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut ShapeIndex {
        &mut self.shapes
    }

    #[must_use]
    pub fn style(&self) -> &DrawingStyle {
        &self.style
    }

    /// Revision counter bumped on every restyle; anchors created after a
    /// bump capture the new templates.
    #[must_use]
    pub fn style_revision(&self) -> u64 {
        self.style_revision
    }

    pub(super) fn set_style(&mut self, style: DrawingStyle) {
        self.style = style;
        self.style_revision += 1;
    }
}

/// Base interactive drawing engine.
///
/// Owns the anchor/shape data model, the gesture state machine, drag
/// math, and handle visibility; concrete shape types drive it through
/// the lifecycle and router entry points and specialize it with a
/// [`ShapeBehavior`].
pub struct DrawingEngine {
    pub(super) model: DrawingModel,
    pub(super) mode: ModeController,
    pub(super) drag: DragEngine,
    pub(super) visibility: HandleVisibility,
    pub(super) behavior: Box<dyn ShapeBehavior>,
    pub(super) plugins: Vec<Box<dyn DrawingPlugin>>,
    pub(super) click_point: Option<PixelPoint>,
    pub(super) move_point: Option<PixelPoint>,
}

impl DrawingEngine {
    pub fn new(config: DrawingEngineConfig) -> DrawingResult<Self> {
        Self::with_behavior(config, Box::new(DefaultShapeBehavior))
    }

    pub fn with_behavior(
        config: DrawingEngineConfig,
        behavior: Box<dyn ShapeBehavior>,
    ) -> DrawingResult<Self> {
        if !config.viewport.is_valid() {
            return Err(DrawingError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let time_axis = TimeAxis::new(
            config.time_start,
            config.time_end,
            config.base_interval,
            config.locale,
        )?;
        let value_axis = ValueAxis::new_with_mode(
            config.value_min,
            config.value_max,
            config.value_display_mode,
        )?;
        config.style.validate()?;
        let mode = ModeController::new(config.drag_settle_seconds)?;

        Ok(Self {
            model: DrawingModel {
                time_axis,
                value_axis,
                viewport: config.viewport,
                store: PointStore::default(),
                shapes: ShapeIndex::default(),
                style: config.style,
                style_revision: 0,
            },
            mode,
            drag: DragEngine::default(),
            visibility: HandleVisibility::default(),
            behavior,
            plugins: Vec::new(),
            click_point: None,
            move_point: None,
        })
    }

    #[must_use]
    pub fn model(&self) -> &DrawingModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut DrawingModel {
        &mut self.model
    }

    #[must_use]
    pub fn mode(&self) -> DrawingMode {
        self.mode.mode()
    }

    #[must_use]
    pub fn drawing_enabled(&self) -> bool {
        self.mode.drawing_enabled()
    }

    #[must_use]
    pub fn erasing_enabled(&self) -> bool {
        self.mode.erasing_enabled()
    }

    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.mode.is_creating()
    }

    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        self.mode.is_pointer_down()
    }

    /// Marks a multi-gesture shape creation as in progress; cleared by
    /// `disable_drawing` or `finish_creation`.
    pub fn begin_creation(&mut self) {
        self.mode.set_creating(true);
    }

    pub fn finish_creation(&mut self) {
        self.mode.set_creating(false);
    }

    /// First usable anchor index in data order.
    #[must_use]
    pub fn start_index(&self) -> usize {
        0
    }

    /// One past the last usable anchor index in data order.
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.model.store.len()
    }

    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.model.store.len()
    }

    /// Number of shapes currently holding at least one anchor.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.model.shapes.occupied_count()
    }

    #[must_use]
    pub fn point(&self, id: PointId) -> Option<&AnchorPoint> {
        self.model.store.get(id)
    }

    #[must_use]
    pub fn shape_points(&self, shape: usize) -> Option<&IndexMap<String, PointId>> {
        self.model.shapes.slot(shape)
    }

    /// Shape whose handles are currently revealed, if any.
    #[must_use]
    pub fn visible_handles(&self) -> Option<usize> {
        self.visibility.visible_shape()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.visibility.is_hovered()
    }

    /// Last plot-local click recorded while drawing, if any.
    #[must_use]
    pub fn click_point(&self) -> Option<PixelPoint> {
        self.click_point
    }

    /// Last plot-local pointer position seen by the global move listener.
    #[must_use]
    pub fn move_point(&self) -> Option<PixelPoint> {
        self.move_point
    }

    #[must_use]
    pub fn style(&self) -> &DrawingStyle {
        &self.model.style
    }

    pub fn set_style(&mut self, style: DrawingStyle) -> DrawingResult<()> {
        style.validate()?;
        self.model.set_style(style);
        Ok(())
    }

    /// Grip template for newly rendered handles, after behavior tweaks.
    #[must_use]
    pub fn handle_style(&mut self) -> HandleStyle {
        let mut handle = HandleStyle {
            color: self.model.style.stroke_color,
            ..HandleStyle::default()
        };
        self.behavior.customize_handle(&mut handle);
        handle
    }

    pub fn add_plugin(&mut self, plugin: Box<dyn DrawingPlugin>) {
        self.plugins.push(plugin);
    }

    #[must_use]
    pub fn drawing_context(&self) -> DrawingContext {
        DrawingContext {
            viewport: self.model.viewport,
            time_visible_range: self.model.time_axis.visible_range(),
            value_domain: self.model.value_axis.domain(),
            anchor_count: self.model.store.len(),
            shape_count: self.model.shapes.occupied_count(),
            mode: self.mode.mode(),
        }
    }

    pub(super) fn emit(&mut self, event: DrawingEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.drawing_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
