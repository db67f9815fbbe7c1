pub mod behavior;
pub mod engine;
pub mod engine_config;
pub mod gesture_router;
pub mod lifecycle;

pub use behavior::{DefaultShapeBehavior, HandleStyle, ShapeBehavior};
pub use engine::{DrawingEngine, DrawingModel};
pub use engine_config::{DRAG_SETTLE_DEFAULT_SECONDS, DrawingEngineConfig};
