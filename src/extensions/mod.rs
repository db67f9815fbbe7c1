pub mod plugins;

pub use plugins::{DrawingContext, DrawingEvent, DrawingPlugin};
