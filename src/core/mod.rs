pub mod anchor;
pub mod coords;
pub mod interval;
pub mod primitives;
pub mod scale;
pub mod shape_index;
pub mod style;
pub mod time_axis;
pub mod types;
pub mod value_axis;

pub use anchor::{AnchorPoint, PointId, PointStore, ShapeMembership};
pub use coords::CoordinateMapper;
pub use interval::{AxisLocale, BaseInterval, TimeUnit};
pub use scale::LinearScale;
pub use shape_index::{IDLE_SHAPE, ShapeIndex};
pub use style::{DrawingStyle, FillTemplate, Rgba, StrokeTemplate};
pub use time_axis::TimeAxis;
pub use types::{PixelPoint, Viewport};
pub use value_axis::{ValueAxis, ValueDisplayMode};
