use thiserror::Error;

pub type DrawingResult<T> = Result<T, DrawingError>;

#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
