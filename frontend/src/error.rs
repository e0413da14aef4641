use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Canvas element is not mounted")]
    MissingCanvas,
    #[error("Failed to get drawing context: {0}")]
    ContextUnavailable(String),
    #[error("Drawing context is not 2d")]
    NotTwoDimensional,
}
